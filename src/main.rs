use std::net::TcpListener;
use std::sync::Arc;

use tourney_backend::config::settings::get_config;
use tourney_backend::run;
use tourney_backend::services::TournamentServiceClient;
use tourney_backend::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "tourney-backend".into(),
        config.application.log_level.clone(),
        std::io::stdout
    );
    init_subscriber(subscriber);

    // A broken catalog is fatal
    let catalog = match config.catalog.load() {
        Ok(catalog) => {
            tracing::info!(
                "Loaded sport catalog version {} with {} sports",
                catalog.version(),
                catalog.len()
            );
            Arc::new(catalog)
        }
        Err(e) => {
            tracing::error!("Failed to load sport catalog: {}", e);
            eprintln!("Failed to load sport catalog: {}", e);
            std::process::exit(1);
        }
    };

    let tournament_client = TournamentServiceClient::new(&config.tournament_service);

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Listening on {}", address);

    run(
        listener,
        catalog,
        tournament_client,
        config.application.allowed_origins.clone(),
    )?.await
}
