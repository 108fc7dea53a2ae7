use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use chrono::Utc;
use once_cell::sync::Lazy;
use secrecy::SecretString;
use serde_json::{json, Value};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use tourney_backend::catalog::SportCatalog;
use tourney_backend::config::tournament_service::TournamentServiceSettings;
use tourney_backend::run;
use tourney_backend::services::TournamentServiceClient;
use tourney_backend::telemetry::{get_subscriber, init_subscriber};

pub const TEST_API_KEY: &str = "test-api-key";

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout
        );
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink
        );
        init_subscriber(subscriber);
    }
});

/// How the stub Tournament Service answers create-tournament requests
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum StubBehaviour {
    Accept,
    Reject,
}

pub struct StubTournamentService {
    pub address: String,
    pub received: Arc<Mutex<Vec<Value>>>,
}

impl StubTournamentService {
    pub fn received_count(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    pub fn last_received(&self) -> Option<Value> {
        self.received.lock().unwrap().last().cloned()
    }
}

pub struct TestApp {
    pub address: String,
    pub tournament_service: StubTournamentService,
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(StubBehaviour::Accept).await
}

pub async fn spawn_app_with(behaviour: StubBehaviour) -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let tournament_service = spawn_stub_tournament_service(behaviour);

    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let catalog = Arc::new(SportCatalog::builtin().expect("Built-in catalog must be valid"));
    let settings = TournamentServiceSettings::new(
        tournament_service.address.clone(),
        SecretString::new(TEST_API_KEY.into()),
    );
    let server = run(
        listener,
        catalog,
        TournamentServiceClient::new(&settings),
        vec!["http://localhost:3000".to_string()],
    )
        .expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);

    TestApp {
        address,
        tournament_service,
    }
}

fn spawn_stub_tournament_service(behaviour: StubBehaviour) -> StubTournamentService {
    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port for stub tournament service");
    let port = listener.local_addr().unwrap().port();
    let received: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));

    let received_data = web::Data::from(received.clone());
    let server = HttpServer::new(move || {
        App::new()
            .app_data(received_data.clone())
            .app_data(web::Data::new(behaviour))
            .route("/tournaments", web::post().to(create_tournament_stub))
    })
    .listen(listener)
    .expect("Failed to listen for stub tournament service")
    .run();
    let _ = tokio::spawn(server);

    StubTournamentService {
        address: format!("http://127.0.0.1:{}", port),
        received,
    }
}

async fn create_tournament_stub(
    req: HttpRequest,
    body: web::Json<Value>,
    received: web::Data<Mutex<Vec<Value>>>,
    behaviour: web::Data<StubBehaviour>,
) -> HttpResponse {
    let api_key = req
        .headers()
        .get("X-API-Key")
        .and_then(|v| v.to_str().ok());
    if api_key != Some(TEST_API_KEY) {
        return HttpResponse::Unauthorized().json(json!({ "message": "Missing or invalid API key" }));
    }

    received.lock().unwrap().push(body.into_inner());

    match *behaviour.get_ref() {
        StubBehaviour::Accept => {
            let now = Utc::now();
            HttpResponse::Created().json(json!({
                "id": format!("tournament-{}", Uuid::new_v4()),
                "created_at": now,
                "updated_at": now
            }))
        }
        StubBehaviour::Reject => HttpResponse::InternalServerError().json(json!({
            "message": "Tournament storage unavailable"
        })),
    }
}
