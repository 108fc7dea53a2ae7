use actix_web::{http, web, App, HttpServer};
use actix_web::dev::Server;
use tracing_actix_web::TracingLogger;
use std::net::TcpListener;
use std::sync::Arc;
use actix_cors::Cors;

pub mod catalog;
pub mod config;
mod handlers;
pub mod models;
mod routes;
pub mod services;
pub mod telemetry;
pub mod tournament;

use crate::catalog::SportCatalog;
use crate::routes::init_routes;
use crate::services::TournamentServiceClient;
use crate::tournament::TournamentDraftService;

pub fn run(
    listener: TcpListener,
    catalog: Arc<SportCatalog>,
    tournament_client: TournamentServiceClient,
    allowed_origins: Vec<String>,
) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let draft_service = web::Data::new(TournamentDraftService::new(catalog));
    let tournament_client = web::Data::new(tournament_client);

    let server = HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH"])
            .allowed_headers(vec![
                http::header::AUTHORIZATION,
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
            ])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            // Get a pointer copy and attach it to the application state
            .app_data(draft_service.clone())
            .app_data(tournament_client.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
