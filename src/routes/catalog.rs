// src/routes/catalog.rs
use actix_web::{get, web, HttpResponse, Result};

use crate::handlers::catalog_handler;
use crate::tournament::TournamentDraftService;

/// List all sports in the catalog
#[get("/sports")]
async fn list_sports(
    service: web::Data<TournamentDraftService>,
) -> Result<HttpResponse> {
    catalog_handler::list_sports(service).await
}

/// Get a single sport definition
#[get("/sports/{sport_id}")]
async fn get_sport(
    path: web::Path<String>,
    service: web::Data<TournamentDraftService>,
) -> Result<HttpResponse> {
    let sport_id = path.into_inner();
    catalog_handler::get_sport(sport_id, service).await
}
