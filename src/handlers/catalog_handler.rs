use actix_web::{web, HttpResponse, Result};
use serde::Serialize;

use crate::models::common::ApiResponse;
use crate::models::sport::SportDefinition;
use crate::tournament::TournamentDraftService;

#[derive(Serialize)]
pub struct CatalogResponse<'a> {
    pub version: &'a str,
    pub sports: &'a [SportDefinition],
}

// GET /catalog/sports - List every sport in display order
pub async fn list_sports(
    service: web::Data<TournamentDraftService>,
) -> Result<HttpResponse> {
    let catalog = service.catalog();
    let response = ApiResponse::success(
        "Sport catalog retrieved",
        CatalogResponse {
            version: catalog.version(),
            sports: catalog.list_all(),
        },
    );
    Ok(HttpResponse::Ok().json(response))
}

// GET /catalog/sports/{sport_id} - Get one sport definition
pub async fn get_sport(
    sport_id: String,
    service: web::Data<TournamentDraftService>,
) -> Result<HttpResponse> {
    match service.catalog().find_by_id(&sport_id) {
        Ok(sport) => Ok(HttpResponse::Ok().json(ApiResponse::success("Sport retrieved", sport))),
        Err(e) => Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error(e.to_string()))),
    }
}
