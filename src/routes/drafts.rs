// src/routes/drafts.rs
use actix_web::{delete, get, patch, post, web, HttpResponse, Result};
use uuid::Uuid;

use crate::handlers::draft_handler::{
    self, AddSportRequest, ConfigureSportRequest, MoveSportRequest, UpdateDraftRequest,
    VersionQuery,
};
use crate::models::draft::TournamentMetadata;
use crate::services::tournament_client::TournamentServiceClient;
use crate::tournament::TournamentDraftService;

/// List all drafts
#[get("")]
async fn list_drafts(
    service: web::Data<TournamentDraftService>,
) -> Result<HttpResponse> {
    draft_handler::list_drafts(service).await
}

/// Create a new draft
#[post("")]
async fn create_draft(
    body: web::Json<TournamentMetadata>,
    service: web::Data<TournamentDraftService>,
) -> Result<HttpResponse> {
    draft_handler::create_draft(body, service).await
}

/// Get a draft by ID
#[get("/{draft_id}")]
async fn get_draft(
    path: web::Path<Uuid>,
    service: web::Data<TournamentDraftService>,
) -> Result<HttpResponse> {
    let draft_id = path.into_inner();
    draft_handler::get_draft(draft_id, service).await
}

/// Update draft metadata
#[patch("/{draft_id}")]
async fn update_draft(
    path: web::Path<Uuid>,
    body: web::Json<UpdateDraftRequest>,
    service: web::Data<TournamentDraftService>,
) -> Result<HttpResponse> {
    let draft_id = path.into_inner();
    draft_handler::update_draft(draft_id, body, service).await
}

/// Delete a draft
#[delete("/{draft_id}")]
async fn delete_draft(
    path: web::Path<Uuid>,
    query: web::Query<VersionQuery>,
    service: web::Data<TournamentDraftService>,
) -> Result<HttpResponse> {
    let draft_id = path.into_inner();
    draft_handler::delete_draft(draft_id, query, service).await
}

/// Add a sport to a draft
#[post("/{draft_id}/sports")]
async fn add_sport(
    path: web::Path<Uuid>,
    body: web::Json<AddSportRequest>,
    service: web::Data<TournamentDraftService>,
) -> Result<HttpResponse> {
    let draft_id = path.into_inner();
    draft_handler::add_sport(draft_id, body, service).await
}

/// Remove a sport from a draft
#[delete("/{draft_id}/sports/{instance_id}")]
async fn remove_sport(
    path: web::Path<(Uuid, Uuid)>,
    query: web::Query<VersionQuery>,
    service: web::Data<TournamentDraftService>,
) -> Result<HttpResponse> {
    let (draft_id, instance_id) = path.into_inner();
    draft_handler::remove_sport(draft_id, instance_id, query, service).await
}

/// Move a sport to a new position
#[post("/{draft_id}/sports/{instance_id}/move")]
async fn move_sport(
    path: web::Path<(Uuid, Uuid)>,
    body: web::Json<MoveSportRequest>,
    service: web::Data<TournamentDraftService>,
) -> Result<HttpResponse> {
    let (draft_id, instance_id) = path.into_inner();
    draft_handler::move_sport(draft_id, instance_id, body, service).await
}

/// Configure a sport
#[patch("/{draft_id}/sports/{instance_id}")]
async fn configure_sport(
    path: web::Path<(Uuid, Uuid)>,
    body: web::Json<ConfigureSportRequest>,
    service: web::Data<TournamentDraftService>,
) -> Result<HttpResponse> {
    let (draft_id, instance_id) = path.into_inner();
    draft_handler::configure_sport(draft_id, instance_id, body, service).await
}

/// Check whether a sport is ready for submission
#[get("/{draft_id}/sports/{instance_id}/ready")]
async fn sport_readiness(
    path: web::Path<(Uuid, Uuid)>,
    service: web::Data<TournamentDraftService>,
) -> Result<HttpResponse> {
    let (draft_id, instance_id) = path.into_inner();
    draft_handler::sport_readiness(draft_id, instance_id, service).await
}

/// Preview the submission payload
#[post("/{draft_id}/assemble")]
async fn assemble_draft(
    path: web::Path<Uuid>,
    service: web::Data<TournamentDraftService>,
) -> Result<HttpResponse> {
    let draft_id = path.into_inner();
    draft_handler::assemble_draft(draft_id, service).await
}

/// Submit the draft to the Tournament Service
#[post("/{draft_id}/submit")]
async fn submit_draft(
    path: web::Path<Uuid>,
    query: web::Query<VersionQuery>,
    service: web::Data<TournamentDraftService>,
    client: web::Data<TournamentServiceClient>,
) -> Result<HttpResponse> {
    let draft_id = path.into_inner();
    draft_handler::submit_draft(draft_id, query, service, client).await
}
