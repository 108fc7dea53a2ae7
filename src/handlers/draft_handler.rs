use actix_web::{web, HttpResponse, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::common::ApiResponse;
use crate::models::draft::{
    ConfigurationPatch, DraftStatus, MetadataPatch, SportInstance, TournamentDraft,
    TournamentMetadata,
};
use crate::models::submission::CreatedTournament;
use crate::services::tournament_client::TournamentServiceClient;
use crate::tournament::{
    AssemblyOutcome, ConfigurationOutcome, DraftError, InstanceValidator, TournamentDraftService,
    ValidationIssue, ValidationSummary,
};

#[derive(Deserialize)]
pub struct AddSportRequest {
    pub sport_id: String,
    #[serde(default)]
    pub expected_version: Option<u64>,
}

#[derive(Deserialize)]
pub struct MoveSportRequest {
    pub target_position: usize,
    #[serde(default)]
    pub expected_version: Option<u64>,
}

#[derive(Deserialize)]
pub struct ConfigureSportRequest {
    #[serde(default)]
    pub expected_version: Option<u64>,
    #[serde(flatten)]
    pub configuration: ConfigurationPatch,
}

#[derive(Deserialize)]
pub struct UpdateDraftRequest {
    #[serde(default)]
    pub expected_version: Option<u64>,
    #[serde(flatten)]
    pub metadata: MetadataPatch,
}

#[derive(Deserialize, Default)]
pub struct VersionQuery {
    pub expected_version: Option<u64>,
}

#[derive(Serialize)]
pub struct InstanceView {
    #[serde(flatten)]
    pub instance: SportInstance,
    pub ready: bool,
}

#[derive(Serialize)]
pub struct DraftView {
    pub id: Uuid,
    pub metadata: TournamentMetadata,
    pub status: DraftStatus,
    pub version: u64,
    pub tournament_id: Option<String>,
    pub sport_instances: Vec<InstanceView>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DraftView {
    pub fn new(draft: TournamentDraft, validator: &InstanceValidator) -> Self {
        let sport_instances = draft
            .sport_instances
            .into_iter()
            .map(|instance| instance_view(instance, validator))
            .collect();

        Self {
            id: draft.id,
            metadata: draft.metadata,
            status: draft.status,
            version: draft.version,
            tournament_id: draft.tournament_id,
            sport_instances,
            created_at: draft.created_at,
            updated_at: draft.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct ReadinessResponse {
    pub instance_id: Uuid,
    pub ready: bool,
    pub issues: Vec<ValidationIssue>,
}

#[derive(Serialize)]
pub struct SubmissionResponse {
    pub tournament: CreatedTournament,
    pub draft: DraftView,
}

fn instance_view(instance: SportInstance, validator: &InstanceValidator) -> InstanceView {
    let ready = validator.is_ready_for_submission(&instance);
    InstanceView { instance, ready }
}

/// Map hard draft failures onto HTTP status codes
pub fn draft_error_response(error: &DraftError) -> HttpResponse {
    let body = ApiResponse::<()>::error(error.to_string());
    match error {
        DraftError::SportNotFound(_)
        | DraftError::DraftNotFound(_)
        | DraftError::InstanceNotFound(_) => HttpResponse::NotFound().json(body),
        DraftError::InvalidPosition { .. } => HttpResponse::BadRequest().json(body),
        DraftError::StaleDraft { .. }
        | DraftError::DraftLocked(_)
        | DraftError::SubmissionNotInProgress(_) => HttpResponse::Conflict().json(body),
    }
}

fn validation_failed(message: &str, summary: ValidationSummary) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(ApiResponse::error_with_data(
        message,
        format!("{} validation issue(s)", summary.len()),
        summary,
    ))
}

// GET /drafts - List all drafts
pub async fn list_drafts(
    service: web::Data<TournamentDraftService>,
) -> Result<HttpResponse> {
    let validator = InstanceValidator::new();
    let drafts: Vec<DraftView> = service
        .list_drafts()
        .into_iter()
        .map(|draft| DraftView::new(draft, &validator))
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success("Drafts retrieved", drafts)))
}

// POST /drafts - Create a new, empty draft
pub async fn create_draft(
    body: web::Json<TournamentMetadata>,
    service: web::Data<TournamentDraftService>,
) -> Result<HttpResponse> {
    let draft = service.create_draft(body.into_inner());
    let view = DraftView::new(draft, &InstanceValidator::new());
    Ok(HttpResponse::Created().json(ApiResponse::success("Draft created", view)))
}

// GET /drafts/{id} - Get one draft with readiness per instance
pub async fn get_draft(
    draft_id: Uuid,
    service: web::Data<TournamentDraftService>,
) -> Result<HttpResponse> {
    match service.get_draft(draft_id) {
        Ok(draft) => {
            let view = DraftView::new(draft, &InstanceValidator::new());
            Ok(HttpResponse::Ok().json(ApiResponse::success("Draft retrieved", view)))
        }
        Err(e) => Ok(draft_error_response(&e)),
    }
}

// PATCH /drafts/{id} - Update top-level metadata
pub async fn update_draft(
    draft_id: Uuid,
    body: web::Json<UpdateDraftRequest>,
    service: web::Data<TournamentDraftService>,
) -> Result<HttpResponse> {
    let request = body.into_inner();
    match service.update_metadata(draft_id, request.metadata, request.expected_version) {
        Ok(draft) => {
            let view = DraftView::new(draft, &InstanceValidator::new());
            Ok(HttpResponse::Ok().json(ApiResponse::success("Draft updated", view)))
        }
        Err(e) => {
            tracing::warn!("Failed to update draft {}: {}", draft_id, e);
            Ok(draft_error_response(&e))
        }
    }
}

// DELETE /drafts/{id} - Discard a draft that has not been submitted
pub async fn delete_draft(
    draft_id: Uuid,
    query: web::Query<VersionQuery>,
    service: web::Data<TournamentDraftService>,
) -> Result<HttpResponse> {
    match service.delete_draft(draft_id, query.expected_version) {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Draft deleted"))),
        Err(e) => Ok(draft_error_response(&e)),
    }
}

// POST /drafts/{id}/sports - Select a sport into the draft
pub async fn add_sport(
    draft_id: Uuid,
    body: web::Json<AddSportRequest>,
    service: web::Data<TournamentDraftService>,
) -> Result<HttpResponse> {
    match service.add_instance(draft_id, &body.sport_id, body.expected_version) {
        Ok(instance) => {
            tracing::info!(
                "Sport {} added to draft {} as instance {}",
                body.sport_id, draft_id, instance.instance_id
            );
            let view = instance_view(instance, &InstanceValidator::new());
            Ok(HttpResponse::Created().json(ApiResponse::success("Sport added", view)))
        }
        Err(e) => {
            tracing::warn!("Failed to add sport {} to draft {}: {}", body.sport_id, draft_id, e);
            Ok(draft_error_response(&e))
        }
    }
}

// DELETE /drafts/{id}/sports/{instance_id} - Remove a selected sport
pub async fn remove_sport(
    draft_id: Uuid,
    instance_id: Uuid,
    query: web::Query<VersionQuery>,
    service: web::Data<TournamentDraftService>,
) -> Result<HttpResponse> {
    match service.remove_instance(draft_id, instance_id, query.expected_version) {
        Ok(_) => get_draft(draft_id, service).await,
        Err(e) => Ok(draft_error_response(&e)),
    }
}

// POST /drafts/{id}/sports/{instance_id}/move - Reposition a selected sport
pub async fn move_sport(
    draft_id: Uuid,
    instance_id: Uuid,
    body: web::Json<MoveSportRequest>,
    service: web::Data<TournamentDraftService>,
) -> Result<HttpResponse> {
    match service.move_instance(draft_id, instance_id, body.target_position, body.expected_version) {
        Ok(instances) => {
            let validator = InstanceValidator::new();
            let views: Vec<InstanceView> = instances
                .into_iter()
                .map(|instance| instance_view(instance, &validator))
                .collect();
            Ok(HttpResponse::Ok().json(ApiResponse::success("Sport moved", views)))
        }
        Err(e) => Ok(draft_error_response(&e)),
    }
}

// PATCH /drafts/{id}/sports/{instance_id} - Apply a partial configuration
pub async fn configure_sport(
    draft_id: Uuid,
    instance_id: Uuid,
    body: web::Json<ConfigureSportRequest>,
    service: web::Data<TournamentDraftService>,
) -> Result<HttpResponse> {
    let request = body.into_inner();
    match service.set_configuration(draft_id, instance_id, &request.configuration, request.expected_version) {
        Ok(ConfigurationOutcome::Applied(instance)) => {
            let view = instance_view(instance, &InstanceValidator::new());
            Ok(HttpResponse::Ok().json(ApiResponse::success("Configuration applied", view)))
        }
        Ok(ConfigurationOutcome::Rejected(errors)) => {
            let summary = ValidationSummary {
                issues: errors
                    .iter()
                    .map(|error| ValidationIssue::for_instance(instance_id, error))
                    .collect(),
            };
            Ok(validation_failed("Configuration rejected", summary))
        }
        Err(e) => Ok(draft_error_response(&e)),
    }
}

// GET /drafts/{id}/sports/{instance_id}/ready - Readiness of one selected sport
pub async fn sport_readiness(
    draft_id: Uuid,
    instance_id: Uuid,
    service: web::Data<TournamentDraftService>,
) -> Result<HttpResponse> {
    match service.readiness_issues(draft_id, instance_id) {
        Ok(errors) => {
            let response = ReadinessResponse {
                instance_id,
                ready: errors.is_empty(),
                issues: errors
                    .iter()
                    .map(|error| ValidationIssue::for_instance(instance_id, error))
                    .collect(),
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success("Readiness checked", response)))
        }
        Err(e) => Ok(draft_error_response(&e)),
    }
}

// POST /drafts/{id}/assemble - Preview the submission payload without submitting
pub async fn assemble_draft(
    draft_id: Uuid,
    service: web::Data<TournamentDraftService>,
) -> Result<HttpResponse> {
    match service.assemble(draft_id) {
        Ok(AssemblyOutcome::Ready(submission)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success("Draft is ready", submission)))
        }
        Ok(AssemblyOutcome::Invalid(summary)) => Ok(validation_failed("Draft is not ready", summary)),
        Err(e) => Ok(draft_error_response(&e)),
    }
}

/// Releases a submission reservation unless the draft was marked submitted.
/// Covers both a failed Tournament Service call and a request dropped mid-flight.
struct PendingSubmission {
    service: web::Data<TournamentDraftService>,
    draft_id: Uuid,
    completed: bool,
}

impl Drop for PendingSubmission {
    fn drop(&mut self) {
        if self.completed {
            return;
        }
        if let Err(e) = self.service.abort_submission(self.draft_id) {
            tracing::error!("Failed to release submission of draft {}: {}", self.draft_id, e);
        }
    }
}

// POST /drafts/{id}/submit - Assemble and hand the draft to the Tournament Service
pub async fn submit_draft(
    draft_id: Uuid,
    query: web::Query<VersionQuery>,
    service: web::Data<TournamentDraftService>,
    client: web::Data<TournamentServiceClient>,
) -> Result<HttpResponse> {
    let submission = match service.begin_submission(draft_id, query.expected_version) {
        Ok(AssemblyOutcome::Ready(submission)) => submission,
        Ok(AssemblyOutcome::Invalid(summary)) => {
            return Ok(validation_failed("Draft is not ready", summary));
        }
        Err(e) => {
            tracing::warn!("Draft {} cannot be submitted: {}", draft_id, e);
            return Ok(draft_error_response(&e));
        }
    };
    let mut pending = PendingSubmission {
        service: service.clone(),
        draft_id,
        completed: false,
    };

    let created = match client.create_tournament(&submission).await {
        Ok(created) => created,
        Err(e) => {
            tracing::error!("Submission of draft {} failed: {}", draft_id, e);
            return Ok(HttpResponse::BadGateway().json(ApiResponse::<()>::error(e.to_string())));
        }
    };

    let result = service.mark_submitted(draft_id, &created);
    pending.completed = true;
    match result {
        Ok(draft) => {
            let response = SubmissionResponse {
                tournament: created,
                draft: DraftView::new(draft, &InstanceValidator::new()),
            };
            Ok(HttpResponse::Created().json(ApiResponse::success("Tournament created", response)))
        }
        Err(e) => {
            tracing::error!(
                "Tournament {} was created but draft {} could not be locked: {}",
                created.id, draft_id, e
            );
            Ok(draft_error_response(&e))
        }
    }
}
