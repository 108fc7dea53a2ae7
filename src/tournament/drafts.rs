use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

use crate::catalog::SportCatalog;
use crate::models::draft::{
    ConfigurationPatch, DraftStatus, MetadataPatch, SportInstance, TournamentDraft,
    TournamentMetadata,
};
use crate::models::submission::CreatedTournament;
use crate::tournament::assembler::{AssemblyOutcome, DraftAssembler};
use crate::tournament::configurator::{ConfigurationOutcome, InstanceConfigurator};
use crate::tournament::errors::{ConfigError, DraftError};
use crate::tournament::selection::{ensure_editable, SelectionEngine};
use crate::tournament::validation::InstanceValidator;

/// Main draft service that orchestrates selection, configuration and assembly
/// for every draft held in memory.
pub struct TournamentDraftService {
    catalog: Arc<SportCatalog>,
    drafts: Mutex<HashMap<Uuid, TournamentDraft>>,
    configurator: InstanceConfigurator,
    validator: InstanceValidator,
}

impl TournamentDraftService {
    pub fn new(catalog: Arc<SportCatalog>) -> Self {
        Self {
            catalog,
            drafts: Mutex::new(HashMap::new()),
            configurator: InstanceConfigurator::new(),
            validator: InstanceValidator::new(),
        }
    }

    pub fn catalog(&self) -> &SportCatalog {
        &self.catalog
    }

    pub fn create_draft(&self, metadata: TournamentMetadata) -> TournamentDraft {
        let mut sanitized = TournamentMetadata::default();
        sanitized.apply(MetadataPatch::from(metadata));
        let draft = TournamentDraft::new(sanitized);

        tracing::info!("Created tournament draft {}", draft.id);
        self.lock().insert(draft.id, draft.clone());
        draft
    }

    pub fn get_draft(&self, draft_id: Uuid) -> Result<TournamentDraft, DraftError> {
        self.lock()
            .get(&draft_id)
            .cloned()
            .ok_or(DraftError::DraftNotFound(draft_id))
    }

    /// All drafts, most recently created first
    pub fn list_drafts(&self) -> Vec<TournamentDraft> {
        let mut drafts: Vec<TournamentDraft> = self.lock().values().cloned().collect();
        drafts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        drafts
    }

    pub fn delete_draft(&self, draft_id: Uuid, expected_version: Option<u64>) -> Result<(), DraftError> {
        let mut drafts = self.lock();
        let draft = drafts
            .get(&draft_id)
            .ok_or(DraftError::DraftNotFound(draft_id))?;
        check_version(draft, expected_version)?;
        ensure_editable(draft)?;
        drafts.remove(&draft_id);

        tracing::info!("Deleted tournament draft {}", draft_id);
        Ok(())
    }

    pub fn update_metadata(
        &self,
        draft_id: Uuid,
        patch: MetadataPatch,
        expected_version: Option<u64>,
    ) -> Result<TournamentDraft, DraftError> {
        self.with_draft(draft_id, expected_version, |draft| {
            ensure_editable(draft)?;
            draft.metadata.apply(patch);
            draft.touch();
            Ok(draft.clone())
        })
    }

    pub fn add_instance(
        &self,
        draft_id: Uuid,
        sport_id: &str,
        expected_version: Option<u64>,
    ) -> Result<SportInstance, DraftError> {
        let engine = SelectionEngine::new(&self.catalog);
        self.with_draft(draft_id, expected_version, |draft| {
            engine.add_instance(draft, sport_id)
        })
    }

    pub fn remove_instance(
        &self,
        draft_id: Uuid,
        instance_id: Uuid,
        expected_version: Option<u64>,
    ) -> Result<SportInstance, DraftError> {
        let engine = SelectionEngine::new(&self.catalog);
        self.with_draft(draft_id, expected_version, |draft| {
            engine.remove_instance(draft, instance_id)
        })
    }

    /// Reposition an instance and return the reordered list
    pub fn move_instance(
        &self,
        draft_id: Uuid,
        instance_id: Uuid,
        target_position: usize,
        expected_version: Option<u64>,
    ) -> Result<Vec<SportInstance>, DraftError> {
        let engine = SelectionEngine::new(&self.catalog);
        self.with_draft(draft_id, expected_version, |draft| {
            engine.move_instance(draft, instance_id, target_position)?;
            Ok(draft.sport_instances.clone())
        })
    }

    pub fn set_configuration(
        &self,
        draft_id: Uuid,
        instance_id: Uuid,
        patch: &ConfigurationPatch,
        expected_version: Option<u64>,
    ) -> Result<ConfigurationOutcome, DraftError> {
        self.with_draft(draft_id, expected_version, |draft| {
            self.configurator.set_configuration(draft, instance_id, patch)
        })
    }

    pub fn is_ready_for_submission(&self, draft_id: Uuid, instance_id: Uuid) -> Result<bool, DraftError> {
        let drafts = self.lock();
        let draft = drafts
            .get(&draft_id)
            .ok_or(DraftError::DraftNotFound(draft_id))?;
        self.configurator.is_ready_for_submission(draft, instance_id)
    }

    /// Outstanding problems (rule violations and missing fields) for one instance
    pub fn readiness_issues(&self, draft_id: Uuid, instance_id: Uuid) -> Result<Vec<ConfigError>, DraftError> {
        let drafts = self.lock();
        let draft = drafts
            .get(&draft_id)
            .ok_or(DraftError::DraftNotFound(draft_id))?;
        let instance = draft
            .instance(instance_id)
            .ok_or(DraftError::InstanceNotFound(instance_id))?;
        Ok(self.validator.readiness_issues(instance))
    }

    /// Build the submission payload. Read-only; safe to call repeatedly.
    pub fn assemble(&self, draft_id: Uuid) -> Result<AssemblyOutcome, DraftError> {
        let drafts = self.lock();
        let draft = drafts
            .get(&draft_id)
            .ok_or(DraftError::DraftNotFound(draft_id))?;

        let outcome = DraftAssembler::new(self.catalog.version()).assemble(draft);
        if let AssemblyOutcome::Invalid(summary) = &outcome {
            tracing::warn!(
                "Draft {} is not ready for submission: {} issue(s)",
                draft_id,
                summary.len()
            );
        }
        Ok(outcome)
    }

    /// Assemble the draft and, when it is ready, reserve it for submission.
    ///
    /// A reserved draft is `Submitting`: every mutation and any second submission fail with
    /// `DraftLocked` until `mark_submitted` or `abort_submission` releases it.
    pub fn begin_submission(
        &self,
        draft_id: Uuid,
        expected_version: Option<u64>,
    ) -> Result<AssemblyOutcome, DraftError> {
        let assembler = DraftAssembler::new(self.catalog.version());
        self.with_draft(draft_id, expected_version, |draft| {
            ensure_editable(draft)?;

            let outcome = assembler.assemble(draft);
            match &outcome {
                AssemblyOutcome::Ready(_) => {
                    draft.status = DraftStatus::Submitting;
                    tracing::info!("Draft {} reserved for submission at version {}", draft_id, draft.version);
                }
                AssemblyOutcome::Invalid(summary) => {
                    tracing::warn!(
                        "Draft {} is not ready for submission: {} issue(s)",
                        draft_id,
                        summary.len()
                    );
                }
            }
            Ok(outcome)
        })
    }

    /// Lock the draft after the Tournament Service accepted it.
    pub fn mark_submitted(
        &self,
        draft_id: Uuid,
        created: &CreatedTournament,
    ) -> Result<TournamentDraft, DraftError> {
        self.with_draft(draft_id, None, |draft| {
            ensure_submitting(draft)?;
            draft.status = DraftStatus::Submitted;
            draft.tournament_id = Some(created.id.clone());
            draft.touch();

            tracing::info!(
                "Draft {} submitted as tournament {}",
                draft_id, created.id
            );
            Ok(draft.clone())
        })
    }

    /// Release a reservation after the Tournament Service call failed. The draft is editable again.
    pub fn abort_submission(&self, draft_id: Uuid) -> Result<TournamentDraft, DraftError> {
        self.with_draft(draft_id, None, |draft| {
            ensure_submitting(draft)?;
            draft.status = DraftStatus::Draft;

            tracing::info!("Submission of draft {} aborted", draft_id);
            Ok(draft.clone())
        })
    }

    fn with_draft<T>(
        &self,
        draft_id: Uuid,
        expected_version: Option<u64>,
        mutate: impl FnOnce(&mut TournamentDraft) -> Result<T, DraftError>,
    ) -> Result<T, DraftError> {
        let mut drafts = self.lock();
        let draft = drafts
            .get_mut(&draft_id)
            .ok_or(DraftError::DraftNotFound(draft_id))?;
        check_version(draft, expected_version)?;
        mutate(draft)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, TournamentDraft>> {
        // No operation leaves a draft half-mutated, so a poisoned map is still consistent.
        self.drafts.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn ensure_submitting(draft: &TournamentDraft) -> Result<(), DraftError> {
    match draft.status {
        DraftStatus::Submitting => Ok(()),
        DraftStatus::Submitted => Err(DraftError::DraftLocked(draft.id)),
        DraftStatus::Draft => Err(DraftError::SubmissionNotInProgress(draft.id)),
    }
}

fn check_version(draft: &TournamentDraft, expected_version: Option<u64>) -> Result<(), DraftError> {
    match expected_version {
        Some(expected) if expected != draft.version => Err(DraftError::StaleDraft {
            expected,
            actual: draft.version,
        }),
        _ => Ok(()),
    }
}
