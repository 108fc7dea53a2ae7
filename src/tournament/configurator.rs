use uuid::Uuid;

use crate::models::draft::{ConfigurationPatch, SportInstance, TournamentDraft};
use crate::tournament::errors::{ConfigError, DraftError};
use crate::tournament::selection::ensure_editable;
use crate::tournament::validation::InstanceValidator;

/// Result of applying a configuration patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationOutcome {
    /// The merged configuration passed every rule and is now stored on the instance.
    Applied(SportInstance),
    /// The merged configuration broke at least one rule. The instance is unchanged.
    Rejected(Vec<ConfigError>),
}

impl ConfigurationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ConfigurationOutcome::Applied(_))
    }

    pub fn errors(&self) -> &[ConfigError] {
        match self {
            ConfigurationOutcome::Applied(_) => &[],
            ConfigurationOutcome::Rejected(errors) => errors,
        }
    }
}

pub struct InstanceConfigurator {
    validator: InstanceValidator,
}

impl InstanceConfigurator {
    pub fn new() -> Self {
        Self {
            validator: InstanceValidator::new(),
        }
    }

    /// Merge `patch` into the instance configuration and validate the whole result.
    pub fn set_configuration(
        &self,
        draft: &mut TournamentDraft,
        instance_id: Uuid,
        patch: &ConfigurationPatch,
    ) -> Result<ConfigurationOutcome, DraftError> {
        ensure_editable(draft)?;
        let draft_id = draft.id;
        let instance = draft
            .sport_instances
            .iter_mut()
            .find(|i| i.instance_id == instance_id)
            .ok_or(DraftError::InstanceNotFound(instance_id))?;

        let candidate = instance.configuration.merged(patch);
        let errors = self.validator.validate(&instance.catalog_snapshot, &candidate);
        if !errors.is_empty() {
            tracing::warn!(
                "Rejected configuration for instance {} of draft {}: {} violation(s)",
                instance_id, draft_id, errors.len()
            );
            return Ok(ConfigurationOutcome::Rejected(errors));
        }

        instance.configuration = candidate;
        let updated = instance.clone();
        draft.touch();

        tracing::debug!("Configured instance {} of draft {}", instance_id, draft_id);
        Ok(ConfigurationOutcome::Applied(updated))
    }

    pub fn is_ready_for_submission(
        &self,
        draft: &TournamentDraft,
        instance_id: Uuid,
    ) -> Result<bool, DraftError> {
        let instance = draft
            .instance(instance_id)
            .ok_or(DraftError::InstanceNotFound(instance_id))?;
        Ok(self.validator.is_ready_for_submission(instance))
    }
}

impl Default for InstanceConfigurator {
    fn default() -> Self {
        Self::new()
    }
}
