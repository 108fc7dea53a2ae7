use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::SportNotFound;
use crate::models::draft::ConfigField;

/// Hard failures of a draft operation. These abort the call and change nothing.
#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error(transparent)]
    SportNotFound(#[from] SportNotFound),

    #[error("Draft {0} not found")]
    DraftNotFound(Uuid),

    #[error("Sport instance {0} not found in draft")]
    InstanceNotFound(Uuid),

    #[error("Position {position} is outside 0..{len}")]
    InvalidPosition { position: usize, len: usize },

    #[error("Draft changed since version {expected} (now at {actual})")]
    StaleDraft { expected: u64, actual: u64 },

    #[error("Draft {0} is submitted or being submitted and can no longer be changed")]
    DraftLocked(Uuid),

    #[error("Draft {0} has no submission in progress")]
    SubmissionNotInProgress(Uuid),
}

/// A single configuration rule violation, returned as data.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Format '{format}' is not offered for this sport")]
    InvalidFormat { format: String, allowed: Vec<String> },

    #[error("Tournament type '{tournament_type}' is not offered for this sport")]
    InvalidTournamentType {
        tournament_type: String,
        allowed: Vec<String>,
    },

    #[error("{field} does not apply to individual sports")]
    FieldNotApplicable { field: ConfigField },

    #[error("Roster size {roster_size} is outside {min}..={max}")]
    RosterOutOfBounds { roster_size: u32, min: u32, max: u32 },

    #[error("At least 2 teams are required, got {num_teams}")]
    InsufficientTeams { num_teams: u32 },

    #[error("Catalog entry '{sport_id}' has no players-per-side value for format '{format}'")]
    CatalogIntegrity { sport_id: String, format: String },

    #[error("This sport has no qualification heats")]
    HeatsNotSupported,

    #[error("{field} is required")]
    MissingField { field: ConfigField },
}

impl ConfigError {
    /// Stable machine-readable code for the violated rule
    pub fn rule(&self) -> &'static str {
        match self {
            ConfigError::InvalidFormat { .. } => "invalid_format",
            ConfigError::InvalidTournamentType { .. } => "invalid_tournament_type",
            ConfigError::FieldNotApplicable { .. } => "field_not_applicable",
            ConfigError::RosterOutOfBounds { .. } => "roster_out_of_bounds",
            ConfigError::InsufficientTeams { .. } => "insufficient_teams",
            ConfigError::CatalogIntegrity { .. } => "catalog_integrity",
            ConfigError::HeatsNotSupported => "heats_not_supported",
            ConfigError::MissingField { .. } => "missing_field",
        }
    }

    pub fn field(&self) -> ConfigField {
        match self {
            ConfigError::InvalidFormat { .. } => ConfigField::Format,
            ConfigError::InvalidTournamentType { .. } => ConfigField::TournamentType,
            ConfigError::FieldNotApplicable { field } => *field,
            ConfigError::RosterOutOfBounds { .. } => ConfigField::RosterSize,
            ConfigError::InsufficientTeams { .. } => ConfigField::NumTeams,
            ConfigError::CatalogIntegrity { .. } => ConfigField::Format,
            ConfigError::HeatsNotSupported => ConfigField::Heats,
            ConfigError::MissingField { field } => *field,
        }
    }
}

/// Top-level metadata problems found during assembly.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum MetadataError {
    #[error("Tournament name is required")]
    MissingName,

    #[error("Tournament name must contain alphanumeric characters")]
    NameWithoutContent,

    #[error("{field} too long (maximum {max} characters)")]
    FieldTooLong { field: &'static str, max: usize },

    #[error("Start date {start} is after end date {end}")]
    DateRangeInverted {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },
}

impl MetadataError {
    pub fn rule(&self) -> &'static str {
        match self {
            MetadataError::MissingName => "missing_name",
            MetadataError::NameWithoutContent => "name_without_content",
            MetadataError::FieldTooLong { .. } => "field_too_long",
            MetadataError::DateRangeInverted { .. } => "date_range_inverted",
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            MetadataError::MissingName | MetadataError::NameWithoutContent => "name",
            MetadataError::FieldTooLong { field, .. } => *field,
            MetadataError::DateRangeInverted { .. } => "end_date",
        }
    }
}

/// One renderable problem: where it is, which field, which rule.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub rule: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn for_instance(instance_id: Uuid, error: &ConfigError) -> Self {
        Self {
            instance_id: Some(instance_id),
            field: Some(error.field().as_str().to_string()),
            rule: error.rule().to_string(),
            message: error.to_string(),
        }
    }

    pub fn for_metadata(error: &MetadataError) -> Self {
        Self {
            instance_id: None,
            field: Some(error.field().to_string()),
            rule: error.rule().to_string(),
            message: error.to_string(),
        }
    }

    pub fn for_draft(rule: &str, message: impl Into<String>) -> Self {
        Self {
            instance_id: None,
            field: None,
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Every problem that blocks assembly, collected in one pass.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationSummary {
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    pub fn has_rule(&self, rule: &str) -> bool {
        self.issues.iter().any(|i| i.rule == rule)
    }

    pub fn for_instance(&self, instance_id: Uuid) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(move |i| i.instance_id == Some(instance_id))
    }
}
