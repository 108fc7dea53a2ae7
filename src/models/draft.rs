// src/models/draft.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::models::common::{apply_patch, patch_field, sanitize_string_input};
use crate::models::sport::{SportDefinition, SportKind};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Boys,
    Girls,
    Mixed,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum AgeGroup {
    #[serde(rename = "U-10")]
    Under10,
    #[serde(rename = "U-12")]
    Under12,
    #[serde(rename = "U-14")]
    Under14,
    #[serde(rename = "U-17")]
    Under17,
    #[serde(rename = "U-19")]
    Under19,
    #[serde(rename = "Open")]
    Open,
}

/// Names the configuration fields so errors can point at them.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConfigField {
    Gender,
    AgeGroup,
    Format,
    TournamentType,
    NumTeams,
    RosterSize,
    Heats,
}

impl ConfigField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigField::Gender => "gender",
            ConfigField::AgeGroup => "age_group",
            ConfigField::Format => "format",
            ConfigField::TournamentType => "tournament_type",
            ConfigField::NumTeams => "num_teams",
            ConfigField::RosterSize => "roster_size",
            ConfigField::Heats => "heats",
        }
    }

    /// Fields that must be set before an instance of the given kind can be submitted
    pub fn required_for(kind: SportKind) -> &'static [ConfigField] {
        match kind {
            SportKind::Individual => &[
                ConfigField::Format,
                ConfigField::TournamentType,
                ConfigField::Gender,
                ConfigField::AgeGroup,
            ],
            SportKind::Team => &[
                ConfigField::Format,
                ConfigField::TournamentType,
                ConfigField::Gender,
                ConfigField::AgeGroup,
                ConfigField::NumTeams,
                ConfigField::RosterSize,
            ],
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct InstanceConfiguration {
    pub gender: Option<Gender>,
    pub age_group: Option<AgeGroup>,
    pub format: Option<String>,
    pub tournament_type: Option<String>,
    pub num_teams: Option<u32>,
    pub roster_size: Option<u32>,
    pub heats: Option<bool>,
}

impl InstanceConfiguration {
    pub fn is_set(&self, field: ConfigField) -> bool {
        match field {
            ConfigField::Gender => self.gender.is_some(),
            ConfigField::AgeGroup => self.age_group.is_some(),
            ConfigField::Format => self.format.is_some(),
            ConfigField::TournamentType => self.tournament_type.is_some(),
            ConfigField::NumTeams => self.num_teams.is_some(),
            ConfigField::RosterSize => self.roster_size.is_some(),
            ConfigField::Heats => self.heats.is_some(),
        }
    }

    /// Returns a copy with the patch merged in. Fields the patch leaves out keep their value.
    pub fn merged(&self, patch: &ConfigurationPatch) -> Self {
        let mut merged = self.clone();
        apply_patch(&mut merged.gender, patch.gender);
        apply_patch(&mut merged.age_group, patch.age_group);
        apply_patch(&mut merged.format, patch.format.clone());
        apply_patch(&mut merged.tournament_type, patch.tournament_type.clone());
        apply_patch(&mut merged.num_teams, patch.num_teams);
        apply_patch(&mut merged.roster_size, patch.roster_size);
        apply_patch(&mut merged.heats, patch.heats);
        merged
    }
}

/// Partial configuration update. Absent = unchanged, `null` = clear.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigurationPatch {
    #[serde(default, deserialize_with = "patch_field")]
    pub gender: Option<Option<Gender>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub age_group: Option<Option<AgeGroup>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub format: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub tournament_type: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub num_teams: Option<Option<u32>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub roster_size: Option<Option<u32>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub heats: Option<Option<bool>>,
}

impl ConfigurationPatch {
    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(Some(gender));
        self
    }

    pub fn age_group(mut self, age_group: AgeGroup) -> Self {
        self.age_group = Some(Some(age_group));
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(Some(format.into()));
        self
    }

    pub fn tournament_type(mut self, tournament_type: impl Into<String>) -> Self {
        self.tournament_type = Some(Some(tournament_type.into()));
        self
    }

    pub fn num_teams(mut self, num_teams: u32) -> Self {
        self.num_teams = Some(Some(num_teams));
        self
    }

    pub fn roster_size(mut self, roster_size: u32) -> Self {
        self.roster_size = Some(Some(roster_size));
        self
    }

    pub fn heats(mut self, heats: bool) -> Self {
        self.heats = Some(Some(heats));
        self
    }
}

/// One selected occurrence of a catalog sport inside a draft.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SportInstance {
    pub instance_id: Uuid,
    pub catalog_snapshot: SportDefinition,
    pub order: usize,
    pub configuration: InstanceConfiguration,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DraftStatus {
    Draft,
    /// Reserved while the Tournament Service call is in flight
    Submitting,
    Submitted,
}

impl DraftStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftStatus::Draft => "draft",
            DraftStatus::Submitting => "submitting",
            DraftStatus::Submitted => "submitted",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct TournamentMetadata {
    pub name: Option<String>,
    pub hosted_by: Option<String>,
    pub description: Option<String>,
    pub level: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl TournamentMetadata {
    /// Merge a patch, sanitizing all text fields; blank text counts as cleared.
    pub fn apply(&mut self, patch: MetadataPatch) {
        apply_patch(&mut self.name, patch.name.map(clean_text));
        apply_patch(&mut self.hosted_by, patch.hosted_by.map(clean_text));
        apply_patch(&mut self.description, patch.description.map(clean_text));
        apply_patch(&mut self.level, patch.level.map(clean_text));
        apply_patch(&mut self.start_date, patch.start_date);
        apply_patch(&mut self.end_date, patch.end_date);
    }
}

fn clean_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| sanitize_string_input(&v))
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MetadataPatch {
    #[serde(default, deserialize_with = "patch_field")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub hosted_by: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub level: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub start_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "patch_field")]
    pub end_date: Option<Option<NaiveDate>>,
}

impl From<TournamentMetadata> for MetadataPatch {
    fn from(metadata: TournamentMetadata) -> Self {
        Self {
            name: Some(metadata.name),
            hosted_by: Some(metadata.hosted_by),
            description: Some(metadata.description),
            level: Some(metadata.level),
            start_date: Some(metadata.start_date),
            end_date: Some(metadata.end_date),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TournamentDraft {
    pub id: Uuid,
    pub metadata: TournamentMetadata,
    pub sport_instances: Vec<SportInstance>,
    pub status: DraftStatus,
    pub version: u64,
    /// Identifier issued by the Tournament Service once the draft is persisted there
    pub tournament_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TournamentDraft {
    pub fn new(metadata: TournamentMetadata) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            metadata,
            sport_instances: Vec::new(),
            status: DraftStatus::Draft,
            version: 0,
            tournament_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_editable(&self) -> bool {
        self.status == DraftStatus::Draft
    }

    pub fn instance(&self, instance_id: Uuid) -> Option<&SportInstance> {
        self.sport_instances.iter().find(|i| i.instance_id == instance_id)
    }

    pub fn position_of(&self, instance_id: Uuid) -> Option<usize> {
        self.sport_instances.iter().position(|i| i.instance_id == instance_id)
    }

    /// Record a successful mutation.
    pub fn touch(&mut self) {
        self.version += 1;
        self.updated_at = Utc::now();
    }
}
