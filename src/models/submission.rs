// src/models/submission.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::draft::{AgeGroup, Gender};
use crate::models::sport::SportDefinition;

/// Fully validated configuration of one instance. Every required field is present.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SubmittedConfiguration {
    pub gender: Gender,
    pub age_group: AgeGroup,
    pub format: String,
    pub players_per_side: u32,
    pub tournament_type: String,
    pub num_teams: Option<u32>,
    pub roster_size: Option<u32>,
    pub heats: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SubmittedSport {
    pub instance_id: Uuid,
    pub order: usize,
    pub catalog_snapshot: SportDefinition,
    pub configuration: SubmittedConfiguration,
}

/// Body of the create-tournament request sent to the Tournament Service.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TournamentSubmission {
    pub draft_id: Uuid,
    pub draft_version: u64,
    pub catalog_version: String,
    pub name: String,
    pub hosted_by: Option<String>,
    pub description: Option<String>,
    pub level: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub sports: Vec<SubmittedSport>,
}

/// What the Tournament Service echoes back after persisting a submission.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CreatedTournament {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
