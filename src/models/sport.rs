// src/models/sport.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SportKind {
    Team,
    Individual,
}

impl SportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SportKind::Team => "team",
            SportKind::Individual => "individual",
        }
    }
}

impl fmt::Display for SportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalog entry. Immutable once the catalog is built.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SportDefinition {
    pub id: String,
    pub name: String,
    pub kind: SportKind,
    pub formats: Vec<String>,
    pub players_per_side: BTreeMap<String, u32>,
    #[serde(default)]
    pub roster_min: Option<u32>,
    #[serde(default)]
    pub roster_max: Option<u32>,
    #[serde(default)]
    pub has_heats: bool,
    pub tournament_types: Vec<String>,
}

impl SportDefinition {
    pub fn allows_format(&self, format: &str) -> bool {
        self.formats.iter().any(|f| f == format)
    }

    pub fn allows_tournament_type(&self, tournament_type: &str) -> bool {
        self.tournament_types.iter().any(|t| t == tournament_type)
    }

    /// Roster bounds, only when both ends are defined.
    pub fn roster_bounds(&self) -> Option<(u32, u32)> {
        match (self.roster_min, self.roster_max) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }

    pub fn players_for_format(&self, format: &str) -> Option<u32> {
        self.players_per_side.get(format).copied()
    }
}
