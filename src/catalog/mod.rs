use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::models::sport::{SportDefinition, SportKind};

pub mod definitions;

pub use definitions::{builtin_definitions, BUILTIN_CATALOG_VERSION};

/// Errors building the catalog. Any of these means the definition data is broken.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate sport id in catalog: {0}")]
    DuplicateId(String),

    #[error("Sport '{0}' has an empty id or name")]
    MissingIdentity(String),

    #[error("Sport '{0}' defines no formats")]
    NoFormats(String),

    #[error("Sport '{sport_id}' lists format '{format}' more than once")]
    DuplicateFormat { sport_id: String, format: String },

    #[error("Sport '{sport_id}' has no players-per-side entry for format '{format}'")]
    MissingPlayersPerSide { sport_id: String, format: String },

    #[error("Individual sport '{0}' must not define roster bounds")]
    RosterOnIndividual(String),

    #[error("Sport '{sport_id}' has roster_min {min} greater than roster_max {max}")]
    InvertedRoster { sport_id: String, min: u32, max: u32 },

    #[error("Sport '{0}' defines no tournament types")]
    NoTournamentTypes(String),

    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
#[error("Sport '{0}' not found in catalog")]
pub struct SportNotFound(pub String);

#[derive(Debug, Deserialize)]
struct CatalogFile {
    version: String,
    sports: Vec<SportDefinition>,
}

/// Read-only registry of sport definitions.
///
/// Built once and shared (usually behind an `Arc`) by every draft. Nothing mutates it after
/// construction, so several catalog versions can live side by side.
#[derive(Debug, Clone)]
pub struct SportCatalog {
    version: String,
    sports: Vec<SportDefinition>,
    index: HashMap<String, usize>,
}

impl SportCatalog {
    /// Build a catalog, rejecting any definition that breaks the catalog rules.
    pub fn new(version: impl Into<String>, sports: Vec<SportDefinition>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(sports.len());
        for (position, sport) in sports.iter().enumerate() {
            check_definition(sport)?;
            if index.insert(sport.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(sport.id.clone()));
            }
        }

        Ok(Self {
            version: version.into(),
            sports,
            index,
        })
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(BUILTIN_CATALOG_VERSION, builtin_definitions())
    }

    /// Load a catalog from a JSON file of the form `{"version": "...", "sports": [...]}`
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Self::new(file.version, file.sports)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// All definitions in display order
    pub fn list_all(&self) -> &[SportDefinition] {
        &self.sports
    }

    pub fn find_by_id(&self, id: &str) -> Result<&SportDefinition, SportNotFound> {
        self.index
            .get(id)
            .map(|&position| &self.sports[position])
            .ok_or_else(|| SportNotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.sports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sports.is_empty()
    }
}

fn check_definition(sport: &SportDefinition) -> Result<(), CatalogError> {
    if sport.id.trim().is_empty() || sport.name.trim().is_empty() {
        return Err(CatalogError::MissingIdentity(sport.id.clone()));
    }

    if sport.formats.is_empty() {
        return Err(CatalogError::NoFormats(sport.id.clone()));
    }

    let mut seen = HashSet::new();
    for format in &sport.formats {
        if !seen.insert(format.as_str()) {
            return Err(CatalogError::DuplicateFormat {
                sport_id: sport.id.clone(),
                format: format.clone(),
            });
        }
        if !sport.players_per_side.contains_key(format) {
            return Err(CatalogError::MissingPlayersPerSide {
                sport_id: sport.id.clone(),
                format: format.clone(),
            });
        }
    }

    match sport.kind {
        SportKind::Individual => {
            if sport.roster_min.is_some() || sport.roster_max.is_some() {
                return Err(CatalogError::RosterOnIndividual(sport.id.clone()));
            }
        }
        SportKind::Team => {
            if let Some((min, max)) = sport.roster_bounds() {
                if min > max {
                    return Err(CatalogError::InvertedRoster {
                        sport_id: sport.id.clone(),
                        min,
                        max,
                    });
                }
            }
        }
    }

    if sport.tournament_types.is_empty() {
        return Err(CatalogError::NoTournamentTypes(sport.id.clone()));
    }

    Ok(())
}
