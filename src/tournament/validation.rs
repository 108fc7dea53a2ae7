use crate::models::draft::{ConfigField, InstanceConfiguration, SportInstance, TournamentMetadata};
use crate::models::sport::{SportDefinition, SportKind};
use crate::tournament::errors::{ConfigError, MetadataError};

const MAX_NAME_LEN: usize = 255;
const MAX_HOSTED_BY_LEN: usize = 255;
const MAX_LEVEL_LEN: usize = 255;
const MAX_DESCRIPTION_LEN: usize = 2000;
const MIN_TEAMS: u32 = 2;

/// Checks instance configurations against their catalog snapshot, and draft metadata.
pub struct InstanceValidator;

impl InstanceValidator {
    pub fn new() -> Self {
        Self
    }

    /// Run every configuration rule and collect all violations, in rule order.
    pub fn validate(
        &self,
        snapshot: &SportDefinition,
        configuration: &InstanceConfiguration,
    ) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(format) = &configuration.format {
            if !snapshot.allows_format(format) {
                errors.push(ConfigError::InvalidFormat {
                    format: format.clone(),
                    allowed: snapshot.formats.clone(),
                });
            }
        }

        if let Some(tournament_type) = &configuration.tournament_type {
            if !snapshot.allows_tournament_type(tournament_type) {
                errors.push(ConfigError::InvalidTournamentType {
                    tournament_type: tournament_type.clone(),
                    allowed: snapshot.tournament_types.clone(),
                });
            }
        }

        match snapshot.kind {
            SportKind::Individual => {
                if configuration.num_teams.is_some() {
                    errors.push(ConfigError::FieldNotApplicable {
                        field: ConfigField::NumTeams,
                    });
                }
                if configuration.roster_size.is_some() {
                    errors.push(ConfigError::FieldNotApplicable {
                        field: ConfigField::RosterSize,
                    });
                }
            }
            SportKind::Team => {
                if let (Some(roster_size), Some((min, max))) =
                    (configuration.roster_size, snapshot.roster_bounds())
                {
                    if roster_size < min || roster_size > max {
                        errors.push(ConfigError::RosterOutOfBounds { roster_size, min, max });
                    }
                }
                if let Some(num_teams) = configuration.num_teams {
                    if num_teams < MIN_TEAMS {
                        errors.push(ConfigError::InsufficientTeams { num_teams });
                    }
                }
            }
        }

        // Only meaningful for a format the sport actually offers.
        if let Some(format) = &configuration.format {
            if snapshot.allows_format(format) && snapshot.players_for_format(format).is_none() {
                errors.push(ConfigError::CatalogIntegrity {
                    sport_id: snapshot.id.clone(),
                    format: format.clone(),
                });
            }
        }

        if configuration.heats == Some(true) && !snapshot.has_heats {
            errors.push(ConfigError::HeatsNotSupported);
        }

        errors
    }

    /// Required fields for the sport kind that are still unset
    pub fn missing_fields(
        &self,
        snapshot: &SportDefinition,
        configuration: &InstanceConfiguration,
    ) -> Vec<ConfigError> {
        ConfigField::required_for(snapshot.kind)
            .iter()
            .filter(|field| !configuration.is_set(**field))
            .map(|field| ConfigError::MissingField { field: *field })
            .collect()
    }

    /// Everything standing between an instance and submission: rule violations first,
    /// then missing required fields.
    pub fn readiness_issues(&self, instance: &SportInstance) -> Vec<ConfigError> {
        let mut issues = self.validate(&instance.catalog_snapshot, &instance.configuration);
        issues.extend(self.missing_fields(&instance.catalog_snapshot, &instance.configuration));
        issues
    }

    pub fn is_ready_for_submission(&self, instance: &SportInstance) -> bool {
        self.readiness_issues(instance).is_empty()
    }

    /// Validate top-level tournament metadata
    pub fn validate_metadata(&self, metadata: &TournamentMetadata) -> Vec<MetadataError> {
        let mut errors = Vec::new();

        match metadata.name.as_deref().map(str::trim) {
            None | Some("") => errors.push(MetadataError::MissingName),
            Some(name) => {
                if name.chars().count() > MAX_NAME_LEN {
                    errors.push(MetadataError::FieldTooLong {
                        field: "name",
                        max: MAX_NAME_LEN,
                    });
                }
                if !name.chars().any(|c| c.is_alphanumeric()) {
                    errors.push(MetadataError::NameWithoutContent);
                }
            }
        }

        check_length(&mut errors, "hosted_by", metadata.hosted_by.as_deref(), MAX_HOSTED_BY_LEN);
        check_length(&mut errors, "level", metadata.level.as_deref(), MAX_LEVEL_LEN);
        check_length(
            &mut errors,
            "description",
            metadata.description.as_deref(),
            MAX_DESCRIPTION_LEN,
        );

        if let (Some(start), Some(end)) = (metadata.start_date, metadata.end_date) {
            if start > end {
                errors.push(MetadataError::DateRangeInverted { start, end });
            }
        }

        errors
    }
}

impl Default for InstanceValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn check_length(errors: &mut Vec<MetadataError>, field: &'static str, value: Option<&str>, max: usize) {
    if let Some(value) = value {
        if value.chars().count() > max {
            errors.push(MetadataError::FieldTooLong { field, max });
        }
    }
}
