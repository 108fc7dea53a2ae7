use crate::models::draft::{DraftStatus, SportInstance, TournamentDraft};
use crate::models::submission::{SubmittedConfiguration, SubmittedSport, TournamentSubmission};
use crate::tournament::errors::{ValidationIssue, ValidationSummary};
use crate::tournament::validation::InstanceValidator;

/// Result of assembling a draft. Assembly never mutates the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssemblyOutcome {
    Ready(TournamentSubmission),
    Invalid(ValidationSummary),
}

impl AssemblyOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, AssemblyOutcome::Ready(_))
    }
}

/// Turns a fully configured draft into a submission payload.
pub struct DraftAssembler<'a> {
    catalog_version: &'a str,
    validator: InstanceValidator,
}

impl<'a> DraftAssembler<'a> {
    pub fn new(catalog_version: &'a str) -> Self {
        Self {
            catalog_version,
            validator: InstanceValidator::new(),
        }
    }

    pub fn assemble(&self, draft: &TournamentDraft) -> AssemblyOutcome {
        let summary = self.collect_issues(draft);
        if !summary.is_empty() {
            return AssemblyOutcome::Invalid(summary);
        }

        let mut sports = Vec::with_capacity(draft.sport_instances.len());
        for instance in &draft.sport_instances {
            match submitted_sport(instance) {
                Some(sport) => sports.push(sport),
                // Readiness guarantees every field; reaching this means the checks drifted.
                None => {
                    return AssemblyOutcome::Invalid(ValidationSummary {
                        issues: vec![ValidationIssue::for_draft(
                            "incomplete_instance",
                            format!("Instance {} is incomplete", instance.instance_id),
                        )],
                    })
                }
            }
        }

        let metadata = &draft.metadata;
        AssemblyOutcome::Ready(TournamentSubmission {
            draft_id: draft.id,
            draft_version: draft.version,
            catalog_version: self.catalog_version.to_string(),
            name: metadata.name.clone().unwrap_or_default(),
            hosted_by: metadata.hosted_by.clone(),
            description: metadata.description.clone(),
            level: metadata.level.clone(),
            start_date: metadata.start_date,
            end_date: metadata.end_date,
            sports,
        })
    }

    fn collect_issues(&self, draft: &TournamentDraft) -> ValidationSummary {
        let mut summary = ValidationSummary::default();

        if draft.status != DraftStatus::Draft {
            summary.push(ValidationIssue::for_draft(
                "draft_not_editable",
                format!("Draft is already {}", draft.status.as_str()),
            ));
        }

        for error in self.validator.validate_metadata(&draft.metadata) {
            summary.push(ValidationIssue::for_metadata(&error));
        }

        if draft.sport_instances.is_empty() {
            summary.push(ValidationIssue::for_draft(
                "no_sports",
                "At least one sport must be selected",
            ));
        }

        for instance in &draft.sport_instances {
            for error in self.validator.readiness_issues(instance) {
                summary.push(ValidationIssue::for_instance(instance.instance_id, &error));
            }
        }

        summary
    }
}

fn submitted_sport(instance: &SportInstance) -> Option<SubmittedSport> {
    let configuration = &instance.configuration;
    let format = configuration.format.clone()?;
    let players_per_side = instance.catalog_snapshot.players_for_format(&format)?;

    Some(SubmittedSport {
        instance_id: instance.instance_id,
        order: instance.order,
        catalog_snapshot: instance.catalog_snapshot.clone(),
        configuration: SubmittedConfiguration {
            gender: configuration.gender?,
            age_group: configuration.age_group?,
            format,
            players_per_side,
            tournament_type: configuration.tournament_type.clone()?,
            num_teams: configuration.num_teams,
            roster_size: configuration.roster_size,
            heats: configuration.heats.unwrap_or(false),
        },
    })
}
