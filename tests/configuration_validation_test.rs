use tourney_backend::models::draft::{
    AgeGroup, ConfigField, ConfigurationPatch, Gender, InstanceConfiguration, TournamentDraft,
    TournamentMetadata,
};
use tourney_backend::models::sport::SportDefinition;
use tourney_backend::tournament::{
    ConfigError, ConfigurationOutcome, InstanceConfigurator, InstanceValidator, SelectionEngine,
};

mod common;
use common::catalog_helpers::{
    complete_football_config, complete_tennis_config, football, test_catalog,
};

fn draft_with(sport_id: &str) -> (TournamentDraft, uuid::Uuid) {
    let catalog = test_catalog();
    let mut draft = TournamentDraft::new(TournamentMetadata::default());
    let instance = SelectionEngine::new(&catalog)
        .add_instance(&mut draft, sport_id)
        .unwrap();
    (draft, instance.instance_id)
}

#[test]
fn test_roster_above_maximum_is_rejected() {
    let (mut draft, instance_id) = draft_with("football");
    let configurator = InstanceConfigurator::new();

    let patch = ConfigurationPatch::default().format("11-a-side").roster_size(25);
    let outcome = configurator.set_configuration(&mut draft, instance_id, &patch).unwrap();

    assert_eq!(
        outcome.errors(),
        &[ConfigError::RosterOutOfBounds { roster_size: 25, min: 7, max: 23 }]
    );
}

#[test]
fn test_rejected_configuration_leaves_instance_unchanged() {
    let (mut draft, instance_id) = draft_with("football");
    let configurator = InstanceConfigurator::new();

    let good = ConfigurationPatch::default().format("5-a-side");
    assert!(configurator.set_configuration(&mut draft, instance_id, &good).unwrap().is_applied());
    let version = draft.version;

    let bad = ConfigurationPatch::default().format("Rugby Sevens");
    let outcome = configurator.set_configuration(&mut draft, instance_id, &bad).unwrap();

    assert!(!outcome.is_applied());
    let instance = draft.instance(instance_id).unwrap();
    assert_eq!(instance.configuration.format.as_deref(), Some("5-a-side"));
    assert_eq!(draft.version, version);
}

#[test]
fn test_partial_update_keeps_other_fields() {
    let (mut draft, instance_id) = draft_with("football");
    let configurator = InstanceConfigurator::new();

    configurator
        .set_configuration(&mut draft, instance_id, &complete_football_config())
        .unwrap();
    let outcome = configurator
        .set_configuration(&mut draft, instance_id, &ConfigurationPatch::default().num_teams(12))
        .unwrap();

    match outcome {
        ConfigurationOutcome::Applied(instance) => {
            assert_eq!(instance.configuration.num_teams, Some(12));
            assert_eq!(instance.configuration.roster_size, Some(18));
            assert_eq!(instance.configuration.format.as_deref(), Some("11-a-side"));
        }
        ConfigurationOutcome::Rejected(errors) => panic!("Unexpected rejection: {:?}", errors),
    }
}

#[test]
fn test_partial_update_revalidates_existing_fields() {
    let snapshot = football();
    let validator = InstanceValidator::new();

    let stored = InstanceConfiguration {
        format: Some("Beach".to_string()),
        roster_size: Some(18),
        ..Default::default()
    };
    let merged = stored.merged(&ConfigurationPatch::default().roster_size(3));

    let rules: Vec<&str> = validator
        .validate(&snapshot, &merged)
        .iter()
        .map(|e| e.rule())
        .collect();
    assert_eq!(rules, vec!["invalid_format", "roster_out_of_bounds"]);
}

#[test]
fn test_null_clears_a_field() {
    let (mut draft, instance_id) = draft_with("tennis");
    let configurator = InstanceConfigurator::new();
    configurator
        .set_configuration(&mut draft, instance_id, &complete_tennis_config())
        .unwrap();

    let patch: ConfigurationPatch = serde_json::from_str(r#"{ "format": null }"#).unwrap();
    configurator.set_configuration(&mut draft, instance_id, &patch).unwrap();

    let instance = draft.instance(instance_id).unwrap();
    assert_eq!(instance.configuration.format, None);
    assert_eq!(instance.configuration.gender, Some(Gender::Girls));
}

#[test]
fn test_patch_deserialization_distinguishes_absent_and_null() {
    let patch: ConfigurationPatch =
        serde_json::from_str(r#"{ "roster_size": 12, "num_teams": null }"#).unwrap();

    assert_eq!(patch.roster_size, Some(Some(12)));
    assert_eq!(patch.num_teams, Some(None));
    assert_eq!(patch.format, None);
}

#[test]
fn test_all_violations_are_reported_in_rule_order() {
    let (mut draft, instance_id) = draft_with("football");
    let configurator = InstanceConfigurator::new();

    let patch = ConfigurationPatch::default()
        .format("Beach")
        .tournament_type("Swiss")
        .roster_size(2)
        .num_teams(1);
    let outcome = configurator.set_configuration(&mut draft, instance_id, &patch).unwrap();

    let rules: Vec<&str> = outcome.errors().iter().map(|e| e.rule()).collect();
    assert_eq!(
        rules,
        vec![
            "invalid_format",
            "invalid_tournament_type",
            "roster_out_of_bounds",
            "insufficient_teams",
        ]
    );
}

#[test]
fn test_team_fields_not_applicable_to_individual_sports() {
    for (num_teams, roster_size) in [(Some(2), None), (None, Some(1)), (Some(8), Some(10))] {
        let (mut draft, instance_id) = draft_with("tennis");
        let mut patch = ConfigurationPatch::default();
        patch.num_teams = num_teams.map(Some);
        patch.roster_size = roster_size.map(Some);

        let outcome = InstanceConfigurator::new()
            .set_configuration(&mut draft, instance_id, &patch)
            .unwrap();

        let mut expected = Vec::new();
        if num_teams.is_some() {
            expected.push(ConfigError::FieldNotApplicable { field: ConfigField::NumTeams });
        }
        if roster_size.is_some() {
            expected.push(ConfigError::FieldNotApplicable { field: ConfigField::RosterSize });
        }
        assert_eq!(outcome.errors(), expected.as_slice());
    }
}

#[test]
fn test_roster_bounds_are_inclusive() {
    let validator = InstanceValidator::new();
    let snapshot = football();

    for (roster_size, ok) in [(6, false), (7, true), (23, true), (24, false)] {
        let config = InstanceConfiguration {
            roster_size: Some(roster_size),
            ..Default::default()
        };
        assert_eq!(validator.validate(&snapshot, &config).is_empty(), ok, "roster {}", roster_size);
    }
}

#[test]
fn test_roster_unbounded_when_a_bound_is_missing() {
    let validator = InstanceValidator::new();
    let snapshot = SportDefinition {
        roster_max: None,
        ..football()
    };
    let config = InstanceConfiguration {
        roster_size: Some(80),
        ..Default::default()
    };

    assert!(validator.validate(&snapshot, &config).is_empty());
}

#[test]
fn test_two_teams_is_the_minimum() {
    let validator = InstanceValidator::new();
    let snapshot = football();
    let two = InstanceConfiguration {
        num_teams: Some(2),
        ..Default::default()
    };
    let zero = InstanceConfiguration {
        num_teams: Some(0),
        ..Default::default()
    };

    assert!(validator.validate(&snapshot, &two).is_empty());
    assert_eq!(
        validator.validate(&snapshot, &zero),
        vec![ConfigError::InsufficientTeams { num_teams: 0 }]
    );
}

#[test]
fn test_missing_players_per_side_is_a_catalog_defect() {
    let validator = InstanceValidator::new();
    let mut snapshot = football();
    snapshot.players_per_side.remove("5-a-side");
    let config = InstanceConfiguration {
        format: Some("5-a-side".to_string()),
        ..Default::default()
    };

    assert_eq!(
        validator.validate(&snapshot, &config),
        vec![ConfigError::CatalogIntegrity {
            sport_id: "football".to_string(),
            format: "5-a-side".to_string(),
        }]
    );
}

#[test]
fn test_heats_only_where_the_sport_has_them() {
    let (mut draft, instance_id) = draft_with("tennis");
    let outcome = InstanceConfigurator::new()
        .set_configuration(&mut draft, instance_id, &ConfigurationPatch::default().heats(true))
        .unwrap();
    assert_eq!(outcome.errors(), &[ConfigError::HeatsNotSupported]);

    let (mut draft, instance_id) = draft_with("sprint");
    let outcome = InstanceConfigurator::new()
        .set_configuration(&mut draft, instance_id, &ConfigurationPatch::default().heats(true))
        .unwrap();
    assert!(outcome.is_applied());
}

#[test]
fn test_ready_for_submission_requires_complete_configuration() {
    let (mut draft, instance_id) = draft_with("tennis");
    let configurator = InstanceConfigurator::new();

    assert!(!configurator.is_ready_for_submission(&draft, instance_id).unwrap());

    configurator
        .set_configuration(
            &mut draft,
            instance_id,
            &ConfigurationPatch::default().format("Doubles").tournament_type("Knockout"),
        )
        .unwrap();
    assert!(!configurator.is_ready_for_submission(&draft, instance_id).unwrap());

    configurator
        .set_configuration(
            &mut draft,
            instance_id,
            &ConfigurationPatch::default().gender(Gender::Mixed).age_group(AgeGroup::Open),
        )
        .unwrap();
    assert!(configurator.is_ready_for_submission(&draft, instance_id).unwrap());
}

#[test]
fn test_team_sport_needs_team_fields_to_be_ready() {
    let (mut draft, instance_id) = draft_with("football");
    let configurator = InstanceConfigurator::new();
    let validator = InstanceValidator::new();

    let patch = ConfigurationPatch::default()
        .format("11-a-side")
        .tournament_type("Knockout")
        .gender(Gender::Boys)
        .age_group(AgeGroup::Under14);
    configurator.set_configuration(&mut draft, instance_id, &patch).unwrap();

    let issues = validator.readiness_issues(draft.instance(instance_id).unwrap());
    assert_eq!(
        issues,
        vec![
            ConfigError::MissingField { field: ConfigField::NumTeams },
            ConfigError::MissingField { field: ConfigField::RosterSize },
        ]
    );

    configurator
        .set_configuration(&mut draft, instance_id, &complete_football_config())
        .unwrap();
    assert!(configurator.is_ready_for_submission(&draft, instance_id).unwrap());
}

#[test]
fn test_configuring_unknown_instance_fails() {
    let (mut draft, _) = draft_with("tennis");
    let result = InstanceConfigurator::new().set_configuration(
        &mut draft,
        uuid::Uuid::new_v4(),
        &complete_tennis_config(),
    );

    assert!(result.is_err());
}
