use std::collections::BTreeMap;

use tourney_backend::catalog::SportCatalog;
use tourney_backend::models::draft::{AgeGroup, ConfigurationPatch, Gender, TournamentMetadata};
use tourney_backend::models::sport::{SportDefinition, SportKind};

pub fn football() -> SportDefinition {
    SportDefinition {
        id: "football".to_string(),
        name: "Football".to_string(),
        kind: SportKind::Team,
        formats: vec!["5-a-side".to_string(), "11-a-side".to_string()],
        players_per_side: BTreeMap::from([
            ("5-a-side".to_string(), 5),
            ("11-a-side".to_string(), 11),
        ]),
        roster_min: Some(7),
        roster_max: Some(23),
        has_heats: false,
        tournament_types: vec!["Knockout".to_string(), "League / Round-Robin".to_string()],
    }
}

pub fn tennis() -> SportDefinition {
    SportDefinition {
        id: "tennis".to_string(),
        name: "Tennis".to_string(),
        kind: SportKind::Individual,
        formats: vec!["Singles".to_string(), "Doubles".to_string()],
        players_per_side: BTreeMap::from([
            ("Singles".to_string(), 1),
            ("Doubles".to_string(), 2),
        ]),
        roster_min: None,
        roster_max: None,
        has_heats: false,
        tournament_types: vec!["Knockout".to_string(), "League / Round-Robin".to_string()],
    }
}

pub fn sprint() -> SportDefinition {
    SportDefinition {
        id: "sprint".to_string(),
        name: "100m Sprint".to_string(),
        kind: SportKind::Individual,
        formats: vec!["100m".to_string()],
        players_per_side: BTreeMap::from([("100m".to_string(), 1)]),
        roster_min: None,
        roster_max: None,
        has_heats: true,
        tournament_types: vec!["Heats + Final".to_string()],
    }
}

pub fn test_catalog() -> SportCatalog {
    SportCatalog::new("test-1", vec![football(), tennis(), sprint()])
        .expect("Test catalog must be valid")
}

pub fn valid_metadata() -> TournamentMetadata {
    TournamentMetadata {
        name: Some("Inter-School Championship".to_string()),
        hosted_by: Some("Riverside High".to_string()),
        description: Some("Annual district meet".to_string()),
        level: Some("District".to_string()),
        start_date: chrono::NaiveDate::from_ymd_opt(2026, 11, 2),
        end_date: chrono::NaiveDate::from_ymd_opt(2026, 11, 6),
    }
}

pub fn complete_tennis_config() -> ConfigurationPatch {
    ConfigurationPatch::default()
        .format("Doubles")
        .tournament_type("Knockout")
        .gender(Gender::Girls)
        .age_group(AgeGroup::Under17)
}

pub fn complete_football_config() -> ConfigurationPatch {
    ConfigurationPatch::default()
        .format("11-a-side")
        .tournament_type("Knockout")
        .gender(Gender::Boys)
        .age_group(AgeGroup::Under19)
        .num_teams(8)
        .roster_size(18)
}
