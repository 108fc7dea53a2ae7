use std::collections::BTreeMap;

use crate::models::sport::{SportDefinition, SportKind};

pub const BUILTIN_CATALOG_VERSION: &str = "2026.1";

const KNOCKOUT: &str = "Knockout";
const ROUND_ROBIN: &str = "League / Round-Robin";
const LEAGUE_KNOCKOUT: &str = "League + Knockout";
const TIMED_FINAL: &str = "Heats + Final";
const SWISS: &str = "Swiss";

fn team(
    id: &str,
    name: &str,
    formats: &[(&str, u32)],
    roster: (u32, u32),
    tournament_types: &[&str],
) -> SportDefinition {
    SportDefinition {
        id: id.to_string(),
        name: name.to_string(),
        kind: SportKind::Team,
        formats: formats.iter().map(|(f, _)| f.to_string()).collect(),
        players_per_side: per_side(formats),
        roster_min: Some(roster.0),
        roster_max: Some(roster.1),
        has_heats: false,
        tournament_types: tournament_types.iter().map(|t| t.to_string()).collect(),
    }
}

fn individual(
    id: &str,
    name: &str,
    formats: &[(&str, u32)],
    has_heats: bool,
    tournament_types: &[&str],
) -> SportDefinition {
    SportDefinition {
        id: id.to_string(),
        name: name.to_string(),
        kind: SportKind::Individual,
        formats: formats.iter().map(|(f, _)| f.to_string()).collect(),
        players_per_side: per_side(formats),
        roster_min: None,
        roster_max: None,
        has_heats,
        tournament_types: tournament_types.iter().map(|t| t.to_string()).collect(),
    }
}

fn per_side(formats: &[(&str, u32)]) -> BTreeMap<String, u32> {
    formats.iter().map(|(f, n)| (f.to_string(), *n)).collect()
}

/// The definition set shipped with the service, in display order.
pub fn builtin_definitions() -> Vec<SportDefinition> {
    vec![
        team(
            "football",
            "Football",
            &[("5-a-side", 5), ("7-a-side", 7), ("11-a-side", 11)],
            (7, 23),
            &[KNOCKOUT, ROUND_ROBIN, LEAGUE_KNOCKOUT],
        ),
        team(
            "basketball",
            "Basketball",
            &[("3x3", 3), ("5v5", 5)],
            (4, 12),
            &[KNOCKOUT, ROUND_ROBIN, LEAGUE_KNOCKOUT],
        ),
        team(
            "volleyball",
            "Volleyball",
            &[("Indoor 6v6", 6), ("Beach 2v2", 2)],
            (2, 14),
            &[KNOCKOUT, ROUND_ROBIN],
        ),
        team(
            "cricket",
            "Cricket",
            &[("T10", 11), ("T20", 11), ("One Day", 11)],
            (11, 16),
            &[KNOCKOUT, ROUND_ROBIN, LEAGUE_KNOCKOUT],
        ),
        team(
            "kabaddi",
            "Kabaddi",
            &[("Standard", 7)],
            (10, 12),
            &[KNOCKOUT, ROUND_ROBIN],
        ),
        team(
            "hockey",
            "Field Hockey",
            &[("5-a-side", 5), ("11-a-side", 11)],
            (7, 18),
            &[KNOCKOUT, ROUND_ROBIN, LEAGUE_KNOCKOUT],
        ),
        SportDefinition {
            has_heats: true,
            ..team(
                "relay",
                "Relay",
                &[("4x100m", 4), ("4x400m", 4)],
                (4, 6),
                &[TIMED_FINAL],
            )
        },
        individual(
            "athletics",
            "Athletics",
            &[("100m", 1), ("200m", 1), ("400m", 1), ("800m", 1), ("1500m", 1)],
            true,
            &[TIMED_FINAL],
        ),
        individual(
            "swimming",
            "Swimming",
            &[("50m Freestyle", 1), ("100m Freestyle", 1), ("100m Backstroke", 1)],
            true,
            &[TIMED_FINAL],
        ),
        individual(
            "tennis",
            "Tennis",
            &[("Singles", 1), ("Doubles", 2)],
            false,
            &[KNOCKOUT, ROUND_ROBIN],
        ),
        individual(
            "badminton",
            "Badminton",
            &[("Singles", 1), ("Doubles", 2), ("Mixed Doubles", 2)],
            false,
            &[KNOCKOUT, ROUND_ROBIN],
        ),
        individual(
            "table-tennis",
            "Table Tennis",
            &[("Singles", 1), ("Doubles", 2)],
            false,
            &[KNOCKOUT, ROUND_ROBIN],
        ),
        individual(
            "chess",
            "Chess",
            &[("Classical", 1), ("Rapid", 1), ("Blitz", 1)],
            false,
            &[SWISS, ROUND_ROBIN, KNOCKOUT],
        ),
    ]
}
