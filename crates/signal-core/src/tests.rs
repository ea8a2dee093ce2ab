//! Tests for grid geometry, the clock, terrain, and the command grammar.

use crate::commands::{Command, ParseError, SquadOrder};
use crate::constants::*;
use crate::enums::*;
use crate::terrain::{terrain_at, Terrain};
use crate::types::{format_minutes, GameClock, GridPos};

// ---- Grid geometry ----

#[test]
fn test_grid_label_parse_round_trip() {
    for col in 0..GRID_COLS {
        for row in 0..GRID_ROWS {
            let pos = GridPos::new(col, row);
            let parsed = GridPos::parse(&pos.label());
            assert_eq!(parsed, Some(pos), "round trip failed for {}", pos.label());
        }
    }
}

#[test]
fn test_grid_label_corners() {
    assert_eq!(GridPos::new(0, 0).label(), "A1");
    assert_eq!(GridPos::new(4, 4).label(), "E5");
    assert_eq!(GridPos::new(7, 7).label(), "H8");
}

#[test]
fn test_parse_grid_rejects_invalid() {
    for bad in ["Z9", "", "A0", "A9", "I1", "B0", "H99", "5A", "E", "EE5"] {
        assert_eq!(GridPos::parse(bad), None, "should reject {bad:?}");
    }
}

#[test]
fn test_parse_grid_case_insensitive() {
    assert_eq!(GridPos::parse("e5"), Some(GridPos::new(4, 4)));
    assert_eq!(GridPos::parse("h8"), Some(GridPos::new(7, 7)));
}

#[test]
fn test_manhattan_distance() {
    assert_eq!(GridPos::new(0, 0).distance_to(&GridPos::new(3, 4)), 7);
    assert_eq!(GridPos::new(2, 2).distance_to(&GridPos::new(2, 2)), 0);
    assert_eq!(GridPos::new(1, 1).distance_to(&GridPos::new(4, 4)), 6);
}

#[test]
fn test_in_bounds() {
    assert!(GridPos::new(0, 0).in_bounds());
    assert!(GridPos::new(7, 7).in_bounds());
    assert!(!GridPos::new(-1, 0).in_bounds());
    assert!(!GridPos::new(0, 8).in_bounds());
}

// ---- Clock ----

#[test]
fn test_format_minutes() {
    assert_eq!(format_minutes(360), "06:00");
    assert_eq!(format_minutes(375), "06:15");
    assert_eq!(format_minutes(0), "00:00");
    assert_eq!(format_minutes(1439), "23:59");
    assert_eq!(format_minutes(1440), "00:00");
}

#[test]
fn test_clock_advance() {
    let mut clock = GameClock::new(MISSION_START_MINUTES);
    assert_eq!(clock.display(), "06:00");
    clock.advance();
    assert_eq!(clock.minutes, 361);
    assert_eq!(clock.display(), "06:01");
}

// ---- Terrain ----

#[test]
fn test_terrain_delays() {
    assert_eq!(terrain_at(ALPHA_SPAWN), Terrain::Forest);
    assert_eq!(terrain_at(ALPHA_SPAWN).delay_ticks(), 2);
    assert_eq!(terrain_at(GridPos::new(4, 4)), Terrain::Open);
    assert_eq!(terrain_at(GridPos::new(4, 4)).delay_ticks(), 0);
    assert_eq!(terrain_at(GridPos::new(3, 1)), Terrain::Village);
    assert_eq!(terrain_at(GridPos::new(3, 6)), Terrain::Marsh);
}

#[test]
fn test_terrain_off_board_reads_open() {
    assert_eq!(terrain_at(GridPos::new(-1, 3)), Terrain::Open);
    assert_eq!(terrain_at(GridPos::new(3, 99)), Terrain::Open);
}

// ---- Command grammar ----

#[test]
fn test_parse_squad_move() {
    assert_eq!(
        Command::parse("ALPHA MOVE E5"),
        Ok(Command::Squad {
            callsign: Callsign::Alpha,
            order: SquadOrder::Move {
                dest: GridPos::new(4, 4)
            },
        })
    );
}

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!(
        Command::parse("bravo hold"),
        Ok(Command::Squad {
            callsign: Callsign::Bravo,
            order: SquadOrder::Hold,
        })
    );
}

#[test]
fn test_parse_simple_orders() {
    for (text, order) in [
        ("ALPHA HOLD", SquadOrder::Hold),
        ("ALPHA RETREAT", SquadOrder::Retreat),
        ("ALPHA SITREP", SquadOrder::Sitrep),
        ("ALPHA AMBUSH", SquadOrder::Ambush),
        ("ALPHA ENGAGE", SquadOrder::Engage),
    ] {
        assert_eq!(
            Command::parse(text),
            Ok(Command::Squad {
                callsign: Callsign::Alpha,
                order,
            }),
            "failed to parse {text:?}"
        );
    }
}

#[test]
fn test_parse_support_verbs() {
    assert_eq!(
        Command::parse("FIRE SUPPORT E4"),
        Ok(Command::FireSupport {
            target: GridPos::new(4, 3)
        })
    );
    assert_eq!(
        Command::parse("AIR STRIKE F4"),
        Ok(Command::AirStrike {
            target: GridPos::new(5, 3)
        })
    );
    assert_eq!(
        Command::parse("RESUPPLY BRAVO"),
        Ok(Command::Resupply {
            callsign: Callsign::Bravo
        })
    );
    assert_eq!(Command::parse("MEDEVAC"), Ok(Command::Medevac));
    assert_eq!(Command::parse("HELP"), Ok(Command::Help));
    assert_eq!(Command::parse("STATUS"), Ok(Command::Status));
    assert_eq!(Command::parse("MAP"), Ok(Command::Map));
}

#[test]
fn test_parse_unknown_callsign() {
    assert_eq!(
        Command::parse("ZULU MOVE A1"),
        Err(ParseError::UnknownCallsign("ZULU".to_string()))
    );
    assert_eq!(
        Command::parse(""),
        Err(ParseError::UnknownCallsign(String::new()))
    );
    assert_eq!(
        Command::parse("   "),
        Err(ParseError::UnknownCallsign(String::new()))
    );
}

#[test]
fn test_parse_invalid_grid() {
    assert_eq!(Command::parse("ALPHA MOVE Z9"), Err(ParseError::InvalidGrid));
    assert_eq!(Command::parse("ALPHA MOVE"), Err(ParseError::InvalidGrid));
    assert_eq!(Command::parse("FIRE SUPPORT A0"), Err(ParseError::InvalidGrid));
}

#[test]
fn test_parse_invalid_resupply_target() {
    assert_eq!(
        Command::parse("RESUPPLY DUSTOFF"),
        Err(ParseError::InvalidResupplyTarget("DUSTOFF".to_string()))
    );
    assert_eq!(
        Command::parse("RESUPPLY ZULU"),
        Err(ParseError::InvalidResupplyTarget("ZULU".to_string()))
    );
}

#[test]
fn test_parse_garbled_order() {
    assert_eq!(
        Command::parse("ALPHA DANCE"),
        Err(ParseError::UnknownOrder {
            callsign: Callsign::Alpha
        })
    );
}

#[test]
fn test_parse_error_messages() {
    assert!(ParseError::UnknownCallsign("ZULU".into())
        .to_string()
        .contains("Unknown callsign"));
    assert!(ParseError::InvalidGrid.to_string().contains("Invalid grid"));
    assert!(ParseError::InvalidResupplyTarget("DUSTOFF".into())
        .to_string()
        .contains("Invalid unit"));
}

// ---- Serde ----

#[test]
fn test_callsign_serde() {
    for v in [Callsign::Alpha, Callsign::Bravo, Callsign::Dustoff] {
        let json = serde_json::to_string(&v).unwrap();
        let back: Callsign = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_squad_status_serde() {
    let variants = [
        SquadStatus::Idle,
        SquadStatus::Moving,
        SquadStatus::Ambush,
        SquadStatus::Engaged,
        SquadStatus::Inbound,
        SquadStatus::Standby,
        SquadStatus::Destroyed,
    ];
    for v in variants {
        let json = serde_json::to_string(&v).unwrap();
        let back: SquadStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
    // Statuses serialize as the lowercase words the renderer displays.
    assert_eq!(serde_json::to_string(&SquadStatus::Standby).unwrap(), "\"standby\"");
}

#[test]
fn test_mission_outcome_serde() {
    let variants = [
        MissionOutcome::Accomplished { survivors: 3 },
        MissionOutcome::Failed {
            reason: FailureReason::AllUnitsLost,
        },
        MissionOutcome::Failed {
            reason: FailureReason::ViperNeverLocated,
        },
        MissionOutcome::Failed {
            reason: FailureReason::ExtractionIncomplete,
        },
    ];
    for v in variants {
        let json = serde_json::to_string(&v).unwrap();
        let back: MissionOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_command_serde() {
    let command = Command::parse("FIRE SUPPORT E4").unwrap();
    let json = serde_json::to_string(&command).unwrap();
    let back: Command = serde_json::from_str(&json).unwrap();
    assert_eq!(command, back);
}

#[test]
fn test_outcome_debrief_text() {
    assert_eq!(
        MissionOutcome::Accomplished { survivors: 3 }.debrief(),
        "3 VIPER survivors extracted. Outstanding work."
    );
    assert!(MissionOutcome::Failed {
        reason: FailureReason::ViperNeverLocated
    }
    .debrief()
    .contains("never located"));
    assert_eq!(
        MissionOutcome::Failed {
            reason: FailureReason::AllUnitsLost
        }
        .title(),
        "MISSION FAILED"
    );
}
