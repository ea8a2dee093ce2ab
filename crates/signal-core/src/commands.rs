//! The command grammar for player radio traffic.
//!
//! Free text from the command line is parsed into a `Command` before any
//! state is touched. Parse failures carry the radio response they earn;
//! nothing at this layer panics or mutates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::Callsign;
use crate::types::GridPos;

/// All accepted player commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// An order addressed to a single callsign.
    Squad {
        callsign: Callsign,
        order: SquadOrder,
    },
    FireSupport { target: GridPos },
    AirStrike { target: GridPos },
    Resupply { callsign: Callsign },
    Medevac,
    Help,
    Status,
    Map,
}

/// Per-callsign orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SquadOrder {
    Move { dest: GridPos },
    Hold,
    Retreat,
    Sitrep,
    Ambush,
    Engage,
}

/// A rejected transmission, with the radio response it earns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownCallsign(String),
    InvalidGrid,
    UnknownOrder { callsign: Callsign },
    InvalidResupplyTarget(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownCallsign(token) => write!(
                f,
                "Unknown callsign '{token}'. Friendly units: ALPHA, BRAVO, DUSTOFF."
            ),
            ParseError::InvalidGrid => {
                write!(f, "Invalid grid. Use letter A-H and number 1-8, e.g. E5.")
            }
            ParseError::UnknownOrder { callsign } => {
                write!(f, "{callsign}: Say again, last transmission garbled.")
            }
            ParseError::InvalidResupplyTarget(token) => write!(
                f,
                "Invalid unit '{token}'. Resupply is available for ALPHA and BRAVO."
            ),
        }
    }
}

impl Command {
    /// Parse one line of command input. Tokens are case-insensitive;
    /// empty input reads as an unknown callsign.
    pub fn parse(input: &str) -> Result<Command, ParseError> {
        let tokens: Vec<String> = input
            .split_whitespace()
            .map(|t| t.to_ascii_uppercase())
            .collect();
        let Some(first) = tokens.first() else {
            return Err(ParseError::UnknownCallsign(String::new()));
        };

        // Two-word support verbs come before callsign dispatch.
        match first.as_str() {
            "FIRE" if tokens.get(1).is_some_and(|t| t == "SUPPORT") => {
                return Ok(Command::FireSupport {
                    target: parse_grid_arg(tokens.get(2))?,
                });
            }
            "AIR" if tokens.get(1).is_some_and(|t| t == "STRIKE") => {
                return Ok(Command::AirStrike {
                    target: parse_grid_arg(tokens.get(2))?,
                });
            }
            "RESUPPLY" => {
                let unit = tokens.get(1).cloned().unwrap_or_default();
                return match Callsign::parse(&unit) {
                    Some(callsign) if callsign.is_ground_squad() => {
                        Ok(Command::Resupply { callsign })
                    }
                    _ => Err(ParseError::InvalidResupplyTarget(unit)),
                };
            }
            "MEDEVAC" => return Ok(Command::Medevac),
            "HELP" => return Ok(Command::Help),
            "STATUS" => return Ok(Command::Status),
            "MAP" => return Ok(Command::Map),
            _ => {}
        }

        let Some(callsign) = Callsign::parse(first) else {
            return Err(ParseError::UnknownCallsign(first.clone()));
        };
        let order = match tokens.get(1).map(String::as_str) {
            Some("MOVE") => SquadOrder::Move {
                dest: parse_grid_arg(tokens.get(2))?,
            },
            Some("HOLD") => SquadOrder::Hold,
            Some("RETREAT") => SquadOrder::Retreat,
            Some("SITREP") => SquadOrder::Sitrep,
            Some("AMBUSH") => SquadOrder::Ambush,
            Some("ENGAGE") => SquadOrder::Engage,
            _ => return Err(ParseError::UnknownOrder { callsign }),
        };
        Ok(Command::Squad { callsign, order })
    }
}

fn parse_grid_arg(token: Option<&String>) -> Result<GridPos, ParseError> {
    token
        .and_then(|t| GridPos::parse(t))
        .ok_or(ParseError::InvalidGrid)
}
