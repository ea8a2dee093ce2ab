//! Enumeration types used throughout the simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Radio callsigns for the controllable units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Callsign {
    Alpha,
    Bravo,
    Dustoff,
}

impl Callsign {
    /// Parse a callsign token, case-insensitive.
    pub fn parse(token: &str) -> Option<Callsign> {
        match token.to_ascii_uppercase().as_str() {
            "ALPHA" => Some(Callsign::Alpha),
            "BRAVO" => Some(Callsign::Bravo),
            "DUSTOFF" => Some(Callsign::Dustoff),
            _ => None,
        }
    }

    /// Uppercase radio name.
    pub fn name(&self) -> &'static str {
        match self {
            Callsign::Alpha => "ALPHA",
            Callsign::Bravo => "BRAVO",
            Callsign::Dustoff => "DUSTOFF",
        }
    }

    /// True for the ground squads that take movement and combat orders.
    /// DUSTOFF only launches on MEDEVAC authorization.
    pub fn is_ground_squad(&self) -> bool {
        !matches!(self, Callsign::Dustoff)
    }
}

impl fmt::Display for Callsign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Squad activity state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SquadStatus {
    #[default]
    Idle,
    Moving,
    Ambush,
    Engaged,
    Inbound,
    Standby,
    Destroyed,
}

impl SquadStatus {
    /// Lowercase word for status lines.
    pub fn describe(&self) -> &'static str {
        match self {
            SquadStatus::Idle => "idle",
            SquadStatus::Moving => "moving",
            SquadStatus::Ambush => "ambush",
            SquadStatus::Engaged => "engaged",
            SquadStatus::Inbound => "inbound",
            SquadStatus::Standby => "standby",
            SquadStatus::Destroyed => "destroyed",
        }
    }
}

/// What a point of interest means to the mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoiKind {
    /// Scenery worth a contact report, nothing more.
    Landmark,
    /// The VIPER crash site. Discovering it sets the mission objective flag.
    ViperCrashSite,
}

/// Mission lifecycle (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionPhase {
    #[default]
    Briefing,
    Running,
    Ended,
}

/// Terminal mission result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MissionOutcome {
    Accomplished { survivors: u32 },
    Failed { reason: FailureReason },
}

impl MissionOutcome {
    /// Overlay headline.
    pub fn title(&self) -> &'static str {
        match self {
            MissionOutcome::Accomplished { .. } => "MISSION COMPLETE",
            MissionOutcome::Failed { .. } => "MISSION FAILED",
        }
    }

    /// Debrief line shown under the headline.
    pub fn debrief(&self) -> String {
        match self {
            MissionOutcome::Accomplished { survivors } => {
                format!("{survivors} VIPER survivors extracted. Outstanding work.")
            }
            MissionOutcome::Failed { reason } => reason.debrief().to_string(),
        }
    }
}

/// Why a mission failed, in the evaluation order of the debrief.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    AllUnitsLost,
    ViperNeverLocated,
    ExtractionIncomplete,
}

impl FailureReason {
    pub fn debrief(&self) -> &'static str {
        match self {
            FailureReason::AllUnitsLost => "All units lost. Command is pulling the plug.",
            FailureReason::ViperNeverLocated => {
                "VIPER was never located. The search area goes cold at nightfall."
            }
            FailureReason::ExtractionIncomplete => {
                "VIPER was located but the extraction was not completed."
            }
        }
    }
}
