//! Mission snapshot: the complete visible state handed to the renderer
//! after each tick or command.

use serde::{Deserialize, Serialize};

use crate::enums::{Callsign, MissionOutcome, MissionPhase, PoiKind, SquadStatus};
use crate::events::RadioMessage;
use crate::types::GridPos;

/// Read-only view of the whole mission. The renderer and narration layer
/// consume this; they never mutate simulation state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissionSnapshot {
    pub clock_minutes: u32,
    /// "HH:MM" for the clock widget.
    pub clock_display: String,
    pub phase: MissionPhase,
    pub running: bool,
    pub mission_end: bool,
    pub viper_found: bool,
    pub viper_survivors: u32,
    pub extraction_done: bool,
    pub dustoff_launched: bool,
    pub fire_supports_left: u32,
    pub air_strikes_left: u32,
    pub tts_enabled: bool,
    /// Bumped whenever a full map redraw is requested.
    pub map_refresh_seq: u32,
    pub squads: Vec<SquadView>,
    pub enemies: Vec<EnemyView>,
    pub pois: Vec<PoiView>,
    pub outcome: Option<MissionOutcome>,
    pub messages: Vec<RadioMessage>,
}

/// A squad on the status board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquadView {
    pub callsign: Callsign,
    pub pos: GridPos,
    /// Map label for the current cell.
    pub grid: String,
    pub target: Option<GridPos>,
    pub status: SquadStatus,
    pub moving: bool,
    pub strength: i32,
    pub ammo: i32,
}

/// An enemy marker. The renderer hides markers that are not revealed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub pos: GridPos,
    pub strength: i32,
    pub alive: bool,
    pub revealed: bool,
}

/// A point-of-interest marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoiView {
    pub label: String,
    pub kind: PoiKind,
    pub pos: GridPos,
    pub revealed: bool,
}
