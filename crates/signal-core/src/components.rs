//! Live entity records owned by the mission state.

use serde::{Deserialize, Serialize};

use crate::constants::{SQUAD_FULL_AMMO, SQUAD_FULL_STRENGTH};
use crate::enums::{Callsign, PoiKind, SquadStatus};
use crate::types::GridPos;

/// A controllable friendly unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Squad {
    pub callsign: Callsign,
    pub pos: GridPos,
    /// Destination while a MOVE order is in effect.
    pub target: Option<GridPos>,
    pub status: SquadStatus,
    /// Effectiveness proxy. Zero means the squad is combat-ineffective.
    pub strength: i32,
    pub ammo: i32,
    /// Terrain countdown before the next movement step.
    pub move_delay: u32,
}

impl Squad {
    pub fn new(callsign: Callsign, pos: GridPos, status: SquadStatus) -> Self {
        Self {
            callsign,
            pos,
            target: None,
            status,
            strength: SQUAD_FULL_STRENGTH,
            ammo: SQUAD_FULL_AMMO,
            move_delay: 0,
        }
    }

    /// True while the squad can accept orders and spot contacts.
    pub fn is_effective(&self) -> bool {
        self.strength > 0 && self.status != SquadStatus::Destroyed
    }

    pub fn is_moving(&self) -> bool {
        self.status == SquadStatus::Moving
    }
}

/// A hostile element on the map, hidden until a squad gets close.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: GridPos,
    pub strength: i32,
    pub alive: bool,
    pub revealed: bool,
}

impl Enemy {
    pub fn new(pos: GridPos, strength: i32) -> Self {
        Self {
            pos,
            strength,
            alive: true,
            revealed: false,
        }
    }
}

/// A discoverable map feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub label: String,
    pub kind: PoiKind,
    pub pos: GridPos,
    pub revealed: bool,
}

impl PointOfInterest {
    pub fn new(label: &str, kind: PoiKind, pos: GridPos) -> Self {
        Self {
            label: label.to_string(),
            kind,
            pos,
            revealed: false,
        }
    }
}
