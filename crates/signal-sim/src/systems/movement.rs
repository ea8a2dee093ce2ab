//! Terrain-aware squad movement.
//!
//! Each moving squad carries a countdown seeded from the terrain delay of
//! its current cell. When the countdown hits zero the squad advances
//! exactly one grid step toward its target (column first, then row) and
//! the countdown reloads from the terrain of the entered cell. Arriving
//! on the target cell clears the order.

use signal_core::enums::SquadStatus;
use signal_core::terrain;
use signal_core::types::GridPos;

use crate::state::MissionState;

pub fn run(state: &mut MissionState) {
    let mut arrivals: Vec<(signal_core::enums::Callsign, GridPos)> = Vec::new();

    for squad in state.squads.values_mut() {
        if squad.status != SquadStatus::Moving {
            continue;
        }
        let Some(target) = squad.target else {
            // Target lost (e.g. cleared by a later order); stand down.
            squad.status = SquadStatus::Idle;
            continue;
        };

        if squad.move_delay > 0 {
            squad.move_delay -= 1;
            continue;
        }

        // One step, never overshooting: column first, then row.
        if squad.pos.col != target.col {
            squad.pos.col += (target.col - squad.pos.col).signum();
        } else if squad.pos.row != target.row {
            squad.pos.row += (target.row - squad.pos.row).signum();
        }

        if squad.pos == target {
            squad.status = SquadStatus::Idle;
            squad.target = None;
            squad.move_delay = 0;
            arrivals.push((squad.callsign, squad.pos));
        } else {
            squad.move_delay = terrain::terrain_at(squad.pos).delay_ticks();
        }
    }

    for (callsign, pos) in arrivals {
        state.radio(callsign.name(), format!("In position at {}.", pos.label()));
    }
}
