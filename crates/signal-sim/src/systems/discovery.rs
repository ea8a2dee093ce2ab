//! Fog-of-war discovery checks.
//!
//! After movement, every effective ground squad sweeps its surroundings.
//! POIs and enemies inside the discovery radius become revealed. The
//! VIPER crash site additionally sets the mission flag exactly once and
//! records the survivor count. A squad lying in ambush reports the
//! initiative advantage when it spots an enemy; ordinary enemy discovery
//! logs nothing by itself.

use signal_core::constants::{DISCOVERY_RADIUS, VIPER_SURVIVOR_COUNT};
use signal_core::enums::{Callsign, PoiKind, SquadStatus};
use signal_core::events::RadioMessage;
use signal_core::types::GridPos;

use crate::state::MissionState;

pub fn run(state: &mut MissionState) {
    let now = state.clock.minutes;
    let spotters: Vec<(Callsign, GridPos, bool)> = state
        .squads
        .values()
        .filter(|s| s.is_effective() && s.callsign.is_ground_squad())
        .map(|s| (s.callsign, s.pos, s.status == SquadStatus::Ambush))
        .collect();

    let mut messages: Vec<RadioMessage> = Vec::new();

    for (callsign, pos, ambush) in spotters {
        for poi in &mut state.pois {
            if poi.revealed || pos.distance_to(&poi.pos) > DISCOVERY_RADIUS {
                continue;
            }
            poi.revealed = true;
            match poi.kind {
                PoiKind::ViperCrashSite => {
                    if !state.viper_found {
                        state.viper_found = true;
                        state.viper_survivors = VIPER_SURVIVOR_COUNT;
                        messages.push(RadioMessage::urgent(
                            now,
                            callsign.name(),
                            format!(
                                "We have VIPER! {} survivors at the crash site, grid {}. \
                                 Request immediate MEDEVAC.",
                                VIPER_SURVIVOR_COUNT,
                                poi.pos.label()
                            ),
                        ));
                    }
                }
                PoiKind::Landmark => {
                    messages.push(RadioMessage::new(
                        now,
                        callsign.name(),
                        format!("Spotted a {} at grid {}.", poi.label, poi.pos.label()),
                    ));
                }
            }
        }

        for enemy in &mut state.enemies {
            if !enemy.alive || enemy.revealed || pos.distance_to(&enemy.pos) > DISCOVERY_RADIUS
            {
                continue;
            }
            enemy.revealed = true;
            if ambush {
                messages.push(RadioMessage::new(
                    now,
                    callsign.name(),
                    format!(
                        "Enemy element at {}. They don't see us. We've got the drop on them.",
                        enemy.pos.label()
                    ),
                ));
            }
        }
    }

    state.log.extend(messages);
}
