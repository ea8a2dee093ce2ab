//! Read-only snapshot assembly for the presentation layer.

use signal_core::state::{EnemyView, MissionSnapshot, PoiView, SquadView};

use crate::state::MissionState;

pub fn build_snapshot(state: &MissionState) -> MissionSnapshot {
    MissionSnapshot {
        clock_minutes: state.clock.minutes,
        clock_display: state.clock.display(),
        phase: state.phase,
        running: state.running,
        mission_end: state.mission_end,
        viper_found: state.viper_found,
        viper_survivors: state.viper_survivors,
        extraction_done: state.extraction_done,
        dustoff_launched: state.dustoff_launched,
        fire_supports_left: state.fire_supports_left,
        air_strikes_left: state.air_strikes_left,
        tts_enabled: state.tts_enabled,
        map_refresh_seq: state.map_refresh_seq,
        squads: state
            .squads
            .values()
            .map(|squad| SquadView {
                callsign: squad.callsign,
                pos: squad.pos,
                grid: squad.pos.label(),
                target: squad.target,
                status: squad.status,
                strength: squad.strength,
                ammo: squad.ammo,
                moving: squad.is_moving(),
            })
            .collect(),
        enemies: state
            .enemies
            .iter()
            .map(|e| EnemyView {
                pos: e.pos,
                strength: e.strength,
                alive: e.alive,
                revealed: e.revealed,
            })
            .collect(),
        pois: state
            .pois
            .iter()
            .map(|p| PoiView {
                label: p.label.clone(),
                kind: p.kind,
                pos: p.pos,
                revealed: p.revealed,
            })
            .collect(),
        outcome: state.outcome.clone(),
        messages: state.log.clone(),
    }
}
