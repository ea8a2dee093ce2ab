//! Mission setup: squad spawns, enemy and POI placement, and the opening
//! radio traffic for Operation Bright Light.

use std::collections::BTreeMap;

use signal_core::components::{Enemy, PointOfInterest, Squad};
use signal_core::constants::{
    ALPHA_SPAWN, BRAVO_SPAWN, DUSTOFF_BASE, MISSION_START_MINUTES,
};
use signal_core::enums::{Callsign, MissionPhase, PoiKind, SquadStatus};
use signal_core::events::EventAction;
use signal_core::types::{GameClock, GridPos};

use crate::state::MissionState;

/// Reset the state to the starting configuration and emit the opening
/// radio traffic. Safe to call again for a fresh mission.
pub fn setup_mission(state: &mut MissionState) {
    let tts_enabled = state.tts_enabled;
    *state = MissionState::new();
    state.tts_enabled = tts_enabled;

    state.clock = GameClock::new(MISSION_START_MINUTES);
    state.phase = MissionPhase::Running;
    state.running = true;
    state.squads = spawn_squads();
    state.enemies = spawn_enemies();
    state.pois = spawn_pois();
    opening_traffic(state);
}

fn spawn_squads() -> BTreeMap<Callsign, Squad> {
    let mut squads = BTreeMap::new();
    squads.insert(
        Callsign::Alpha,
        Squad::new(Callsign::Alpha, ALPHA_SPAWN, SquadStatus::Idle),
    );
    squads.insert(
        Callsign::Bravo,
        Squad::new(Callsign::Bravo, BRAVO_SPAWN, SquadStatus::Idle),
    );
    squads.insert(
        Callsign::Dustoff,
        Squad::new(Callsign::Dustoff, DUSTOFF_BASE, SquadStatus::Standby),
    );
    squads
}

fn spawn_enemies() -> Vec<Enemy> {
    vec![
        Enemy::new(GridPos::new(5, 3), 8),
        Enemy::new(GridPos::new(6, 6), 10),
        Enemy::new(GridPos::new(2, 6), 6),
    ]
}

fn spawn_pois() -> Vec<PointOfInterest> {
    vec![
        PointOfInterest::new("village", PoiKind::Landmark, GridPos::new(3, 1)),
        PointOfInterest::new("crash site", PoiKind::ViperCrashSite, GridPos::new(3, 4)),
        PointOfInterest::new("river ford", PoiKind::Landmark, GridPos::new(6, 2)),
    ]
}

fn opening_traffic(state: &mut MissionState) {
    state.radio_urgent(
        "PAPA BEAR",
        "OPERATION BRIGHT LIGHT is a go. Recon patrol VIPER is missing in \
         sector. Locate the patrol and extract survivors.",
    );
    state.radio(
        "PAPA BEAR",
        "ALPHA, BRAVO: you are weapons free. Report all contacts. DUSTOFF \
         is holding on strip alert.",
    );

    // Scripted check-ins for the first minutes of the mission.
    let now = state.clock.minutes;
    state.scheduler.schedule(
        now + 1,
        EventAction::ScriptedMessage {
            sender: "ALPHA".to_string(),
            text: "Vasquez here. Alpha is ready to move.".to_string(),
        },
    );
    state.scheduler.schedule(
        now + 2,
        EventAction::ScriptedMessage {
            sender: "BRAVO".to_string(),
            text: "Okafor here. Bravo standing by on the west trail.".to_string(),
        },
    );
    state.scheduler.schedule(
        now + 8,
        EventAction::ScriptedMessage {
            sender: "PAPA BEAR".to_string(),
            text: "Intel update: VIPER's last transmission bearing cuts through \
                   the center of the sector."
                .to_string(),
        },
    );
}
