//! Live mission state, the single mutable record the engine drives.
//!
//! `MissionState` exclusively owns every squad, enemy, POI, scheduled
//! event, and radio message for one mission. The command interpreter and
//! the tick pipeline are the only mutators; everything else reads
//! snapshots.

use std::collections::BTreeMap;

use signal_core::components::{Enemy, PointOfInterest, Squad};
use signal_core::constants::{AIR_STRIKES, FIRE_SUPPORT_MISSIONS, MISSION_START_MINUTES};
use signal_core::enums::{Callsign, MissionOutcome, MissionPhase, PoiKind};
use signal_core::events::RadioMessage;
use signal_core::types::{GameClock, GridPos};

use crate::scheduler::EventScheduler;

#[derive(Debug, Clone)]
pub struct MissionState {
    pub clock: GameClock,
    pub phase: MissionPhase,
    pub running: bool,
    pub mission_end: bool,
    pub fire_supports_left: u32,
    pub air_strikes_left: u32,
    pub viper_found: bool,
    pub viper_survivors: u32,
    pub extraction_done: bool,
    pub dustoff_launched: bool,
    pub tts_enabled: bool,
    pub map_refresh_seq: u32,
    pub squads: BTreeMap<Callsign, Squad>,
    pub enemies: Vec<Enemy>,
    pub pois: Vec<PointOfInterest>,
    pub scheduler: EventScheduler,
    pub log: Vec<RadioMessage>,
    pub outcome: Option<MissionOutcome>,
}

impl MissionState {
    pub fn new() -> Self {
        Self {
            clock: GameClock::new(MISSION_START_MINUTES),
            phase: MissionPhase::Briefing,
            running: false,
            mission_end: false,
            fire_supports_left: FIRE_SUPPORT_MISSIONS,
            air_strikes_left: AIR_STRIKES,
            viper_found: false,
            viper_survivors: 0,
            extraction_done: false,
            dustoff_launched: false,
            tts_enabled: true,
            map_refresh_seq: 0,
            squads: BTreeMap::new(),
            enemies: Vec::new(),
            pois: Vec::new(),
            scheduler: EventScheduler::new(),
            log: Vec::new(),
            outcome: None,
        }
    }

    /// Append a routine radio message at the current clock.
    pub fn radio(&mut self, sender: &str, text: impl Into<String>) {
        self.log
            .push(RadioMessage::new(self.clock.minutes, sender, text));
    }

    /// Append urgent (highlighted) traffic at the current clock.
    pub fn radio_urgent(&mut self, sender: &str, text: impl Into<String>) {
        self.log
            .push(RadioMessage::urgent(self.clock.minutes, sender, text));
    }

    pub fn squad(&self, callsign: Callsign) -> Option<&Squad> {
        self.squads.get(&callsign)
    }

    pub fn squad_mut(&mut self, callsign: Callsign) -> Option<&mut Squad> {
        self.squads.get_mut(&callsign)
    }

    /// Position of the VIPER crash site, once placed.
    pub fn viper_site(&self) -> Option<GridPos> {
        self.pois
            .iter()
            .find(|p| p.kind == PoiKind::ViperCrashSite)
            .map(|p| p.pos)
    }

    /// True when both ground squads are combat-ineffective.
    pub fn all_ground_squads_lost(&self) -> bool {
        [Callsign::Alpha, Callsign::Bravo].iter().all(|callsign| {
            self.squads
                .get(callsign)
                .map_or(true, |squad| squad.strength <= 0)
        })
    }
}

impl Default for MissionState {
    fn default() -> Self {
        Self::new()
    }
}
