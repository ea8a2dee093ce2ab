//! Mission engine.
//!
//! `MissionEngine` owns the mission state and RNG, interprets player
//! radio commands, advances the real-time clock one minute per tick, and
//! produces `MissionSnapshot`s. Completely headless, enabling
//! deterministic testing.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use signal_core::commands::{Command, SquadOrder};
use signal_core::constants::{
    AIR_STRIKE_DAMAGE_MAX, AIR_STRIKE_DAMAGE_MIN, AIR_STRIKE_DELAY_MIN, DUSTOFF_BASE,
    DUSTOFF_TRANSIT_MIN, FIRE_SUPPORT_DAMAGE_MAX, FIRE_SUPPORT_DAMAGE_MIN,
    FIRE_SUPPORT_DELAY_MIN, RESUPPLY_DELAY_MIN, SQUAD_FULL_AMMO,
};
use signal_core::enums::{Callsign, FailureReason, MissionOutcome, MissionPhase, SquadStatus};
use signal_core::events::{EventAction, ScheduledEvent};
use signal_core::state::MissionSnapshot;
use signal_core::terrain;
use signal_core::types::GridPos;

use crate::state::MissionState;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new mission.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same mission.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The mission engine. Owns the state and all randomness.
pub struct MissionEngine {
    state: MissionState,
    rng: ChaCha8Rng,
}

impl MissionEngine {
    /// Create a new engine with the given config. The mission stays in
    /// the briefing phase until `start_mission`.
    pub fn new(config: SimConfig) -> Self {
        Self {
            state: MissionState::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
        }
    }

    /// Begin (or restart) the mission: spawn units, place the objective,
    /// start the clock, and emit the opening traffic.
    pub fn start_mission(&mut self) {
        world_setup::setup_mission(&mut self.state);
    }

    /// Read-only view of the live state.
    pub fn state(&self) -> &MissionState {
        &self.state
    }

    /// Direct state access for test scenarios.
    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut MissionState {
        &mut self.state
    }

    /// Build the full snapshot for the renderer.
    pub fn snapshot(&self) -> MissionSnapshot {
        systems::snapshot::build_snapshot(&self.state)
    }

    /// Toggle radio narration. Returns the new setting.
    pub fn toggle_tts(&mut self) -> bool {
        self.state.tts_enabled = !self.state.tts_enabled;
        self.state.tts_enabled
    }

    /// Interpret one line of player input. Ignored outside a running
    /// mission; parse failures earn a radio response, never a panic.
    pub fn process_command(&mut self, input: &str) {
        if !self.state.running {
            return;
        }
        match Command::parse(input) {
            Ok(command) => self.handle_command(command),
            Err(err) => self.state.radio("PAPA BEAR", err.to_string()),
        }
    }

    /// Advance the mission by one minute: fire due events, then run the
    /// movement, discovery, and combat systems, then check for an
    /// implicit mission end.
    pub fn tick(&mut self) {
        if !self.state.running {
            return;
        }
        self.state.clock.advance();

        let due = self.state.scheduler.drain(self.state.clock.minutes);
        for event in due {
            self.dispatch_event(event);
        }

        systems::movement::run(&mut self.state);
        systems::discovery::run(&mut self.state);
        systems::combat::run(&mut self.state, &mut self.rng);

        if self.state.extraction_done || self.state.all_ground_squads_lost() {
            self.end_mission();
        }
    }

    /// Close out the mission and broadcast the debrief. Idempotent.
    pub fn end_mission(&mut self) {
        if self.state.mission_end {
            return;
        }
        let outcome = if self.state.all_ground_squads_lost() && !self.state.extraction_done {
            MissionOutcome::Failed {
                reason: FailureReason::AllUnitsLost,
            }
        } else if !self.state.viper_found {
            MissionOutcome::Failed {
                reason: FailureReason::ViperNeverLocated,
            }
        } else if !self.state.extraction_done {
            MissionOutcome::Failed {
                reason: FailureReason::ExtractionIncomplete,
            }
        } else {
            MissionOutcome::Accomplished {
                survivors: self.state.viper_survivors,
            }
        };

        self.state.running = false;
        self.state.mission_end = true;
        self.state.phase = MissionPhase::Ended;
        self.state.radio_urgent(
            "PAPA BEAR",
            format!("{}. {}", outcome.title(), outcome.debrief()),
        );
        self.state.outcome = Some(outcome);
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Squad { callsign, order } => self.handle_order(callsign, order),
            Command::FireSupport { target } => self.handle_fire_support(target),
            Command::AirStrike { target } => self.handle_air_strike(target),
            Command::Resupply { callsign } => self.handle_resupply(callsign),
            Command::Medevac => self.handle_medevac(),
            Command::Help => self.handle_help(),
            Command::Status => self.handle_status(),
            Command::Map => {
                self.state.map_refresh_seq += 1;
                self.state.radio("PAPA BEAR", "Map refreshed.");
            }
        }
    }

    fn handle_order(&mut self, callsign: Callsign, order: SquadOrder) {
        if callsign == Callsign::Dustoff {
            // DUSTOFF answers a SITREP but takes no direct orders.
            if order == SquadOrder::Sitrep {
                self.dustoff_sitrep();
            } else {
                self.state.radio(
                    "DUSTOFF",
                    "Negative. DUSTOFF launches on MEDEVAC authorization only.",
                );
            }
            return;
        }

        let Some(squad) = self.state.squad(callsign) else {
            return;
        };
        if !squad.is_effective() {
            self.state
                .radio("PAPA BEAR", format!("No response from {}.", callsign.name()));
            return;
        }
        let pos = squad.pos;
        let was_ambush = squad.status == SquadStatus::Ambush;

        match order {
            SquadOrder::Move { dest } => {
                if let Some(squad) = self.state.squad_mut(callsign) {
                    squad.target = Some(dest);
                    squad.status = SquadStatus::Moving;
                    // First step is paced by the terrain the squad starts in.
                    squad.move_delay = terrain::terrain_at(pos).delay_ticks();
                }
                self.state
                    .radio(callsign.name(), format!("Roger, moving to {}.", dest.label()));
            }
            SquadOrder::Hold => {
                if let Some(squad) = self.state.squad_mut(callsign) {
                    squad.status = SquadStatus::Idle;
                    squad.target = None;
                }
                self.state.radio(callsign.name(), "Holding position.");
            }
            SquadOrder::Retreat => {
                let fallback = GridPos::new((pos.col - 1).max(0), pos.row);
                if let Some(squad) = self.state.squad_mut(callsign) {
                    squad.pos = fallback;
                    squad.status = SquadStatus::Idle;
                    squad.target = None;
                }
                self.state.radio(
                    callsign.name(),
                    format!("Falling back to {}.", fallback.label()),
                );
            }
            SquadOrder::Sitrep => self.squad_sitrep(callsign),
            SquadOrder::Ambush => {
                if let Some(squad) = self.state.squad_mut(callsign) {
                    squad.status = SquadStatus::Ambush;
                    squad.target = None;
                }
                self.state
                    .radio(callsign.name(), "Setting ambush. Going quiet.");
            }
            SquadOrder::Engage => {
                match systems::combat::nearest_engageable_enemy(&self.state, pos) {
                    Some(idx) => {
                        if let Some(squad) = self.state.squad_mut(callsign) {
                            squad.status = SquadStatus::Engaged;
                            squad.target = None;
                        }
                        self.state.radio(callsign.name(), "Engaging enemy!");
                        systems::combat::fight(
                            &mut self.state,
                            &mut self.rng,
                            callsign,
                            idx,
                            was_ambush,
                        );
                    }
                    None => {
                        self.state.radio(
                            callsign.name(),
                            "No confirmed enemy contacts in range.",
                        );
                    }
                }
            }
        }
    }

    fn squad_sitrep(&mut self, callsign: Callsign) {
        let Some(squad) = self.state.squad(callsign) else {
            return;
        };
        let leader = match callsign {
            Callsign::Alpha => "Vasquez",
            Callsign::Bravo => "Okafor",
            Callsign::Dustoff => return,
        };
        let text = format!(
            "{}: Position {}, {} effectives, ammo {}, {}.",
            leader,
            squad.pos.label(),
            squad.strength,
            squad.ammo,
            squad.status.describe()
        );
        self.state.radio(callsign.name(), text);
    }

    fn dustoff_sitrep(&mut self) {
        let Some(squad) = self.state.squad(Callsign::Dustoff) else {
            return;
        };
        let text = match squad.status {
            SquadStatus::Inbound => format!("Airborne, position {}.", squad.pos.label()),
            SquadStatus::Standby => "On strip alert at base. Ready to launch.".to_string(),
            _ => format!("Holding at {}.", squad.pos.label()),
        };
        self.state.radio("DUSTOFF", text);
    }

    fn handle_fire_support(&mut self, target: GridPos) {
        if self.state.fire_supports_left == 0 {
            self.state
                .radio("ARTILLERY", "No fire support remaining. Battery is dry.");
            return;
        }
        self.state.fire_supports_left -= 1;
        let fire_time = self.state.clock.minutes + FIRE_SUPPORT_DELAY_MIN;
        self.state
            .scheduler
            .schedule(fire_time, EventAction::FireSupportResolve { target });
        self.state.radio(
            "ARTILLERY",
            format!("Fire mission, grid {}. Shot, out.", target.label()),
        );
    }

    fn handle_air_strike(&mut self, target: GridPos) {
        if self.state.air_strikes_left == 0 {
            self.state
                .radio("FALCON 3", "No air strikes available. FALCON flight is bingo fuel.");
            return;
        }
        self.state.air_strikes_left -= 1;
        let fire_time = self.state.clock.minutes + AIR_STRIKE_DELAY_MIN;
        self.state
            .scheduler
            .schedule(fire_time, EventAction::AirStrikeResolve { target });
        self.state.radio(
            "FALCON 3",
            format!("Copy, rolling in hot on grid {}.", target.label()),
        );
    }

    fn handle_resupply(&mut self, callsign: Callsign) {
        let fire_time = self.state.clock.minutes + RESUPPLY_DELAY_MIN;
        self.state
            .scheduler
            .schedule(fire_time, EventAction::ResupplyComplete { callsign });
        self.state.radio(
            "PAPA BEAR",
            format!("Resupply drop inbound for {}.", callsign.name()),
        );
    }

    fn handle_medevac(&mut self) {
        if !self.state.viper_found {
            self.state.radio(
                "DUSTOFF",
                "Negative. VIPER not yet located. Need a confirmed LZ first.",
            );
            return;
        }
        if self.state.dustoff_launched {
            self.state.radio("DUSTOFF", "DUSTOFF already deployed.");
            return;
        }
        self.state.dustoff_launched = true;
        if let Some(squad) = self.state.squad_mut(Callsign::Dustoff) {
            squad.status = SquadStatus::Inbound;
        }
        let fire_time = self.state.clock.minutes + DUSTOFF_TRANSIT_MIN;
        self.state
            .scheduler
            .schedule(fire_time, EventAction::DustoffArrive);
        self.state.radio(
            "DUSTOFF",
            "DUSTOFF is wheels up, inbound to the crash site LZ.",
        );
    }

    fn handle_help(&mut self) {
        self.state.radio(
            "PAPA BEAR",
            "Orders: <CALLSIGN> MOVE <GRID> | HOLD | RETREAT | SITREP | AMBUSH | ENGAGE.",
        );
        self.state.radio(
            "PAPA BEAR",
            "Support: FIRE SUPPORT <GRID> | AIR STRIKE <GRID> | RESUPPLY <UNIT> | MEDEVAC.",
        );
        self.state
            .radio("PAPA BEAR", "Board: STATUS | MAP | HELP.");
    }

    fn handle_status(&mut self) {
        let lines: Vec<String> = self
            .state
            .squads
            .values()
            .map(|squad| {
                if squad.callsign == Callsign::Dustoff {
                    format!(
                        "DUSTOFF: Grid {}, {}.",
                        squad.pos.label(),
                        squad.status.describe()
                    )
                } else {
                    format!(
                        "{}: Grid {}, strength {}, ammo {}, {}.",
                        squad.callsign.name(),
                        squad.pos.label(),
                        squad.strength,
                        squad.ammo,
                        squad.status.describe()
                    )
                }
            })
            .collect();
        for line in lines {
            self.state.radio("PAPA BEAR", line);
        }
    }

    fn dispatch_event(&mut self, event: ScheduledEvent) {
        match event.action {
            EventAction::FireSupportResolve { target } => {
                systems::combat::area_damage(
                    &mut self.state,
                    &mut self.rng,
                    target,
                    FIRE_SUPPORT_DAMAGE_MIN..=FIRE_SUPPORT_DAMAGE_MAX,
                );
                self.state.radio(
                    "ARTILLERY",
                    format!("Splash, out. Rounds complete on {}.", target.label()),
                );
            }
            EventAction::AirStrikeResolve { target } => {
                systems::combat::area_damage(
                    &mut self.state,
                    &mut self.rng,
                    target,
                    AIR_STRIKE_DAMAGE_MIN..=AIR_STRIKE_DAMAGE_MAX,
                );
                self.state.radio(
                    "FALCON 3",
                    format!("Bombs away. Good effect on grid {}.", target.label()),
                );
            }
            EventAction::ResupplyComplete { callsign } => {
                let mut delivered = false;
                if let Some(squad) = self.state.squad_mut(callsign) {
                    if squad.is_effective() {
                        squad.ammo = SQUAD_FULL_AMMO;
                        delivered = true;
                    }
                }
                if delivered {
                    self.state.radio(
                        callsign.name(),
                        "Resupply received. Ammo is back to full.",
                    );
                }
            }
            EventAction::DustoffArrive => {
                let lz = self.state.viper_site();
                let mut landed = false;
                if let (Some(lz), Some(squad)) = (lz, self.state.squad_mut(Callsign::Dustoff)) {
                    if squad.status == SquadStatus::Inbound {
                        squad.pos = lz;
                        landed = true;
                    }
                }
                if landed {
                    self.state
                        .radio("DUSTOFF", "On the deck at the LZ. Loading survivors now.");
                    let fire_time = self.state.clock.minutes + DUSTOFF_TRANSIT_MIN;
                    self.state
                        .scheduler
                        .schedule(fire_time, EventAction::DustoffReturn);
                }
            }
            EventAction::DustoffReturn => {
                let mut home = false;
                if let Some(squad) = self.state.squad_mut(Callsign::Dustoff) {
                    if squad.status == SquadStatus::Inbound {
                        squad.pos = DUSTOFF_BASE;
                        squad.status = SquadStatus::Standby;
                        home = true;
                    }
                }
                if home {
                    self.state.extraction_done = true;
                    let survivors = self.state.viper_survivors;
                    self.state.radio_urgent(
                        "DUSTOFF",
                        format!(
                            "Wheels down at base. {survivors} VIPER survivors aboard, \
                             extraction complete."
                        ),
                    );
                }
            }
            EventAction::ScriptedMessage { sender, text } => {
                self.state.radio(&sender, text);
            }
        }
    }
}

impl Default for MissionEngine {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}
