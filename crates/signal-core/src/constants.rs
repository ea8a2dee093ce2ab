//! Mission tuning parameters.
//!
//! The scenario timings pin most of these: a squad's first MOVE step lands
//! on the 3rd tick out of forest, artillery splashes within 3 minutes of
//! the request, and a full DUSTOFF round trip completes inside 15 minutes.
//! See DESIGN.md for the derivation.

use crate::types::GridPos;

/// Map columns, labeled A through H.
pub const GRID_COLS: i32 = 8;

/// Map rows, labeled 1 through 8.
pub const GRID_ROWS: i32 = 8;

pub const MINUTES_PER_DAY: u32 = 1440;

/// Mission start: 06:00.
pub const MISSION_START_MINUTES: u32 = 360;

// --- Spawns ---

/// ALPHA insertion point, western treeline.
pub const ALPHA_SPAWN: GridPos = GridPos::new(1, 1);

/// BRAVO insertion point, southwest trail.
pub const BRAVO_SPAWN: GridPos = GridPos::new(1, 5);

/// DUSTOFF strip-alert pad.
pub const DUSTOFF_BASE: GridPos = GridPos::new(0, 7);

// --- Squads ---

pub const SQUAD_FULL_STRENGTH: i32 = 10;
pub const SQUAD_FULL_AMMO: i32 = 6;

// --- Support assets ---

/// Fire missions available per mission.
pub const FIRE_SUPPORT_MISSIONS: u32 = 2;

/// Air strikes available per mission.
pub const AIR_STRIKES: u32 = 1;

/// Minutes between a fire mission request and splash.
pub const FIRE_SUPPORT_DELAY_MIN: u32 = 2;

/// Minutes between an air strike request and bombs on target.
pub const AIR_STRIKE_DELAY_MIN: u32 = 2;

/// Manhattan radius around the target cell hit by artillery or air.
pub const BLAST_RADIUS: i32 = 1;

pub const FIRE_SUPPORT_DAMAGE_MIN: i32 = 4;
pub const FIRE_SUPPORT_DAMAGE_MAX: i32 = 7;
pub const AIR_STRIKE_DAMAGE_MIN: i32 = 6;
pub const AIR_STRIKE_DAMAGE_MAX: i32 = 9;

// --- Logistics ---

/// Minutes until an ammo drop reaches the requesting squad.
pub const RESUPPLY_DELAY_MIN: u32 = 3;

/// Minutes for DUSTOFF to cover one transit leg (base to LZ, or back).
pub const DUSTOFF_TRANSIT_MIN: u32 = 6;

// --- Sensors / combat ---

/// Manhattan range at which a squad reveals POIs and enemies.
pub const DISCOVERY_RADIUS: i32 = 1;

/// Manhattan range at which a squad can take an enemy under fire.
pub const ENGAGEMENT_RANGE: i32 = 2;

/// Squad damage per exchange. The minimum is never zero, so combined
/// strength strictly decreases every resolution.
pub const SQUAD_DAMAGE_MIN: i32 = 1;
pub const SQUAD_DAMAGE_MAX: i32 = 3;

pub const ENEMY_DAMAGE_MIN: i32 = 0;
pub const ENEMY_DAMAGE_MAX: i32 = 2;

/// Squad damage multiplier when firing from a prepared ambush.
pub const AMBUSH_DAMAGE_MULTIPLIER: i32 = 2;

// --- Objective ---

/// Survivors recovered at the VIPER crash site.
pub const VIPER_SURVIVOR_COUNT: u32 = 3;
