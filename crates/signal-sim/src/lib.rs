//! Headless mission simulation for SIGNAL LOST.
//!
//! `MissionEngine` owns the mission state, interprets player commands,
//! and advances the shared world one in-game minute per tick. Completely
//! headless (no DOM, audio, or timer dependency), enabling deterministic
//! testing; the UI layer drives it and renders `MissionSnapshot`s.

pub mod engine;
pub mod scheduler;
pub mod state;
pub mod systems;
pub mod world_setup;
