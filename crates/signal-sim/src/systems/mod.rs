//! Per-tick simulation systems, run in a fixed order by the engine:
//! movement, then discovery, then combat upkeep.

pub mod combat;
pub mod discovery;
pub mod movement;
pub mod snapshot;
