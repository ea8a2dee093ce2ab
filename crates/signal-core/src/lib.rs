//! Core types and definitions for the SIGNAL LOST simulation.
//!
//! This crate defines the vocabulary shared across the workspace: grid
//! geometry, the mission clock, terrain, entity records, the command
//! grammar, scheduled events, radio traffic, and snapshot views. It has
//! no dependency on any runtime or rendering framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod terrain;
pub mod types;

#[cfg(test)]
mod tests;
