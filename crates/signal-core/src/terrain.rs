//! Terrain layout and traversal delays.

use serde::{Deserialize, Serialize};

use crate::types::GridPos;

/// Ground cover for a map cell. Rough ground costs a squad extra minutes
/// of delay before each movement step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terrain {
    #[default]
    Open,
    Village,
    Marsh,
    Forest,
}

impl Terrain {
    /// Ticks a squad waits before stepping out of this terrain.
    pub fn delay_ticks(&self) -> u32 {
        match self {
            Terrain::Open => 0,
            Terrain::Village | Terrain::Marsh => 1,
            Terrain::Forest => 2,
        }
    }
}

/// Terrain by [row][col]. The western approach is forested, the village
/// sits on the north trail, and marshland follows the river in the south.
const TERRAIN_MAP: [[Terrain; 8]; 8] = {
    use Terrain::{Forest as F, Marsh as M, Open as O, Village as V};
    [
        [F, F, F, O, O, O, O, O],
        [F, F, F, V, O, O, O, O],
        [F, F, F, O, O, O, O, O],
        [F, F, O, O, O, O, O, O],
        [F, F, F, F, O, O, O, O],
        [F, F, O, O, O, O, O, O],
        [O, O, M, M, M, O, O, O],
        [O, O, O, M, M, O, O, O],
    ]
};

/// Terrain at a map cell. Off-board lookups read as open ground.
pub fn terrain_at(pos: GridPos) -> Terrain {
    if !pos.in_bounds() {
        return Terrain::Open;
    }
    TERRAIN_MAP[pos.row as usize][pos.col as usize]
}
