//! Combat resolution: direct firefights, per-tick engagements, and
//! area-effect support fire.
//!
//! Every exchange destroys strength on at least one side, so a firefight
//! between two finite forces always terminates. Squad fire consumes ammo;
//! a dry squad fights on at reduced effect.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use signal_core::constants::{
    AMBUSH_DAMAGE_MULTIPLIER, BLAST_RADIUS, ENEMY_DAMAGE_MAX, ENEMY_DAMAGE_MIN,
    ENGAGEMENT_RANGE, SQUAD_DAMAGE_MAX, SQUAD_DAMAGE_MIN,
};
use signal_core::components::{Enemy, Squad};
use signal_core::enums::{Callsign, SquadStatus};
use signal_core::events::RadioMessage;
use signal_core::types::GridPos;

use crate::state::MissionState;

/// Outcome of one fire exchange between a squad and an enemy element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exchange {
    pub squad_damage: i32,
    pub enemy_damage: i32,
    pub enemy_destroyed: bool,
    pub squad_destroyed: bool,
}

/// Resolve a single exchange of fire. The squad always deals at least one
/// point of damage, so combined strength strictly decreases every round.
pub fn resolve(squad: &mut Squad, enemy: &mut Enemy, ambush: bool, rng: &mut ChaCha8Rng) -> Exchange {
    let mut squad_damage = rng.gen_range(SQUAD_DAMAGE_MIN..=SQUAD_DAMAGE_MAX);
    if ambush {
        squad_damage *= AMBUSH_DAMAGE_MULTIPLIER;
    }
    if squad.ammo <= 0 {
        // Bayonets and grenades only.
        squad_damage = (squad_damage / 2).max(1);
    } else {
        squad.ammo -= 1;
    }

    let enemy_damage = rng.gen_range(ENEMY_DAMAGE_MIN..=ENEMY_DAMAGE_MAX);

    enemy.strength = (enemy.strength - squad_damage).max(0);
    squad.strength = (squad.strength - enemy_damage).max(0);

    if enemy.strength == 0 {
        enemy.alive = false;
    }

    Exchange {
        squad_damage,
        enemy_damage,
        enemy_destroyed: enemy.strength == 0,
        squad_destroyed: squad.strength == 0,
    }
}

/// Index of the closest living, revealed enemy within engagement range of
/// `from`, ties broken by spawn order.
pub fn nearest_engageable_enemy(state: &MissionState, from: GridPos) -> Option<usize> {
    state
        .enemies
        .iter()
        .enumerate()
        .filter(|(_, e)| e.alive && e.revealed && from.distance_to(&e.pos) <= ENGAGEMENT_RANGE)
        .min_by_key(|(idx, e)| (from.distance_to(&e.pos), *idx))
        .map(|(idx, _)| idx)
}

/// Run one round of fighting between a squad and the enemy at `idx`,
/// logging the results over the radio.
pub fn fight(
    state: &mut MissionState,
    rng: &mut ChaCha8Rng,
    callsign: Callsign,
    idx: usize,
    ambush: bool,
) {
    let now = state.clock.minutes;
    let mut messages: Vec<RadioMessage> = Vec::new();

    let Some(squad) = state.squads.get_mut(&callsign) else {
        return;
    };
    let Some(enemy) = state.enemies.get_mut(idx) else {
        return;
    };

    let had_ammo = squad.ammo > 0;
    let exchange = resolve(squad, enemy, ambush, rng);

    if had_ammo && squad.ammo == 0 {
        messages.push(RadioMessage::new(
            now,
            callsign.name(),
            "Winchester! We are black on ammo. Request resupply.",
        ));
    }

    if exchange.enemy_destroyed {
        squad.status = SquadStatus::Idle;
        messages.push(RadioMessage::new(
            now,
            callsign.name(),
            "Enemy element neutralized. Area secure.",
        ));
    }

    if exchange.squad_destroyed {
        squad.status = SquadStatus::Destroyed;
        messages.push(RadioMessage::urgent(
            now,
            "PAPA BEAR",
            format!("{} is down. No further contact.", callsign.name()),
        ));
    }

    state.log.extend(messages);
}

/// Per-tick upkeep: engaged squads trade fire with the nearest enemy in
/// range, or stand down when the area is clear.
pub fn run(state: &mut MissionState, rng: &mut ChaCha8Rng) {
    for callsign in [Callsign::Alpha, Callsign::Bravo] {
        let Some(squad) = state.squad(callsign) else {
            continue;
        };
        if squad.status != SquadStatus::Engaged || !squad.is_effective() {
            continue;
        }
        let pos = squad.pos;

        match nearest_engageable_enemy(state, pos) {
            Some(idx) => fight(state, rng, callsign, idx, false),
            None => {
                if let Some(squad) = state.squad_mut(callsign) {
                    squad.status = SquadStatus::Idle;
                }
                state.radio(callsign.name(), "No contact. Standing down.");
            }
        }
    }
}

/// Apply support fire damage to every living enemy within the blast
/// radius of `target`. Returns how many elements were hit. Hits reveal
/// the enemy; kills are reported over the radio.
pub fn area_damage(
    state: &mut MissionState,
    rng: &mut ChaCha8Rng,
    target: GridPos,
    damage: std::ops::RangeInclusive<i32>,
) -> usize {
    let now = state.clock.minutes;
    let mut hits = 0;
    let mut messages: Vec<RadioMessage> = Vec::new();

    for enemy in &mut state.enemies {
        if !enemy.alive || target.distance_to(&enemy.pos) > BLAST_RADIUS {
            continue;
        }
        hits += 1;
        enemy.revealed = true;
        let roll = rng.gen_range(damage.clone());
        enemy.strength = (enemy.strength - roll).max(0);
        if enemy.strength == 0 {
            enemy.alive = false;
            messages.push(RadioMessage::new(
                now,
                "PAPA BEAR",
                format!(
                    "Recon reports enemy element at {} destroyed by the strike.",
                    enemy.pos.label()
                ),
            ));
        }
    }

    state.log.extend(messages);
    hits
}
