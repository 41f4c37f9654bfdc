//! Replay token encoding.
//!
//! The game client's tournament replay importer takes a base64-encoded
//! JSON object whose fields are positional, not named: the slot grid
//! repeats each army across [`TOURNAMENT_LINES`] identical lines in
//! reversed unit order, ordinary units are canonical monster indices,
//! and heroes are encoded as `-(registry_index + 2)`.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use serde::Serialize;

use skirmish_data::{GameData, HeroRegistry};
use skirmish_foundation::{
    ARMY_MAX_SIZE, Army, Error, ErrorKind, Monster, REPLAY_EMPTY_SPOT, Result, TOURNAMENT_LINES,
};

/// The JSON payload behind a replay token.
///
/// Field order matters to the game client and must stay exactly as
/// declared; `serde_json` serializes struct fields in declaration order.
#[derive(Debug, Serialize)]
struct ReplayPayload {
    winner: &'static str,
    left: &'static str,
    right: &'static str,
    date: i64,
    title: &'static str,
    setup: Vec<i32>,
    shero: Vec<u32>,
    player: Vec<i32>,
    phero: Vec<u32>,
}

/// Encodes a proposed solution and its target into a replay token.
///
/// Deterministic for fixed armies and databases except for the embedded
/// timestamp; see [`encode_replay_at`] for the injectable-date variant.
///
/// # Errors
///
/// Returns [`ErrorKind::Encode`] if JSON serialization fails.
pub fn encode_replay(solution: &Army, target: &Army, data: &GameData) -> Result<String> {
    encode_replay_at(solution, target, data, Utc::now().timestamp())
}

/// Encodes a replay token with an explicit unix timestamp.
///
/// # Errors
///
/// Returns [`ErrorKind::Encode`] if JSON serialization fails.
pub fn encode_replay_at(
    solution: &Army,
    target: &Army,
    data: &GameData,
    date: i64,
) -> Result<String> {
    let payload = ReplayPayload {
        winner: "Unknown",
        left: "Solution",
        right: "Instance",
        date,
        title: "Proposed Solution",
        setup: slot_grid(solution, data),
        shero: hero_levels(solution, &data.heroes),
        player: slot_grid(target, data),
        phero: hero_levels(target, &data.heroes),
    };

    let json = serde_json::to_vec(&payload)
        .map_err(|e| Error::new(ErrorKind::Encode(e.to_string())))?;
    Ok(STANDARD.encode(json))
}

/// Builds the flat slot grid for one army.
///
/// The grid spans `ARMY_MAX_SIZE * TOURNAMENT_LINES` slots; each line
/// holds the same army back-filled in reversed order, with
/// [`REPLAY_EMPTY_SPOT`] in the unused slots. Pure index math, no I/O.
#[must_use]
pub fn slot_grid(army: &Army, data: &GameData) -> Vec<i32> {
    let units = army.units();
    (0..ARMY_MAX_SIZE * TOURNAMENT_LINES)
        .map(|i| {
            let line_pos = i % ARMY_MAX_SIZE;
            if line_pos < units.len() {
                slot_id(&units[units.len() - line_pos - 1], data)
            } else {
                REPLAY_EMPTY_SPOT
            }
        })
        .collect()
}

/// Returns the game client's numeric id for one unit.
///
/// Non-negative canonical index for ordinary monsters,
/// `-(hero_index + 2)` for heroes (matched by base name, level ignored).
/// A unit absent from the tables encodes as the empty-slot sentinel; the
/// parser never produces such a unit.
fn slot_id(unit: &Monster, data: &GameData) -> i32 {
    if unit.is_hero() {
        data.heroes
            .index_of(unit.base_name())
            .and_then(|i| i32::try_from(i).ok())
            .map_or(REPLAY_EMPTY_SPOT, |i| -(i + 2))
    } else {
        data.monsters
            .index_of(unit.name())
            .and_then(|i| i32::try_from(i).ok())
            .unwrap_or(REPLAY_EMPTY_SPOT)
    }
}

/// Builds the per-template hero level vector for one army.
///
/// One entry per registry template, in registry order; the level of the
/// first army member with that base name, else 0.
#[must_use]
pub fn hero_levels(army: &Army, heroes: &HeroRegistry) -> Vec<u32> {
    heroes
        .templates()
        .iter()
        .map(|template| {
            army.units()
                .iter()
                .find(|unit| unit.is_hero() && unit.base_name() == template.base_name())
                .map_or(0, Monster::level)
        })
        .collect()
}
