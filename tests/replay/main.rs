//! Integration tests for replay token encoding.
//!
//! Decodes tokens back through base64 and JSON to pin the exact wire
//! layout the game client expects.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use proptest::prelude::*;
use serde_json::Value;

use skirmish_data::{GameData, HeroRoster, builtin};
use skirmish_foundation::{ARMY_MAX_SIZE, Army, REPLAY_EMPTY_SPOT, TOURNAMENT_LINES};
use skirmish_parser::parse_lineup_token;
use skirmish_replay::{encode_replay_at, slot_grid};

fn army(token: &str, data: &GameData) -> Army {
    let mut roster = HeroRoster::new();
    parse_lineup_token(token, data, &mut roster).unwrap()
}

fn decode(token: &str) -> Value {
    let bytes = STANDARD.decode(token).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn slots(value: &Value) -> Vec<i64> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_i64().unwrap())
        .collect()
}

#[test]
fn token_decodes_with_every_field_in_order() {
    let data = builtin::game_data();
    let token = encode_replay_at(
        &army("imp,aria:5", &data),
        &army("panda,wolf", &data),
        &data,
        1_700_000_000,
    )
    .unwrap();

    let bytes = STANDARD.decode(&token).unwrap();
    let text = String::from_utf8(bytes).unwrap();

    // The client reads fields positionally; the serialized order is
    // part of the format.
    let order = ["winner", "left", "right", "date", "title", "setup", "shero", "player", "phero"];
    let positions: Vec<usize> = order
        .iter()
        .map(|key| text.find(&format!("\"{key}\"")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["winner"], "Unknown");
    assert_eq!(value["left"], "Solution");
    assert_eq!(value["right"], "Instance");
    assert_eq!(value["title"], "Proposed Solution");
    assert_eq!(value["date"], 1_700_000_000);
}

#[test]
fn partial_army_fills_slots_reversed_with_sentinels() {
    let data = builtin::game_data();
    let token = encode_replay_at(
        &army("imp,aria:5,wolf", &data),
        &army("panda", &data),
        &data,
        0,
    )
    .unwrap();
    let value = decode(&token);

    // Solution is imp(0), aria(-2), wolf(2); reversed per line.
    let empty = i64::from(REPLAY_EMPTY_SPOT);
    let line = [2, -2, 0, empty, empty, empty];
    let setup = slots(&value["setup"]);
    assert_eq!(setup.len(), ARMY_MAX_SIZE * TOURNAMENT_LINES);
    for l in 0..TOURNAMENT_LINES {
        assert_eq!(&setup[l * ARMY_MAX_SIZE..(l + 1) * ARMY_MAX_SIZE], line);
    }

    // Target is panda(3); same grid shape on the player side.
    let player = slots(&value["player"]);
    assert_eq!(&player[..ARMY_MAX_SIZE], [3, empty, empty, empty, empty, empty]);

    // aria is registry index 0, so shero leads with her level.
    let shero = slots(&value["shero"]);
    assert_eq!(shero, [5, 0, 0, 0, 0]);
    assert_eq!(slots(&value["phero"]), [0, 0, 0, 0, 0]);
}

#[test]
fn full_capacity_army_uses_every_slot() {
    let data = builtin::game_data();
    let token = encode_replay_at(
        &army("imp,sprite,wolf,panda,shade,ogre", &data),
        &army("titan", &data),
        &data,
        0,
    )
    .unwrap();
    let value = decode(&token);

    let setup = slots(&value["setup"]);
    let line = [5, 4, 3, 2, 1, 0];
    for l in 0..TOURNAMENT_LINES {
        assert_eq!(&setup[l * ARMY_MAX_SIZE..(l + 1) * ARMY_MAX_SIZE], line);
    }
}

proptest! {
    #[test]
    fn grid_shape_holds_for_any_army_size(size in 0usize..=ARMY_MAX_SIZE) {
        let data = builtin::game_data();
        let names = ["imp", "sprite", "wolf", "panda", "shade", "ogre"];
        let mut units = Army::new();
        for name in &names[..size] {
            units.add(data.monsters.get(name).unwrap().clone()).unwrap();
        }

        let grid = slot_grid(&units, &data);
        prop_assert_eq!(grid.len(), ARMY_MAX_SIZE * TOURNAMENT_LINES);
        for l in 0..TOURNAMENT_LINES {
            let line = &grid[l * ARMY_MAX_SIZE..(l + 1) * ARMY_MAX_SIZE];
            // Occupied slots first, then sentinels; every line identical.
            prop_assert!(line[..size].iter().all(|&s| s >= 0));
            prop_assert!(line[size..].iter().all(|&s| s == REPLAY_EMPTY_SPOT));
            prop_assert_eq!(line, &grid[..ARMY_MAX_SIZE]);
        }
    }
}
