//! A small built-in dataset so the CLI runs out of the box.
//!
//! Real deployments load the full game tables; the binary and most
//! tests only need a representative slice. Names are already lowercase
//! because the console lowercases all input before lookup.

use skirmish_foundation::{Monster, Rarity};

use crate::{GameData, HeroRegistry, MonsterDb, QuestDb};

/// Builds the built-in sample databases.
#[must_use]
pub fn game_data() -> GameData {
    GameData::new(monsters(), heroes(), quests())
}

/// The built-in canonical monster list.
#[must_use]
pub fn monsters() -> MonsterDb {
    [
        "imp", "sprite", "wolf", "panda", "shade", "ogre", "golem", "drake", "wyrm", "titan",
    ]
    .into_iter()
    .map(Monster::unit)
    .collect()
}

/// The built-in base hero templates, in replay-index order.
#[must_use]
pub fn heroes() -> HeroRegistry {
    [
        Monster::base_hero("aria", Rarity::Common),
        Monster::base_hero("brand", Rarity::Common),
        Monster::base_hero("cato", Rarity::Rare),
        Monster::base_hero("dara", Rarity::Legendary),
        Monster::base_hero("edda", Rarity::Ascended),
    ]
    .into_iter()
    .collect()
}

/// The built-in quest lineups. Quest 0 is unused, matching the in-game
/// numbering which starts at 1.
#[must_use]
pub fn quests() -> QuestDb {
    let table: &[&[&str]] = &[
        &[],
        &["imp"],
        &["imp", "sprite"],
        &["panda", "wolf"],
        &["wolf", "shade", "ogre"],
        &["golem", "golem", "drake"],
        &["drake", "wyrm", "titan", "titan"],
        &["ogre", "golem", "drake", "wyrm", "titan"],
        &["titan", "titan", "titan", "wyrm", "wyrm", "drake"],
    ];
    table
        .iter()
        .map(|lineup| lineup.iter().map(ToString::to_string).collect())
        .collect()
}
