//! Static databases and session registries for the Skirmish lineup tools.
//!
//! The static tables ([`MonsterDb`], [`HeroRegistry`], [`QuestDb`]) are
//! externally supplied and read-only once built; their iteration order
//! defines the numeric ids used by the replay format. The [`HeroRoster`]
//! is the one session-scoped, append-only registry: leveled heroes
//! created while parsing input.
//!
//! All of these are explicit values handed to the layers that need them,
//! never process-wide globals, so independent sessions can coexist.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builtin;
pub mod heroes;
pub mod monsters;
pub mod quests;
pub mod roster;

pub use heroes::HeroRegistry;
pub use monsters::MonsterDb;
pub use quests::QuestDb;
pub use roster::HeroRoster;

/// The static lookup tables, bundled for convenience.
///
/// Read-only after construction; shared by the parser, the replay
/// encoder, and the console commands.
#[derive(Clone, Debug, Default)]
pub struct GameData {
    /// Canonical ordered monster list.
    pub monsters: MonsterDb,
    /// Ordered base hero templates.
    pub heroes: HeroRegistry,
    /// Quest number to monster-name lists.
    pub quests: QuestDb,
}

impl GameData {
    /// Creates an empty data bundle.
    #[must_use]
    pub fn new(monsters: MonsterDb, heroes: HeroRegistry, quests: QuestDb) -> Self {
        Self {
            monsters,
            heroes,
            quests,
        }
    }
}
