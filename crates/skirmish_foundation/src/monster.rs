//! Game units: plain monsters and leveled heroes.

use std::fmt;

use crate::constants::HERO_LEVEL_SEPARATOR;

/// Rarity tag for a unit.
///
/// [`Rarity::NoHero`] is the sentinel marking ordinary monsters; every
/// other value marks a hero template and its level variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rarity {
    /// Not a hero at all; an ordinary monster.
    NoHero,
    /// Common hero.
    Common,
    /// Rare hero.
    Rare,
    /// Legendary hero.
    Legendary,
    /// Ascended hero.
    Ascended,
}

impl Rarity {
    /// Returns whether this rarity marks a hero.
    #[must_use]
    pub const fn is_hero(self) -> bool {
        !matches!(self, Self::NoHero)
    }
}

/// A single game unit.
///
/// Immutable once constructed. Two leveled variants of the same base
/// hero at the same level compare equal, which is what makes hero
/// registration idempotent.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Monster {
    /// Stable unique name; for leveled heroes this is `base_name:level`.
    name: String,
    /// Family name shared across a hero's level variants. Equal to
    /// `name` for ordinary monsters.
    base_name: String,
    /// Rarity tag; `NoHero` for ordinary monsters.
    rarity: Rarity,
    /// Hero level; positive for leveled heroes, 0 otherwise.
    level: u32,
}

impl Monster {
    /// Creates an ordinary (non-hero) monster.
    #[must_use]
    pub fn unit(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            base_name: name.clone(),
            name,
            rarity: Rarity::NoHero,
            level: 0,
        }
    }

    /// Creates a base hero template (unleveled).
    #[must_use]
    pub fn base_hero(base_name: impl Into<String>, rarity: Rarity) -> Self {
        let base_name = base_name.into();
        Self {
            name: base_name.clone(),
            base_name,
            rarity,
            level: 0,
        }
    }

    /// Creates the leveled variant of a base hero template.
    #[must_use]
    pub fn leveled(base: &Self, level: u32) -> Self {
        Self {
            name: format!("{}{}{}", base.base_name, HERO_LEVEL_SEPARATOR, level),
            base_name: base.base_name.clone(),
            rarity: base.rarity,
            level,
        }
    }

    /// Returns the unit's stable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit's family name.
    #[must_use]
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Returns the unit's rarity tag.
    #[must_use]
    pub const fn rarity(&self) -> Rarity {
        self.rarity
    }

    /// Returns the hero level (0 for ordinary monsters).
    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// Returns whether this unit is a hero.
    #[must_use]
    pub const fn is_hero(&self) -> bool {
        self.rarity.is_hero()
    }
}

impl fmt::Display for Monster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
