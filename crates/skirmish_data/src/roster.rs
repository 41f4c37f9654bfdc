//! The session hero roster.

use skirmish_foundation::Monster;

/// Append-only registry of leveled heroes created during a session.
///
/// The parser is the only writer; the replay encoder and the reporting
/// layer read it. Registration is idempotent per base name: asking for
/// the same hero again yields an equivalent `Monster` without creating a
/// duplicate entry, and re-registering at a different level updates the
/// existing entry in place (the player has exactly one level per hero).
#[derive(Clone, Debug, Default)]
pub struct HeroRoster {
    heroes: Vec<Monster>,
}

impl HeroRoster {
    /// Creates an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the leveled variant of a base hero and returns it.
    ///
    /// First registration appends; later calls for the same base name
    /// return the (possibly re-leveled) existing entry.
    pub fn add_leveled(&mut self, base: &Monster, level: u32) -> Monster {
        let leveled = Monster::leveled(base, level);
        if let Some(existing) = self
            .heroes
            .iter_mut()
            .find(|h| h.base_name() == base.base_name())
        {
            *existing = leveled.clone();
        } else {
            self.heroes.push(leveled.clone());
        }
        leveled
    }

    /// Returns the created heroes in order of first registration.
    #[must_use]
    pub fn heroes(&self) -> &[Monster] {
        &self.heroes
    }

    /// Returns the number of distinct heroes registered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    /// Returns whether no hero has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }
}
