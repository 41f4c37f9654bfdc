//! The canonical monster database.

use std::collections::HashMap;

use skirmish_foundation::Monster;

/// Ordered canonical monster list with by-name lookup.
///
/// A monster's position in the list is its replay slot id, so insertion
/// order must match the game client's monster table.
#[derive(Clone, Debug, Default)]
pub struct MonsterDb {
    ordered: Vec<Monster>,
    by_name: HashMap<String, usize>,
}

impl MonsterDb {
    /// Creates an empty database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a monster to the canonical list.
    ///
    /// Re-registering an existing name keeps the first entry's index.
    pub fn register(&mut self, monster: Monster) {
        if self.by_name.contains_key(monster.name()) {
            return;
        }
        self.by_name
            .insert(monster.name().to_string(), self.ordered.len());
        self.ordered.push(monster);
    }

    /// Looks up a monster by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Monster> {
        self.by_name.get(name).map(|&i| &self.ordered[i])
    }

    /// Returns the replay slot id for a monster name.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Returns the canonical list in registration order.
    #[must_use]
    pub fn ordered(&self) -> &[Monster] {
        &self.ordered
    }

    /// Returns the number of registered monsters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Returns whether the database is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl FromIterator<Monster> for MonsterDb {
    fn from_iter<T: IntoIterator<Item = Monster>>(iter: T) -> Self {
        let mut db = Self::new();
        for monster in iter {
            db.register(monster);
        }
        db
    }
}
