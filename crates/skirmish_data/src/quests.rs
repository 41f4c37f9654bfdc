//! The quest database.

/// Fixed mapping from quest number to an ordered monster-name list.
///
/// Quest numbers index the table directly, matching the in-game quest
/// numbering; externally supplied and read-only.
#[derive(Clone, Debug, Default)]
pub struct QuestDb {
    lineups: Vec<Vec<String>>,
}

impl QuestDb {
    /// Creates an empty database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the lineup for the next quest number.
    pub fn register(&mut self, lineup: Vec<String>) {
        self.lineups.push(lineup);
    }

    /// Returns the canonical monster names for a quest number.
    #[must_use]
    pub fn lineup(&self, number: usize) -> Option<&[String]> {
        self.lineups.get(number).map(Vec::as_slice)
    }

    /// Returns the number of quests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lineups.len()
    }

    /// Returns whether the database is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lineups.is_empty()
    }
}

impl FromIterator<Vec<String>> for QuestDb {
    fn from_iter<T: IntoIterator<Item = Vec<String>>>(iter: T) -> Self {
        let mut db = Self::new();
        for lineup in iter {
            db.register(lineup);
        }
        db
    }
}
