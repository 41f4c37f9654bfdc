//! Error types for the Skirmish lineup tools.
//!
//! Uses `thiserror` for ergonomic error definition.
//!
//! Parse failures carry their kind so callers and tests can distinguish,
//! e.g., an unknown monster from an unknown hero, but the usual recovery
//! for all of them is the same: re-prompt the whole line.

use thiserror::Error;

/// A specialized `Result` type for Skirmish operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Skirmish operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an unknown-monster parse error.
    #[must_use]
    pub fn unknown_monster(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownMonster(name.into()))
    }

    /// Creates an unknown-hero parse error.
    #[must_use]
    pub fn unknown_hero(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownHero(name.into()))
    }

    /// Creates an invalid hero level parse error.
    #[must_use]
    pub fn invalid_level(token: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidLevel(token.into()))
    }

    /// Creates a malformed quest reference parse error.
    #[must_use]
    pub fn invalid_quest_ref(token: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidQuestRef(token.into()))
    }

    /// Creates an out-of-range quest number parse error.
    #[must_use]
    pub fn unknown_quest(number: usize) -> Self {
        Self::new(ErrorKind::UnknownQuest(number))
    }

    /// Creates an army-capacity error.
    #[must_use]
    pub fn army_full(capacity: usize) -> Self {
        Self::new(ErrorKind::ArmyFull { capacity })
    }

    /// Creates an input-closed error (interactive channel hit EOF).
    #[must_use]
    pub fn input_closed() -> Self {
        Self::new(ErrorKind::InputClosed)
    }

    /// Returns whether this error is a lineup parse failure.
    ///
    /// Parse failures are recovered by re-prompting; everything else
    /// terminates the current command.
    #[must_use]
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::UnknownMonster(_)
                | ErrorKind::UnknownHero(_)
                | ErrorKind::InvalidLevel(_)
                | ErrorKind::InvalidQuestRef(_)
                | ErrorKind::UnknownQuest(_)
                | ErrorKind::ArmyFull { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(e.to_string()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A lineup token named a monster that is not in the database.
    #[error("unknown monster: {0}")]
    UnknownMonster(String),

    /// A hero token named a base hero that is not in the registry.
    #[error("unknown hero: {0}")]
    UnknownHero(String),

    /// A hero token carried a level that is not a non-negative integer.
    #[error("invalid hero level: {0}")]
    InvalidLevel(String),

    /// A quest reference did not match `q<number>-<tier>` with a usable tier.
    #[error("invalid quest reference: {0}")]
    InvalidQuestRef(String),

    /// A quest reference named a quest number outside the database.
    #[error("unknown quest: {0}")]
    UnknownQuest(usize),

    /// An army was already at capacity when a unit was added.
    #[error("army is full (capacity {capacity})")]
    ArmyFull {
        /// The army's fixed capacity.
        capacity: usize,
    },

    /// The interactive channel reached end of input.
    #[error("interactive input closed")]
    InputClosed,

    /// An I/O operation failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Serializing a replay or record failed.
    #[error("encode error: {0}")]
    Encode(String),
}
