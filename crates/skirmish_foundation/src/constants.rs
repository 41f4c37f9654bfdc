//! Shared constants for lineup syntax and the replay wire format.
//!
//! The numeric values mirror the in-game tournament format and must not
//! change independently of the game client that consumes replay tokens.

/// Maximum number of monsters in a single army.
pub const ARMY_MAX_SIZE: usize = 6;

/// Number of repeated army lines in a tournament replay slot grid.
pub const TOURNAMENT_LINES: usize = 3;

/// Slot id the game client reads as "no unit here".
pub const REPLAY_EMPTY_SPOT: i32 = -1;

/// Everything from this delimiter onward in an input line is a comment.
pub const COMMENT_DELIMITER: &str = "//";

/// Separates monsters within one lineup token, e.g. `panda,wolf`.
pub const ELEMENT_SEPARATOR: char = ',';

/// Separates a hero's base name from its level, e.g. `aria:32`.
pub const HERO_LEVEL_SEPARATOR: char = ':';

/// Prefix marking a quest reference, e.g. `q12-3`.
pub const QUEST_PREFIX: char = 'q';

/// Separates the quest number from the tier in a quest reference.
pub const QUEST_TIER_SEPARATOR: char = '-';

/// The literal accepted as "yes" for yes/no questions.
pub const POSITIVE_ANSWER: &str = "y";

/// The literal accepted as "no" for yes/no questions.
pub const NEGATIVE_ANSWER: &str = "n";
