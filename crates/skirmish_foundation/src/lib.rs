//! Core types for the Skirmish lineup tools.
//!
//! This crate provides:
//! - [`Monster`] - A single game unit, plain or hero
//! - [`Army`] - An ordered, bounded lineup of monsters
//! - [`Instance`] - A solving problem (target army plus solution fields)
//! - [`Query`] / [`QueryKind`] - A request for one validated console answer
//! - [`Error`] - Error types shared by every layer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod army;
pub mod constants;
pub mod error;
pub mod instance;
pub mod monster;
pub mod query;

pub use army::Army;
pub use constants::{
    ARMY_MAX_SIZE, COMMENT_DELIMITER, ELEMENT_SEPARATOR, HERO_LEVEL_SEPARATOR, NEGATIVE_ANSWER,
    POSITIVE_ANSWER, QUEST_PREFIX, QUEST_TIER_SEPARATOR, REPLAY_EMPTY_SPOT, TOURNAMENT_LINES,
};
pub use error::{Error, ErrorKind, Result};
pub use instance::Instance;
pub use monster::{Monster, Rarity};
pub use query::{Query, QueryKind};
