//! Battle replay encoding and instance reporting.
//!
//! The [`encode`] module maps structured armies into the game client's
//! order- and index-sensitive replay format and base64-encodes it; the
//! [`report`] module formats a solved or unsolved
//! [`Instance`](skirmish_foundation::Instance) as human text or as a
//! machine-readable JSON record. Only the producing side of the replay
//! format is implemented; the game client does the decoding.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod encode;
pub mod report;

pub use encode::{encode_replay, encode_replay_at, hero_levels, slot_grid};
pub use report::{instance_record, instance_report};
