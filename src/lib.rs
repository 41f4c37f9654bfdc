//! Skirmish - army lineup input, parsing, and replay encoding
//!
//! This crate re-exports all layers of the Skirmish system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: skirmish_runtime    — Query automaton, output gate, commands, CLI
//! Layer 2: skirmish_parser     — Lineup mini-language parser
//!          skirmish_replay     — Replay token encoding, instance reporting
//! Layer 1: skirmish_data       — Static databases, session hero roster
//! Layer 0: skirmish_foundation — Core types (Monster, Army, Instance, Error)
//! ```

pub use skirmish_data as data;
pub use skirmish_foundation as foundation;
pub use skirmish_parser as parser;
pub use skirmish_replay as replay;
pub use skirmish_runtime as runtime;
