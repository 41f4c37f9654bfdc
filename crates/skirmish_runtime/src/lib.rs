//! Console runtime for the Skirmish lineup tools.
//!
//! This crate provides:
//! - [`LineSource`] - Trait over the interactive input channel
//! - [`ScriptSource`] - Pre-recorded answer scripts with comment support
//! - [`Console`] - The query resolution automaton
//! - [`OutputGate`] - Verbosity-gated console output
//! - Input commands: hero-level collection and instance collection
//! - [`Solver`] - The boundary trait for the external solving engine
//!
//! Everything is single-threaded and synchronous: each query either
//! returns immediately or blocks on the next script or console line.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod commands;
pub mod console;
pub mod output;
pub mod script;
pub mod solver;
pub mod source;


pub use commands::HeroEntry;
pub use console::Console;
pub use output::{OutputGate, OutputLevel};
pub use script::ScriptSource;
pub use solver::{NoSolver, Solver};
pub use source::{LineSource, ReadResult, RustylineSource};
