//! Verbosity-gated console output.
//!
//! The gate decides whether a message is emitted given the configured
//! threshold; it also formats the timed progress lines the solver
//! front-end prints while long calculations run.

use std::io::{self, Write as _};
use std::time::Instant;

/// Width reserved for a timed message before its `Done!` suffix.
const TIMED_COLUMN: usize = 60;

/// Verbosity levels, lowest first.
///
/// A message is emitted when the configured level is at or above the
/// message's urgency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum OutputLevel {
    /// Nothing at all.
    Silent,
    /// Only final solutions.
    Solution,
    /// Normal operation: prompts, notices, results.
    Basic,
    /// Progress details and substeps.
    Detailed,
}

/// Decides whether messages are emitted and formats timed progress.
#[derive(Debug)]
pub struct OutputGate {
    level: OutputLevel,
    last_timed: Option<Instant>,
}

impl OutputGate {
    /// Creates a gate with the given threshold.
    #[must_use]
    pub fn new(level: OutputLevel) -> Self {
        Self {
            level,
            last_timed: None,
        }
    }

    /// Returns the configured threshold.
    #[must_use]
    pub const fn level(&self) -> OutputLevel {
        self.level
    }

    /// Sets the threshold.
    pub fn set_level(&mut self, level: OutputLevel) {
        self.level = level;
    }

    /// Returns whether a message at `urgency` would be emitted.
    #[must_use]
    pub fn should_emit(&self, urgency: OutputLevel) -> bool {
        self.level >= urgency
    }

    /// Emits a simple message line.
    pub fn message(&self, text: &str, urgency: OutputLevel) {
        self.message_indented(text, urgency, 0);
    }

    /// Emits a message line indented by `indent` steps.
    pub fn message_indented(&self, text: &str, urgency: OutputLevel, indent: usize) {
        if self.should_emit(urgency) {
            println!("{}{text}", " ".repeat(indent * 2));
        }
    }

    /// Starts a timed progress message.
    ///
    /// Finishes a still-open timed message first, then prints the new
    /// one left-aligned so the eventual `Done!` suffix lines up.
    pub fn timed(&mut self, text: &str, urgency: OutputLevel) {
        if self.last_timed.is_some() {
            self.finish_timed(urgency);
        }
        self.last_timed = Some(Instant::now());
        if self.should_emit(urgency) {
            print!("{text:<width$}", width = TIMED_COLUMN);
            let _ = io::stdout().flush();
        }
    }

    /// Terminates the open timed message with its elapsed time.
    pub fn finish_timed(&mut self, urgency: OutputLevel) {
        if let Some(started) = self.last_timed.take() {
            if self.should_emit(urgency) {
                println!("Done! ({:>3} seconds)", started.elapsed().as_secs());
            }
        }
    }

    /// Suspends timed formatting so substeps print on their own lines.
    pub fn suspend_timed(&self, urgency: OutputLevel) {
        if self.should_emit(urgency) {
            println!();
        }
    }

    /// Resumes timed formatting after substeps.
    pub fn resume_timed(&self, urgency: OutputLevel) {
        if self.should_emit(urgency) {
            print!("{:<width$}", "", width = TIMED_COLUMN);
            let _ = io::stdout().flush();
        }
    }
}

impl Default for OutputGate {
    fn default() -> Self {
        Self::new(OutputLevel::Basic)
    }
}
