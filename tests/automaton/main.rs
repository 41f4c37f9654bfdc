//! Integration tests for the query resolution automaton.
//!
//! Covers the validation guarantees per query kind, the help handling,
//! and the one-way script-to-interactive fallback.

mod resolution_tests;
mod script_tests;

use skirmish_foundation::Result;
use skirmish_runtime::{LineSource, ReadResult};

/// Interactive source that replays fixed lines, then EOF.
pub struct FakeSource {
    lines: Vec<String>,
    index: usize,
}

impl FakeSource {
    pub fn new<I, T>(lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            index: 0,
        }
    }
}

impl LineSource for FakeSource {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        if self.index < self.lines.len() {
            let line = self.lines[self.index].clone();
            self.index += 1;
            Ok(ReadResult::Line(line))
        } else {
            Ok(ReadResult::Eof)
        }
    }
}
