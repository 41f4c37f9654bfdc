//! Pre-recorded answer scripts.

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::Path;

/// A finite sequence of pre-recorded answer lines.
///
/// One logical answer per line; trailing `//` comments are stripped
/// later by the console's normalization pass, so scripts can annotate
/// themselves. Exhaustion is not an error; the console falls back to
/// the interactive channel for the rest of the session.
#[derive(Debug)]
pub struct ScriptSource {
    lines: VecDeque<String>,
}

impl ScriptSource {
    /// Opens a script file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_lines(content.lines()))
    }

    /// Builds a script from in-memory lines (used by tests).
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Takes the next scripted line, or `None` once exhausted.
    pub fn next_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }

    /// Returns the number of remaining lines.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}
