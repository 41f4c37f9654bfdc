//! Line source abstraction for the interactive channel.
//!
//! This module provides a trait-based abstraction over the interactive
//! input, allowing the console automaton to use rustyline while staying
//! testable with in-memory fakes.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use skirmish_foundation::{Error, ErrorKind, Result};

/// Result of reading a line from the interactive channel.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C; the current query restarts.
    Interrupted,
    /// User pressed Ctrl+D (EOF); the channel is closed.
    Eof,
}

/// Abstraction over the interactive input channel.
pub trait LineSource {
    /// Reads one line, showing the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;
}

/// Interactive line source backed by rustyline.
pub struct RustylineSource {
    editor: DefaultEditor,
}

impl RustylineSource {
    /// Creates a new rustyline-backed source.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let editor =
            DefaultEditor::new().map_err(|e| Error::new(ErrorKind::Io(e.to_string())))?;
        Ok(Self { editor })
    }
}

impl LineSource for RustylineSource {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::Io(e.to_string()))),
        }
    }
}
