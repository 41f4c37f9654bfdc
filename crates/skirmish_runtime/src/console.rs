//! The query resolution automaton.
//!
//! Produces exactly one validated answer per [`Console::resolve`] call,
//! sourcing lines from a pre-recorded script while one is attached and
//! healthy, and from the interactive channel afterwards. The switch
//! from script to interactive happens at most once per session and is
//! permanent.

use std::io::{self, Write as _};
use std::path::Path;

use skirmish_foundation::{
    COMMENT_DELIMITER, NEGATIVE_ANSWER, POSITIVE_ANSWER, Error, Query, QueryKind, Result,
};

use crate::output::{OutputGate, OutputLevel};
use crate::script::ScriptSource;
use crate::source::{LineSource, ReadResult, RustylineSource};

/// The console automaton.
///
/// Owns the session's input state: the attached script (if any), the
/// script-mode flag, and the output gate. Generic over the interactive
/// channel so tests can drive it with in-memory sources.
pub struct Console<S: LineSource = RustylineSource> {
    interactive: S,
    script: Option<ScriptSource>,
    script_active: bool,
    echo_script: bool,
    gate: OutputGate,
}

impl Console<RustylineSource> {
    /// Creates a console reading interactively from the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the line editor fails to initialize.
    pub fn new() -> Result<Self> {
        Ok(Self::with_source(RustylineSource::new()?))
    }
}

impl<S: LineSource> Console<S> {
    /// Creates a console over the given interactive source.
    pub fn with_source(interactive: S) -> Self {
        Self {
            interactive,
            script: None,
            script_active: false,
            echo_script: false,
            gate: OutputGate::default(),
        }
    }

    /// Attaches a script file.
    ///
    /// On success all subsequent queries are answered from the script
    /// until it runs out; `echo` controls whether scripted answers are
    /// shown as if typed. Failure to open the file is not an error: a
    /// notice is printed and the session stays interactive.
    pub fn attach_script_file(&mut self, path: impl AsRef<Path>, echo: bool) {
        match ScriptSource::open(path) {
            Ok(script) => self.attach_script(script, echo),
            Err(_) => {
                self.gate.message(
                    "Could not read the script file. Switching to manual input.",
                    OutputLevel::Basic,
                );
            }
        }
    }

    /// Attaches an already-built script source.
    pub fn attach_script(&mut self, script: ScriptSource, echo: bool) {
        self.script = Some(script);
        self.script_active = true;
        self.echo_script = echo;
    }

    /// Returns whether queries are currently answered from a script.
    #[must_use]
    pub const fn script_active(&self) -> bool {
        self.script_active
    }

    /// Returns whether the session is silently consuming a script.
    ///
    /// Commands use this to skip banners that would interleave with
    /// nothing visible.
    #[must_use]
    pub const fn script_silent(&self) -> bool {
        self.script_active && !self.echo_script
    }

    /// Returns the output gate.
    #[must_use]
    pub const fn gate(&self) -> &OutputGate {
        &self.gate
    }

    /// Returns the output gate mutably.
    pub fn gate_mut(&mut self) -> &mut OutputGate {
        &mut self.gate
    }

    /// Resolves one validated answer for the given query.
    ///
    /// Loops until a line passes the query's validation; `help` as the
    /// first token prints the help text and never counts as an answer.
    /// A script line is consumed per attempt, so rejected or `help`
    /// lines advance the script in order. Once the script runs out,
    /// this and all future calls read interactively.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InputClosed`](skirmish_foundation::ErrorKind::InputClosed)
    /// if the interactive channel reaches end of input, or an I/O error
    /// from the terminal.
    pub fn resolve(&mut self, query: &Query) -> Result<String> {
        loop {
            let mut scripted = None;
            if self.script_active {
                scripted = self.script.as_mut().and_then(ScriptSource::next_line);
                if scripted.is_none() {
                    // Script exhausted; interactive for the rest of the session.
                    self.script_active = false;
                }
            }

            let raw = match scripted {
                Some(line) => line,
                None => match self.interactive.read_line(&query.prompt)? {
                    ReadResult::Line(line) => line,
                    ReadResult::Interrupted => continue,
                    ReadResult::Eof => return Err(Error::input_closed()),
                },
            };

            let input = normalize(&raw);
            let first = first_token(&input);

            if self.script_active && self.echo_script {
                print!("{}", query.prompt);
                println!("{input}");
                let _ = io::stdout().flush();
            }

            if first == "help" {
                self.gate.message(&query.help, OutputLevel::Basic);
                continue;
            }

            match query.kind {
                QueryKind::Question => {
                    if first == POSITIVE_ANSWER || first == NEGATIVE_ANSWER {
                        return Ok(first.to_string());
                    }
                }
                QueryKind::Integer => {
                    if first.parse::<i64>().is_ok() {
                        return Ok(first.to_string());
                    }
                }
                QueryKind::Raw => return Ok(input),
                QueryKind::RawFirst => return Ok(first.to_string()),
            }
        }
    }

    /// Asks a yes/no question.
    ///
    /// When the gate would suppress output at `urgency`, the default is
    /// returned without consuming any input; otherwise a
    /// [`QueryKind::Question`] query runs with the yes/no literals
    /// appended to the prompt.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Console::resolve`].
    pub fn ask_yes_no(
        &mut self,
        question: &str,
        help: &str,
        urgency: OutputLevel,
        default: bool,
    ) -> Result<bool> {
        if !self.gate.should_emit(urgency) {
            return Ok(default);
        }
        let prompt = format!("{question} ({POSITIVE_ANSWER}/{NEGATIVE_ANSWER}): ");
        let answer = self.resolve(&Query::new(prompt, help, QueryKind::Question))?;
        Ok(answer == POSITIVE_ANSWER)
    }

    /// Waits for enter before returning, so a double-clicked run does
    /// not close its window on completion.
    pub fn halt_execution(&mut self) {
        if self.gate.should_emit(OutputLevel::Basic) {
            let _ = self.interactive.read_line("Press enter to exit...");
        }
    }
}

/// Normalizes one raw input line: strips the trailing comment, folds to
/// lowercase.
#[must_use]
pub fn normalize(line: &str) -> String {
    let stripped = line.split(COMMENT_DELIMITER).next().unwrap_or(line);
    stripped.to_lowercase()
}

/// Extracts the first whitespace-delimited token of a normalized line.
#[must_use]
pub fn first_token(input: &str) -> &str {
    input.split_whitespace().next().unwrap_or("")
}
