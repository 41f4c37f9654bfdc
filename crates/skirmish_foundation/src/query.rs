//! Query specifications for the console automaton.

/// Validation shape requested for one console answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryKind {
    /// Accept only the configured yes/no literals; returned verbatim.
    Question,
    /// Accept only a token that fully parses as a base-10 integer.
    ///
    /// The answer is returned as the *unparsed* token; consumers re-parse
    /// it. This is a contract, not an oversight: the automaton validates
    /// shape, it does not convert.
    Integer,
    /// Accept any line; returns the full normalized line.
    Raw,
    /// Accept any line; returns only the first whitespace token.
    RawFirst,
}

/// A request to resolve one validated answer.
#[derive(Clone, Debug)]
pub struct Query {
    /// Prompt shown to the user (or echoed while replaying a script).
    pub prompt: String,
    /// Help text shown when the user answers `help`.
    pub help: String,
    /// Requested validation shape.
    pub kind: QueryKind,
}

impl Query {
    /// Creates a new query specification.
    #[must_use]
    pub fn new(prompt: impl Into<String>, help: impl Into<String>, kind: QueryKind) -> Self {
        Self {
            prompt: prompt.into(),
            help: help.into(),
            kind,
        }
    }
}
