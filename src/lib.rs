//! bytere: compile regular expressions over a byte alphabet into DFAs.
//!
//! A pattern goes through three stages:
//!
//! 1. the recursive-descent parser in [`regexp`] builds an epsilon-free NFA
//!    directly, splicing copied edges instead of adding epsilon transitions
//! 2. [`automaton::determinize`] runs subset construction
//! 3. the resulting [`Dfa`] answers membership queries
//!
//! ```
//! let dfa = bytere::compile("([a-cd]*|az?)").unwrap();
//! assert!(dfa.is_match("bcda"));
//! assert!(dfa.is_match("az"));
//! assert!(!dfa.is_match("azz"));
//! ```

pub mod automaton;
mod config;
mod lexer;
pub mod regexp;

#[cfg(test)]
mod regexp_samples;

use log::debug;
use thiserror::Error;

pub use automaton::{Dfa, DfaStateId, Nfa, StateLimitExceeded, TransitionRow};
pub use config::Config;
pub use lexer::{LexError, Lexer, Token};
pub use regexp::{ParseError, ParseErrorKind};

/// Errors that can occur while compiling patterns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A lexer pattern failed to parse.
    #[error("pattern {index}: {source}")]
    Pattern {
        index: usize,
        #[source]
        source: ParseError,
    },
    #[error("no patterns given")]
    NoPatterns,
    #[error(transparent)]
    TooManyStates(#[from] StateLimitExceeded),
}

impl Error {
    /// Offset into the offending pattern, for parse failures.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Parse(e) | Error::Pattern { source: e, .. } => Some(e.position),
            _ => None,
        }
    }
}

/// Compiles patterns with a fixed `Config`.
///
/// Each call to [`Compiler::compile`] works on its own fresh state arena, so
/// one compiler can be reused freely.
#[derive(Clone, Copy, Debug, Default)]
pub struct Compiler {
    config: Config,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse `pattern` into an NFA without determinizing it.
    pub fn parse(&self, pattern: impl AsRef<[u8]>) -> Result<Nfa, ParseError> {
        regexp::parse(pattern, &self.config)
    }

    /// Compile `pattern` into a DFA.
    pub fn compile(&self, pattern: impl AsRef<[u8]>) -> Result<Dfa, Error> {
        let pattern = pattern.as_ref();
        let nfa = self.parse(pattern)?;
        debug!(
            "parsed {:?}: {} NFA states",
            pattern.escape_ascii().to_string(),
            nfa.len()
        );

        let dfa = automaton::determinize(&nfa, self.config.get_state_limit())?;
        debug!(
            "compiled {:?}: {} DFA states, {} accepting",
            pattern.escape_ascii().to_string(),
            dfa.len(),
            dfa.accept_states().count()
        );
        Ok(dfa)
    }
}

/// Compile `pattern` with the default configuration.
pub fn compile(pattern: impl AsRef<[u8]>) -> Result<Dfa, Error> {
    Compiler::new().compile(pattern)
}

/// Run `dfa` over all of `input`. Rejection is an ordinary `false`.
pub fn run(dfa: &Dfa, input: impl AsRef<[u8]>) -> bool {
    dfa.is_match(input)
}
