//! Multi-pattern tokenizer built on a single DFA.
//!
//! All token patterns are parsed into one arena and alternated into a shared
//! start state. Each accept state remembers which pattern it finishes; when a
//! DFA state covers several, the pattern listed first wins. Tokenizing takes
//! the longest match at the cursor each time.
//!
//! Tokens carry 1-based line and column numbers. The line counter only moves
//! when the pattern designated with [`Lexer::newline`] matches; every other
//! token advances the column by its length.

use log::debug;

use crate::automaton::{determinize, Dfa, StateId};
use crate::config::Config;
use crate::regexp::{parse_fragment, FragmentBuilder};
use crate::Error;

/// A matched slice of the input, `start..end`, and the pattern that matched.
/// `line` and `col` locate `start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub pattern: usize,
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub col: usize,
}

impl Token {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// No pattern produces a non-empty token at `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no token matches at line {line}, column {col} (position {position})")]
pub struct LexError {
    pub position: usize,
    pub line: usize,
    pub col: usize,
}

/// Tokenizer for a fixed, ordered list of patterns.
#[derive(Clone, Debug)]
pub struct Lexer {
    dfa: Dfa,
    patterns: usize,
    ignored: Vec<usize>,
    newline: Option<usize>,
}

impl Lexer {
    pub fn new<P: AsRef<[u8]>>(patterns: &[P]) -> Result<Self, Error> {
        Self::with_config(patterns, &Config::default())
    }

    pub fn with_config<P: AsRef<[u8]>>(patterns: &[P], config: &Config) -> Result<Self, Error> {
        if patterns.is_empty() {
            return Err(Error::NoPatterns);
        }

        let mut builder = FragmentBuilder::new();
        let mut start: Option<StateId> = None;
        let mut tagged: Vec<(StateId, usize)> = Vec::new();

        for (index, pattern) in patterns.iter().enumerate() {
            let fragment = parse_fragment(
                pattern.as_ref(),
                &mut builder,
                config.get_dot_matches_newline(),
            )
            .map_err(|source| Error::Pattern { index, source })?;

            tagged.extend(fragment.accepts.iter().map(|&s| (s, index)));
            match start {
                None => start = Some(fragment.start),
                Some(shared) => {
                    if fragment.is_nullable() {
                        tagged.push((shared, index));
                    }
                    builder.merge_entry(shared, fragment.start);
                }
            }
        }

        let Some(start) = start else {
            return Err(Error::NoPatterns);
        };
        let nfa = builder.finish_tagged(start, tagged);
        let dfa = determinize(&nfa, config.get_state_limit())?;
        debug!(
            "lexer: {} patterns, {} NFA states, {} DFA states",
            patterns.len(),
            nfa.len(),
            dfa.len()
        );

        Ok(Self {
            dfa,
            patterns: patterns.len(),
            ignored: Vec::new(),
            newline: None,
        })
    }

    /// Drop tokens of `pattern` from the output. Out-of-range indices are
    /// ignored.
    #[must_use]
    pub fn ignore(mut self, pattern: usize) -> Self {
        if pattern < self.patterns && !self.ignored.contains(&pattern) {
            self.ignored.push(pattern);
        }
        self
    }

    /// Treat matches of `pattern` as line breaks. Out-of-range indices are
    /// ignored.
    #[must_use]
    pub fn newline(mut self, pattern: usize) -> Self {
        if pattern < self.patterns {
            self.newline = Some(pattern);
        }
        self
    }

    pub fn dfa(&self) -> &Dfa {
        &self.dfa
    }

    /// Number of patterns the lexer was built from.
    pub fn pattern_count(&self) -> usize {
        self.patterns
    }

    /// Split `input` into tokens by maximal munch.
    pub fn tokenize(&self, input: impl AsRef<[u8]>) -> Result<Vec<Token>, LexError> {
        let input = input.as_ref();
        let mut tokens = Vec::new();
        let mut pos = 0;
        let mut line = 1;
        let mut col = 1;

        while pos < input.len() {
            match self.dfa.munch(&input[pos..]) {
                Some((len, pattern)) if len > 0 => {
                    if !self.ignored.contains(&pattern) {
                        tokens.push(Token {
                            pattern,
                            start: pos,
                            end: pos + len,
                            line,
                            col,
                        });
                    }
                    if self.newline == Some(pattern) {
                        line += 1;
                        col = 1;
                    } else {
                        col += len;
                    }
                    pos += len;
                }
                _ => {
                    return Err(LexError {
                        position: pos,
                        line,
                        col,
                    })
                }
            }
        }
        Ok(tokens)
    }
}
