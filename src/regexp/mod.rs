//! Pattern parsing and NFA construction.
//!
//! Supported syntax over bytes 1..=255:
//! - literal bytes; `(`, `)`, `[`, `]` must be escaped with `\`
//! - `.` matches any byte (optionally excluding `\n`)
//! - `\d` digits, `\D` non-digits, `\s` space, `\S` non-space, `\X` literal `X`
//! - `[...]` classes with `a-z` ranges, `[^...]` negated classes
//! - `(...)` grouping, `|` alternation
//! - postfix `?`, `*`, `+`

mod alphabet;
mod builder;
mod parser;

pub use alphabet::{CharPredicate, ALPHABET_MAX, ALPHABET_MIN};
pub use builder::{Fragment, FragmentBuilder};
pub use parser::{parse_fragment, ParseError, ParseErrorKind};

use crate::automaton::Nfa;
use crate::config::Config;

/// Parse `pattern` into a fresh NFA.
pub fn parse(pattern: impl AsRef<[u8]>, config: &Config) -> Result<Nfa, ParseError> {
    let mut builder = FragmentBuilder::new();
    let fragment = parse_fragment(
        pattern.as_ref(),
        &mut builder,
        config.get_dot_matches_newline(),
    )?;
    Ok(builder.finish(fragment))
}
