//! Recursive-descent pattern parser.
//!
//! The parser builds automaton fragments as it goes; there is no syntax tree.
//! Grammar, loosest binding first:
//!
//! ```text
//! Exp     -> Concat ('|' Concat)*
//! Concat  -> Unary+
//! Unary   -> Value ('?' | '*' | '+')?
//! Value   -> '(' Exp ')' | '[' Set ']' | '.' | '\' Escape | Literal
//! Set     -> '^'? SetElem+
//! SetElem -> '\' Escape | Literal ('-' Literal)?
//! ```
//!
//! Only `(`, `)`, `[` and `]` are reserved. Every other byte, including the
//! quantifier and alternation characters, is a literal wherever a literal is
//! expected, so `a**` is `a*` followed by a literal `*`.

use thiserror::Error;

use super::alphabet::CharPredicate;
use super::builder::{Fragment, FragmentBuilder};

/// Why a pattern was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("unexpected end of pattern, expected {expected}")]
    UnexpectedEnd { expected: &'static str },
    #[error("unescaped reserved character '{}'", .0.escape_ascii())]
    Reserved(u8),
    #[error("byte 0 is outside the alphabet")]
    OutsideAlphabet,
    #[error("a range cannot end with an escape")]
    EscapedRangeEnd,
    #[error("unexpected trailing '{}'", .0.escape_ascii())]
    TrailingInput(u8),
}

/// A malformed pattern, with the 0-based byte offset where it was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at position {position}")]
pub struct ParseError {
    pub position: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(position: usize, kind: ParseErrorKind) -> Self {
        Self { position, kind }
    }
}

/// Cursor over one pattern. Lives for exactly one parse.
struct Parser<'p, 'b> {
    pattern: &'p [u8],
    pos: usize,
    builder: &'b mut FragmentBuilder,
    dot: CharPredicate,
}

impl<'p, 'b> Parser<'p, 'b> {
    #[inline]
    fn peek(&self) -> Option<u8> {
        self.pattern.get(self.pos).copied()
    }

    /// Consume `wanted` if it is next.
    #[inline]
    fn eat(&mut self, wanted: u8) -> bool {
        if self.peek() == Some(wanted) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn next_byte(&mut self, expected: &'static str) -> Result<u8, ParseError> {
        let b = self.peek().ok_or_else(|| self.unexpected_end(expected))?;
        self.pos += 1;
        Ok(b)
    }

    fn unexpected_end(&self, expected: &'static str) -> ParseError {
        ParseError::new(self.pos, ParseErrorKind::UnexpectedEnd { expected })
    }

    fn parse_exp(&mut self) -> Result<Fragment, ParseError> {
        let mut left = self.parse_concat()?;
        while self.eat(b'|') {
            let right = self.parse_concat()?;
            left = self.builder.alternate(left, right);
        }
        Ok(left)
    }

    fn parse_concat(&mut self) -> Result<Fragment, ParseError> {
        let mut left = self.parse_unary()?;
        while let Some(b) = self.peek() {
            if b == b'|' || b == b')' {
                break;
            }
            let right = self.parse_unary()?;
            left = self.builder.concatenate(left, right);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Fragment, ParseError> {
        let value = self.parse_value()?;
        let fragment = if self.eat(b'?') {
            self.builder.optional(value)
        } else if self.eat(b'*') {
            self.builder.zero_or_more(value)
        } else if self.eat(b'+') {
            self.builder.one_or_more(value)
        } else {
            value
        };
        Ok(fragment)
    }

    fn parse_value(&mut self) -> Result<Fragment, ParseError> {
        if self.eat(b'(') {
            let inner = self.parse_exp()?;
            // parse_exp only stops at ')' or the end of the pattern
            if !self.eat(b')') {
                return Err(self.unexpected_end("')'"));
            }
            return Ok(inner);
        }

        let predicate = if self.eat(b'[') {
            self.parse_set()?
        } else if self.eat(b'\\') {
            self.parse_escape()?
        } else if self.eat(b'.') {
            self.dot
        } else {
            CharPredicate::single(self.parse_literal()?)
        };
        Ok(self.builder.value(&predicate))
    }

    /// A single unreserved byte.
    fn parse_literal(&mut self) -> Result<u8, ParseError> {
        let at = self.pos;
        match self.next_byte("a character")? {
            b @ (b'(' | b')' | b'[' | b']') => {
                Err(ParseError::new(at, ParseErrorKind::Reserved(b)))
            }
            0 => Err(ParseError::new(at, ParseErrorKind::OutsideAlphabet)),
            b => Ok(b),
        }
    }

    /// The byte after a `\`: `d`, `D`, `s` and `S` are classes, anything else
    /// is itself.
    fn parse_escape(&mut self) -> Result<CharPredicate, ParseError> {
        let at = self.pos;
        let predicate = match self.next_byte("an escaped character")? {
            b'd' => CharPredicate::digits(),
            b'D' => CharPredicate::digits().inverted(),
            b's' => CharPredicate::single(b' '),
            b'S' => CharPredicate::single(b' ').inverted(),
            0 => return Err(ParseError::new(at, ParseErrorKind::OutsideAlphabet)),
            b => CharPredicate::single(b),
        };
        Ok(predicate)
    }

    /// Body of `[...]`, with the opening bracket already consumed.
    fn parse_set(&mut self) -> Result<CharPredicate, ParseError> {
        let inverse = self.eat(b'^');
        let mut predicate = CharPredicate::new();

        self.parse_set_elem(&mut predicate)?;
        while !self.eat(b']') {
            if self.peek().is_none() {
                return Err(self.unexpected_end("']'"));
            }
            self.parse_set_elem(&mut predicate)?;
        }

        if inverse {
            predicate.invert();
        }
        Ok(predicate)
    }

    fn parse_set_elem(&mut self, predicate: &mut CharPredicate) -> Result<(), ParseError> {
        if self.eat(b'\\') {
            predicate.union_with(&self.parse_escape()?);
            return Ok(());
        }

        let lo = self.parse_literal()?;
        if self.eat(b'-') {
            if self.peek() == Some(b'\\') {
                return Err(ParseError::new(self.pos, ParseErrorKind::EscapedRangeEnd));
            }
            let hi = self.parse_literal()?;
            predicate.insert_range(lo, hi);
        } else {
            predicate.insert(lo);
        }
        Ok(())
    }
}

/// Parse a whole pattern into `builder`, returning its fragment.
///
/// The entire pattern must be consumed.
pub fn parse_fragment(
    pattern: &[u8],
    builder: &mut FragmentBuilder,
    dot_matches_newline: bool,
) -> Result<Fragment, ParseError> {
    let mut dot = CharPredicate::full();
    if !dot_matches_newline {
        dot.remove(b'\n');
    }

    let mut parser = Parser {
        pattern,
        pos: 0,
        builder,
        dot,
    };
    let fragment = parser.parse_exp()?;

    if let Some(b) = parser.peek() {
        return Err(ParseError::new(
            parser.pos,
            ParseErrorKind::TrailingInput(b),
        ));
    }
    Ok(fragment)
}
