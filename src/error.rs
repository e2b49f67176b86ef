//! Errors produced while reading a formula
//!
//! Reading happens in two stages and each has its own error. A [`LexError`] means a character
//! isn't part of any accepted glyph, a [`ParseError`] means the glyphs don't form a formula.
//! [`Error`] wraps both for functions that run the whole pipeline.
use crate::Token;
use std::error;
use std::fmt;

/// A character that no glyph starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexError {
    /// The offending character
    pub found: char,
    /// The character index of `found` in the input, whitespace included
    pub position: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unexpected character '{}' at position {}",
            self.found, self.position
        )
    }
}

impl error::Error for LexError {}

/// The ways a token sequence can fail to be a formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The formula stopped where an atom, `¬` or `(` was required
    UnexpectedEnd,
    /// A parenthesized subformula wasn't followed by `)`
    ExpectedClosingParen {
        /// The token found instead, `None` at the end of input
        found: Option<Token>,
    },
    /// A token that can't start a subformula
    UnexpectedToken(Token),
    /// A complete formula was read but tokens remain
    TrailingTokens(Token),
    /// Negations and parentheses nest deeper than [`crate::MAX_DEPTH`]
    TooDeep,
}

/// A token sequence that isn't a well-formed formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    /// What went wrong
    pub kind: ParseErrorKind,
    /// The index of the token where it went wrong, or the number of tokens at the end of input
    pub position: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, position: usize) -> Self {
        ParseError { kind, position }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseErrorKind::UnexpectedEnd => {
                write!(f, "unexpected end of formula after {} tokens", self.position)
            }
            ParseErrorKind::ExpectedClosingParen { found: None } => {
                write!(f, "expected ')' at token {}, found end of formula", self.position)
            }
            ParseErrorKind::ExpectedClosingParen { found: Some(token) } => write!(
                f,
                "expected ')' at token {}, found '{}'",
                self.position, token
            ),
            ParseErrorKind::UnexpectedToken(token) => {
                write!(f, "unexpected '{}' at token {}", token, self.position)
            }
            ParseErrorKind::TrailingTokens(token) => write!(
                f,
                "extra '{}' at token {} after the end of the formula",
                token, self.position
            ),
            ParseErrorKind::TooDeep => write!(
                f,
                "formula nests deeper than {} levels at token {}",
                crate::MAX_DEPTH,
                self.position
            ),
        }
    }
}

impl error::Error for ParseError {}

/// Any error from reading a formula string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Tokenizing failed
    Lex(LexError),
    /// Tokens were read but don't form a formula
    Parse(ParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lex(err) => fmt::Display::fmt(err, f),
            Error::Parse(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Lex(err) => Some(err),
            Error::Parse(err) => Some(err),
        }
    }
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Error::Lex(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}
