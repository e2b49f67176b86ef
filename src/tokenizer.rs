#[cfg(not(feature = "qp-trie"))]
use crate::prefix_map::HashPrefixMap;
use crate::prefix_map::PrefixMap;
#[cfg(feature = "qp-trie")]
use crate::prefix_map::QpTriePrefixMap;
use crate::tree::Atom;
use crate::LexError;
use lazy_static::lazy_static;
use std::fmt;
use std::iter::FusedIterator;

/// A token of a propositional formula
///
/// Every connective has several accepted glyphs, but all of them produce the same token, so the
/// parser never sees which variant was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// One of the atoms `P`, `Q`, `R`
    Atom(Atom),
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Negation, written `¬`, `~` or `!`
    Not,
    /// Conjunction, written `∧`, `^` or `&`
    And,
    /// Disjunction, written `∨`, `v` or `|`
    Or,
    /// Implication, written `→`, `⇒` or `->`
    Implies,
    /// Biconditional, written `↔` or `<->`
    Iff,
}

impl Token {
    /// The canonical glyph for this token
    pub fn canonical(self) -> char {
        match self {
            Token::Atom(atom) => atom.as_char(),
            Token::LParen => '(',
            Token::RParen => ')',
            Token::Not => '¬',
            Token::And => '∧',
            Token::Or => '∨',
            Token::Implies => '→',
            Token::Iff => '↔',
        }
    }

    /// Whether this token is a binary connective
    pub fn is_binary(self) -> bool {
        matches!(self, Token::And | Token::Or | Token::Implies | Token::Iff)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

macro_rules! tokens {
    ($($token:expr => $($glyph:expr),+;)+) => {
        [
            $(
                $(
                    ($glyph, $token),
                )+
            )+
        ]
    };
}

/// Every accepted glyph and the token it stands for
///
/// Atoms are uppercase only, which is what lets a lowercase `v` mean disjunction. Multi-char
/// glyphs (`->`, `<->`) are found by longest match, so `<->` is never read as `<` followed by
/// `->`.
pub const CPC_TOKENS: [(&str, Token); 19] = tokens!(
    Token::Atom(Atom::P) => "P";
    Token::Atom(Atom::Q) => "Q";
    Token::Atom(Atom::R) => "R";
    Token::LParen => "(";
    Token::RParen => ")";
    Token::Not => "¬", "~", "!";
    Token::And => "∧", "^", "&";
    Token::Or => "∨", "v", "|";
    Token::Implies => "→", "⇒", "->";
    Token::Iff => "↔", "<->";
);

/// The prefix map backing [`Tokenizer::new`] and [`tokenize`]
#[cfg(feature = "qp-trie")]
pub type DefaultTokens = QpTriePrefixMap<Token>;
/// The prefix map backing [`Tokenizer::new`] and [`tokenize`]
#[cfg(not(feature = "qp-trie"))]
pub type DefaultTokens = HashPrefixMap<&'static str, Token>;

lazy_static! {
    static ref DEFAULT_TOKENS: DefaultTokens = DefaultTokens::from_iter(CPC_TOKENS);
}

/// A tokenizer over a formula string
///
/// Whitespace between glyphs is skipped. The first character that doesn't start a known glyph
/// produces a [`LexError`] and ends iteration.
///
/// Because whitespace is only skipped between glyphs, `< - >` yields an error here, while
/// [`tokenize`] removes all whitespace first and reads it as `<->`.
///
/// # Example
/// ```
/// use cpc_translate::{Token, Tokenizer};
/// use cpc_translate::tree::Atom;
///
/// let res: Result<Vec<_>, _> = Tokenizer::new("~P v Q").collect();
/// assert_eq!(res.unwrap(), [Token::Not, Token::Atom(Atom::P), Token::Or, Token::Atom(Atom::Q)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer<'a, 'b, T> {
    remaining: &'a str,
    // chars consumed so far, whitespace included
    position: usize,
    token_map: &'b T,
    failed: bool,
}

impl<'a> Tokenizer<'a, 'static, DefaultTokens> {
    /// Create a new tokenizer with the default glyphs in [`CPC_TOKENS`]
    pub fn new(inp: &'a str) -> Self {
        Self::with_tokens(inp, &DEFAULT_TOKENS)
    }
}

impl<'a, 'b, T> Tokenizer<'a, 'b, T> {
    /// Create a new tokenizer with a custom glyph table
    pub fn with_tokens(inp: &'a str, token_map: &'b T) -> Self {
        Tokenizer {
            remaining: inp,
            position: 0,
            token_map,
            failed: false,
        }
    }

    fn advance(&mut self, len: usize) {
        let (consumed, rest) = self.remaining.split_at(len);
        self.position += consumed.chars().count();
        self.remaining = rest;
    }
}

impl<'a, 'b, T> Iterator for Tokenizer<'a, 'b, T>
where
    T: PrefixMap<Token>,
{
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let trimmed = self.remaining.trim_start();
        self.advance(self.remaining.len() - trimmed.len());
        let found = self.remaining.chars().next()?;
        match self.token_map.get_longest_prefix(self.remaining) {
            Some((len, &token)) if len > 0 => {
                self.advance(len);
                Some(Ok(token))
            }
            _ => {
                self.failed = true;
                Some(Err(LexError {
                    found,
                    position: self.position,
                }))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            (0, Some(self.remaining.len()))
        }
    }
}

impl<'a, 'b, T> FusedIterator for Tokenizer<'a, 'b, T> where T: PrefixMap<Token> {}

/// Tokenize a formula with the default glyphs
///
/// All whitespace is removed before matching glyphs. Error positions still count characters of
/// the original input, whitespace included.
///
/// # Example
/// ```
/// use cpc_translate::{tokenize, Token};
/// use cpc_translate::tree::Atom;
///
/// let tokens = tokenize("P <- > Q").unwrap();
/// assert_eq!(tokens, [Token::Atom(Atom::P), Token::Iff, Token::Atom(Atom::Q)]);
///
/// let err = tokenize("P ∧ x").unwrap_err();
/// assert_eq!((err.found, err.position), ('x', 4));
/// ```
pub fn tokenize(formula: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with(formula, &*DEFAULT_TOKENS)
}

/// Tokenize a formula with a custom glyph table, removing whitespace first like [`tokenize`]
pub fn tokenize_with<T>(formula: &str, token_map: &T) -> Result<Vec<Token>, LexError>
where
    T: PrefixMap<Token>,
{
    // origins[i] is the index in `formula` of the i-th non-whitespace char
    let (compact, origins): (String, Vec<usize>) = formula
        .chars()
        .enumerate()
        .filter(|(_, chr)| !chr.is_whitespace())
        .map(|(index, chr)| (chr, index))
        .unzip();
    let tokens = Tokenizer::with_tokens(&compact, token_map)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| {
            log::debug!("rejected {:?}: {}", formula, err);
            LexError {
                position: origins.get(err.position).copied().unwrap_or(err.position),
                ..err
            }
        })?;
    log::trace!("read {} tokens from {:?}", tokens.len(), formula);
    Ok(tokens)
}
