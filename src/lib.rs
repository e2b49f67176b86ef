//! Translate between classical propositional formulas and simple Portuguese sentences
//!
//! Formulas are built from the atoms `P`, `Q` and `R`, parentheses, and the five connectives of
//! the classical propositional calculus (CPC). Each connective can be typed several ways:
//!
//! ```txt
//! ¬   ~   !          negation
//! ∧   ^   &          conjunction
//! ∨   v   |          disjunction
//! →   ⇒   ->         implication
//! ↔   <->            biconditional
//! ```
//!
//! ## Usage
//!
//! From logic to language, [`parse`] a formula and render it with a [`Mapping`] from atoms to
//! phrases:
//!
//! ```
//! use cpc_translate::{parse, to_sentence, Mapping};
//! use cpc_translate::tree::Atom;
//!
//! let mapping = Mapping::from_iter([
//!     (Atom::P, "chove"),
//!     (Atom::Q, "a grama molha"),
//!     (Atom::R, "aula cancelada"),
//! ]);
//! let formula = parse("(P ^ Q) -> R").unwrap();
//! assert_eq!(
//!     to_sentence(&formula, &mapping),
//!     "Se chove e a grama molha, então aula cancelada."
//! );
//! ```
//!
//! From language to logic, [`match_sentence`] recognizes a handful of sentence templates:
//!
//! ```
//! use cpc_translate::{match_sentence, to_display_notation};
//! use cpc_translate::tree::Atom;
//!
//! let found = match_sentence("Se chover e ventar, então cancelamos o jogo.").unwrap();
//! assert_eq!(found.formula(), "(P ∧ Q) → R");
//! assert_eq!(found.mapping.get(Atom::R), Some("cancelamos o jogo"));
//! assert_eq!(
//!     to_display_notation(found.formula()),
//!     r"(P \land  Q) \rightarrow  R"
//! );
//! ```
//!
//! ## Grammar
//!
//! Parsing is recursive descent, one function per precedence level, loosest first:
//!
//! ```txt
//! E ::= I                    formula
//! I ::= M | I ↔ M            biconditional
//! M ::= O | M → O            implication
//! O ::= A | O ∨ A            disjunction
//! A ::= N | A ∧ N            conjunction
//! N ::= ¬N | T               negation
//! T ::= P | Q | R | (E)      atom or group
//! ```
//!
//! Every binary connective associates to the left. That includes implication, so `P → Q → R`
//! means `(P → Q) → R`; write the parentheses to get the other reading. A formula must use every
//! token, so `P Q` and `P)` are errors rather than partial parses. Formulas may nest at most
//! [`MAX_DEPTH`] levels, counting negations, groups and each connective of a chain.
//!
//! ## Extending
//!
//! [`tokenize`] uses the glyphs in [`CPC_TOKENS`]. A different table can be used by building a
//! [prefix map][prefix_map] and passing it to [`tokenize_with`] or [`Tokenizer::with_tokens`],
//! then handing the tokens to [`parse_tokens`]:
//!
//! ```
//! use cpc_translate::prefix_map::HashPrefixMap;
//! use cpc_translate::{parse_tokens, tokenize_with, Token, CPC_TOKENS};
//! use cpc_translate::tree::Atom;
//!
//! let token_map = HashPrefixMap::from_iter(
//!     CPC_TOKENS.into_iter().chain([("=>", Token::Implies), ("and", Token::And)]),
//! );
//! let tokens = tokenize_with("P and Q => R", &token_map).unwrap();
//! assert!(parse_tokens(tokens).is_ok());
//! ```
//!
//! Whitespace is removed before matching, so custom glyphs can't rely on spaces.
#![warn(missing_docs)]
mod error;
mod language;
mod mapping;
mod matcher;
mod notation;
mod parse;
pub mod prefix_map;
mod tokenizer;
pub mod tree;

pub use error::{Error, LexError, ParseError, ParseErrorKind};
pub use language::{to_language, to_sentence};
pub use mapping::Mapping;
pub use matcher::{match_sentence, SentenceMatch, Template};
pub use notation::{to_canonical, to_display_notation};
pub use parse::{parse, parse_tokens, MAX_DEPTH};
pub use tokenizer::{tokenize, tokenize_with, DefaultTokens, Token, Tokenizer, CPC_TOKENS};
