//! The structures that make up a parsed formula
//!
//! - [`Atom`] - One of the three propositional letters `P`, `Q` and `R`
//! - [`Formula`] - A syntax tree whose leaves are atoms and whose inner nodes are connectives
//!
//! Every inner node owns its children, so a formula is always a finite tree. Constructors accept
//! anything that converts [`Into`] a formula, so an atom can be used wherever a subformula is
//! expected.
//!
//! ```
//! use cpc_translate::tree::{Atom, Formula};
//!
//! let formula = Formula::imp(Formula::and(Atom::P, Atom::Q), Atom::R);
//! assert_eq!(formula.to_string(), "(P ∧ Q) → R");
//! ```
use std::fmt;

/// A propositional letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Atom {
    /// The letter `P`
    P,
    /// The letter `Q`
    Q,
    /// The letter `R`
    R,
}

impl Atom {
    /// Every atom in alphabet order
    pub const ALL: [Atom; 3] = [Atom::P, Atom::Q, Atom::R];

    /// The letter used to write this atom
    pub fn as_char(self) -> char {
        match self {
            Atom::P => 'P',
            Atom::Q => 'Q',
            Atom::R => 'R',
        }
    }

    /// The position of this atom in [`Atom::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A propositional formula
///
/// Binary connectives are stored with their left and right operands in source order, so
/// `P → Q → R`, which parses left associative, is `Imp(Imp(P, Q), R)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    /// A single atom
    Var(Atom),
    /// Negation `¬`
    Not(Box<Formula>),
    /// Conjunction `∧`
    And(Box<Formula>, Box<Formula>),
    /// Disjunction `∨`
    Or(Box<Formula>, Box<Formula>),
    /// Implication `→`
    Imp(Box<Formula>, Box<Formula>),
    /// Biconditional `↔`
    Iff(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// Create a leaf
    pub fn var(atom: Atom) -> Self {
        Formula::Var(atom)
    }

    /// Negate a formula
    #[allow(clippy::should_implement_trait)]
    pub fn not<F: Into<Formula>>(child: F) -> Self {
        Formula::Not(Box::new(child.into()))
    }

    /// Create a conjunction
    pub fn and<L: Into<Formula>, R: Into<Formula>>(left: L, right: R) -> Self {
        Formula::And(Box::new(left.into()), Box::new(right.into()))
    }

    /// Create a disjunction
    pub fn or<L: Into<Formula>, R: Into<Formula>>(left: L, right: R) -> Self {
        Formula::Or(Box::new(left.into()), Box::new(right.into()))
    }

    /// Create an implication
    pub fn imp<L: Into<Formula>, R: Into<Formula>>(left: L, right: R) -> Self {
        Formula::Imp(Box::new(left.into()), Box::new(right.into()))
    }

    /// Create a biconditional
    pub fn iff<L: Into<Formula>, R: Into<Formula>>(left: L, right: R) -> Self {
        Formula::Iff(Box::new(left.into()), Box::new(right.into()))
    }

    /// The operands of a binary connective
    pub fn operands(&self) -> Option<(&Formula, &Formula)> {
        match self {
            Formula::And(left, right)
            | Formula::Or(left, right)
            | Formula::Imp(left, right)
            | Formula::Iff(left, right) => Some((left, right)),
            Formula::Var(_) | Formula::Not(_) => None,
        }
    }

    /// Whether this node is one of the binary connectives
    pub fn is_binary(&self) -> bool {
        self.operands().is_some()
    }

    /// The atoms that occur in this formula, each once and in alphabet order
    pub fn atoms(&self) -> Vec<Atom> {
        let mut seen = [false; 3];
        self.mark_atoms(&mut seen);
        Atom::ALL
            .into_iter()
            .filter(|atom| seen[atom.index()])
            .collect()
    }

    fn mark_atoms(&self, seen: &mut [bool; 3]) {
        match self {
            Formula::Var(atom) => seen[atom.index()] = true,
            Formula::Not(child) => child.mark_atoms(seen),
            Formula::And(left, right)
            | Formula::Or(left, right)
            | Formula::Imp(left, right)
            | Formula::Iff(left, right) => {
                left.mark_atoms(seen);
                right.mark_atoms(seen);
            }
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_binary() {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

impl From<Atom> for Formula {
    fn from(atom: Atom) -> Self {
        Formula::Var(atom)
    }
}

fn fmt_binary(
    f: &mut fmt::Formatter<'_>,
    left: &Formula,
    glyph: char,
    right: &Formula,
) -> fmt::Result {
    left.fmt_operand(f)?;
    write!(f, " {} ", glyph)?;
    right.fmt_operand(f)
}

/// Canonical notation with explicit grouping
///
/// Binary operands that are themselves binary are always parenthesized, so the output parses
/// back to the same tree regardless of precedence or associativity.
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Var(atom) => write!(f, "{}", atom),
            Formula::Not(child) => {
                write!(f, "¬")?;
                child.fmt_operand(f)
            }
            Formula::And(left, right) => fmt_binary(f, left, '∧', right),
            Formula::Or(left, right) => fmt_binary(f, left, '∨', right),
            Formula::Imp(left, right) => fmt_binary(f, left, '→', right),
            Formula::Iff(left, right) => fmt_binary(f, left, '↔', right),
        }
    }
}
