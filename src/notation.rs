//! Spelling formulas for people
//!
//! [`to_canonical`] rewrites whatever glyph variants were typed into the canonical ones, and
//! [`to_display_notation`] turns canonical glyphs into LaTeX commands for typesetting.
use crate::{tokenize, LexError};

/// The LaTeX command for a canonical glyph
fn latex_command(chr: char) -> Option<&'static str> {
    match chr {
        '¬' => Some(r"\lnot "),
        '∧' => Some(r"\land "),
        '∨' => Some(r"\lor "),
        '→' => Some(r"\rightarrow "),
        '↔' => Some(r"\leftrightarrow "),
        _ => None,
    }
}

/// Replace the canonical connectives with LaTeX commands
///
/// This is a plain substitution, it doesn't check that the input is a formula. Characters other
/// than `¬ ∧ ∨ → ↔` are copied unchanged, so ASCII variants like `->` are left as typed; run
/// [`to_canonical`] first to cover them.
///
/// # Example
/// ```
/// use cpc_translate::to_display_notation;
///
/// assert_eq!(to_display_notation("¬P → Q"), r"\lnot P \rightarrow  Q");
/// ```
pub fn to_display_notation(formula: &str) -> String {
    let mut out = String::with_capacity(formula.len());
    for chr in formula.chars() {
        match latex_command(chr) {
            Some(command) => out.push_str(command),
            None => out.push(chr),
        }
    }
    out
}

/// Respell a formula with canonical glyphs
///
/// Binary connectives get one space on each side, everything else is written without spaces.
/// The tokens are not parsed, so a sequence like `P Q` is respelled even though it isn't a
/// formula.
///
/// # Example
/// ```
/// use cpc_translate::to_canonical;
///
/// assert_eq!(to_canonical("~(P&Q)<->R").unwrap(), "¬(P ∧ Q) ↔ R");
/// ```
pub fn to_canonical(formula: &str) -> Result<String, LexError> {
    let mut out = String::new();
    for token in tokenize(formula)? {
        if token.is_binary() {
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
            out.push(token.canonical());
            out.push(' ');
        } else {
            out.push(token.canonical());
        }
    }
    out.truncate(out.trim_end().len());
    Ok(out)
}
