//! Rendering formulas as Portuguese sentences
//!
//! Each connective has a fixed phrasing:
//!
//! ```txt
//! ¬A      não A
//! A ∧ B   A e B
//! A ∨ B   A ou B
//! A → B   Se A, então B
//! A ↔ B   A se e somente se B
//! ```
//!
//! Subformulas are rendered in place without any grouping words, so `¬(P ∧ Q)` and `¬P ∧ Q`
//! read the same. [`to_language`] gives the raw rendering and [`to_sentence`] turns it into a
//! sentence for display.
use crate::tree::Formula;
use crate::Mapping;

fn write_language(formula: &Formula, mapping: &Mapping, out: &mut String) {
    match formula {
        Formula::Var(atom) => out.push_str(&mapping.meaning(*atom)),
        Formula::Not(child) => {
            out.push_str("não ");
            write_language(child, mapping, out);
        }
        Formula::And(left, right) => write_infix(left, " e ", right, mapping, out),
        Formula::Or(left, right) => write_infix(left, " ou ", right, mapping, out),
        Formula::Imp(left, right) => {
            out.push_str("Se ");
            write_infix(left, ", então ", right, mapping, out);
        }
        Formula::Iff(left, right) => write_infix(left, " se e somente se ", right, mapping, out),
    }
}

fn write_infix(left: &Formula, word: &str, right: &Formula, mapping: &Mapping, out: &mut String) {
    write_language(left, mapping, out);
    out.push_str(word);
    write_language(right, mapping, out);
}

/// Render a formula in Portuguese
///
/// Atoms without a phrase in `mapping` are rendered as their letter.
///
/// # Example
/// ```
/// use cpc_translate::{parse, to_language, Mapping};
/// use cpc_translate::tree::Atom;
///
/// let mapping = Mapping::from_iter([(Atom::P, "chove"), (Atom::Q, "a grama molha")]);
/// let formula = parse("P -> ~Q").unwrap();
/// assert_eq!(to_language(&formula, &mapping), "Se chove, então não a grama molha");
/// ```
pub fn to_language(formula: &Formula, mapping: &Mapping) -> String {
    let mut out = String::new();
    write_language(formula, mapping, &mut out);
    out
}

/// Render a formula as a display sentence
///
/// This is [`to_language`] with the first character uppercased and a final `.` added unless the
/// text already ends in `.`, `!` or `?`.
///
/// # Example
/// ```
/// use cpc_translate::{parse, to_sentence, Mapping};
/// use cpc_translate::tree::Atom;
///
/// let mapping = Mapping::from_iter([(Atom::P, "chove"), (Atom::Q, "faz frio")]);
/// let formula = parse("P ∧ Q").unwrap();
/// assert_eq!(to_sentence(&formula, &mapping), "Chove e faz frio.");
/// ```
pub fn to_sentence(formula: &Formula, mapping: &Mapping) -> String {
    punctuate(&to_language(formula, mapping))
}

/// Capitalize the first character and make sure the text ends like a sentence
pub(crate) fn punctuate(text: &str) -> String {
    let mut chars = text.chars();
    let mut sentence: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    if !sentence.ends_with(['.', '!', '?']) {
        sentence.push('.');
    }
    sentence
}

#[cfg(test)]
mod tests {
    use super::{punctuate, to_language, to_sentence};
    use crate::tree::{Atom, Formula};
    use crate::{parse, Mapping};

    fn weather() -> Mapping {
        Mapping::from_iter([
            (Atom::P, "chove"),
            (Atom::Q, "a grama molha"),
            (Atom::R, "aula cancelada"),
        ])
    }

    #[test]
    fn every_connective() {
        let mapping = weather();
        let cases = [
            ("¬P", "não chove"),
            ("P ∧ Q", "chove e a grama molha"),
            ("P ∨ R", "chove ou aula cancelada"),
            ("P → Q", "Se chove, então a grama molha"),
            ("P ↔ R", "chove se e somente se aula cancelada"),
        ];
        for (inp, expected) in cases {
            assert_eq!(to_language(&parse(inp).unwrap(), &mapping), expected);
        }
    }

    #[test]
    fn nested_formulas_render_in_place() {
        let formula = parse("(P∧Q)→R").unwrap();
        assert_eq!(
            to_language(&formula, &weather()),
            "Se chove e a grama molha, então aula cancelada"
        );
        let formula = Formula::iff(Formula::not(Formula::not(Atom::P)), Atom::Q);
        assert_eq!(
            to_language(&formula, &weather()),
            "não não chove se e somente se a grama molha"
        );
    }

    #[test]
    fn missing_phrases_use_letters() {
        let formula = parse("P ∨ ¬R").unwrap();
        assert_eq!(to_language(&formula, &Mapping::new()), "P ou não R");
        let mapping = Mapping::from_iter([(Atom::R, "neva")]);
        assert_eq!(to_language(&formula, &mapping), "P ou não neva");
    }

    #[test]
    fn sentences_are_punctuated() {
        let formula = parse("¬P").unwrap();
        assert_eq!(to_sentence(&formula, &weather()), "Não chove.");
        assert_eq!(punctuate("é verdade?"), "É verdade?");
        assert_eq!(punctuate("já."), "Já.");
        assert_eq!(punctuate(""), ".");
    }
}
