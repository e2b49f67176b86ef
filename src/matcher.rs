//! Recognizing formulas in simple Portuguese sentences
//!
//! This isn't a grammar, just a short list of sentence [templates][Template] tried in order. The
//! sentence is trimmed, lowercased and stripped of one final `.`, `!` or `?`, then matched
//! against:
//!
//! ```txt
//! se A então B           P → Q, or (P ∧ Q) → R / (P ∨ Q) → R when A contains " e " / " ou "
//! A se e somente se B    P ↔ Q
//! não A                  ¬P
//! A e B                  P ∧ Q
//! A ou B                 P ∨ Q
//! ```
//!
//! `então` and `não` may be written without the tilde. The greedy templates take as much as
//! they can for `A`, so `A` runs to the last `então` or `se e somente se`. Splitting on ` e ` or
//! ` ou ` uses the first occurrence only. Captured phrases are trimmed of whitespace and commas.
use crate::tree::{Atom, Formula};
use crate::Mapping;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref IMPLICATION: Regex = Regex::new(r"^se (.+) ent[aã]o (.+)").unwrap();
    static ref BICONDITIONAL: Regex = Regex::new(r"^(.+) se e somente se (.+)").unwrap();
    static ref NEGATION: Regex = Regex::new(r"^n[aã]o (.+)").unwrap();
}

/// A sentence shape that [`match_sentence`] recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    /// `se A, então B`
    Implication,
    /// `se A e B, então C`
    ConjunctiveImplication,
    /// `se A ou B, então C`
    DisjunctiveImplication,
    /// `A se e somente se B`
    Biconditional,
    /// `não A`
    Negation,
    /// `A e B`
    Conjunction,
    /// `A ou B`
    Disjunction,
}

impl Template {
    /// Every template in the order they're tried
    pub const ALL: [Template; 7] = [
        Template::Implication,
        Template::ConjunctiveImplication,
        Template::DisjunctiveImplication,
        Template::Biconditional,
        Template::Negation,
        Template::Conjunction,
        Template::Disjunction,
    ];

    /// The formula a sentence of this shape translates to
    pub fn formula(self) -> &'static str {
        match self {
            Template::Implication => "P → Q",
            Template::ConjunctiveImplication => "(P ∧ Q) → R",
            Template::DisjunctiveImplication => "(P ∨ Q) → R",
            Template::Biconditional => "P ↔ Q",
            Template::Negation => "¬P",
            Template::Conjunction => "P ∧ Q",
            Template::Disjunction => "P ∨ Q",
        }
    }

    /// A model sentence with placeholders, for hints
    pub fn example(self) -> &'static str {
        match self {
            Template::Implication => "Se X, então Y",
            Template::ConjunctiveImplication => "Se X e Y, então Z",
            Template::DisjunctiveImplication => "Se X ou Y, então Z",
            Template::Biconditional => "X se e somente se Y",
            Template::Negation => "não X",
            Template::Conjunction => "X e Y",
            Template::Disjunction => "X ou Y",
        }
    }

    /// The formula as a tree
    pub fn to_formula(self) -> Formula {
        match self {
            Template::Implication => Formula::imp(Atom::P, Atom::Q),
            Template::ConjunctiveImplication => {
                Formula::imp(Formula::and(Atom::P, Atom::Q), Atom::R)
            }
            Template::DisjunctiveImplication => {
                Formula::imp(Formula::or(Atom::P, Atom::Q), Atom::R)
            }
            Template::Biconditional => Formula::iff(Atom::P, Atom::Q),
            Template::Negation => Formula::not(Atom::P),
            Template::Conjunction => Formula::and(Atom::P, Atom::Q),
            Template::Disjunction => Formula::or(Atom::P, Atom::Q),
        }
    }
}

/// A recognized sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceMatch {
    /// The shape that matched
    pub template: Template,
    /// The phrase captured for each atom of the formula
    pub mapping: Mapping,
}

impl SentenceMatch {
    fn new<const N: usize>(template: Template, phrases: [&str; N]) -> Self {
        SentenceMatch {
            template,
            mapping: Atom::ALL.into_iter().zip(phrases.map(clean)).collect(),
        }
    }

    /// The formula in canonical notation
    pub fn formula(&self) -> &'static str {
        self.template.formula()
    }

    /// The formula as a tree
    pub fn to_formula(&self) -> Formula {
        self.template.to_formula()
    }
}

/// Trim whitespace and commas from both ends of a captured phrase
fn clean(phrase: &str) -> &str {
    phrase.trim_matches(|chr: char| chr.is_whitespace() || chr == ',')
}

/// Lowercase, trim, and drop one sentence terminator
fn normalize(sentence: &str) -> String {
    let mut normalized = sentence.trim().to_lowercase();
    if normalized.ends_with(['.', '!', '?']) {
        normalized.pop();
    }
    normalized
}

fn match_implication(antecedent: &str, consequent: &str) -> SentenceMatch {
    let antecedent = clean(antecedent);
    if let Some((first, second)) = antecedent.split_once(" e ") {
        SentenceMatch::new(
            Template::ConjunctiveImplication,
            [first, second, consequent],
        )
    } else if let Some((first, second)) = antecedent.split_once(" ou ") {
        SentenceMatch::new(
            Template::DisjunctiveImplication,
            [first, second, consequent],
        )
    } else {
        SentenceMatch::new(Template::Implication, [antecedent, consequent])
    }
}

fn match_normalized(sentence: &str) -> Option<SentenceMatch> {
    if let Some(caps) = IMPLICATION.captures(sentence) {
        return Some(match_implication(&caps[1], &caps[2]));
    }
    if let Some(caps) = BICONDITIONAL.captures(sentence) {
        return Some(SentenceMatch::new(
            Template::Biconditional,
            [&caps[1], &caps[2]],
        ));
    }
    if let Some(caps) = NEGATION.captures(sentence) {
        return Some(SentenceMatch::new(Template::Negation, [&caps[1]]));
    }
    if let Some((first, second)) = sentence.split_once(" e ") {
        return Some(SentenceMatch::new(Template::Conjunction, [first, second]));
    }
    if let Some((first, second)) = sentence.split_once(" ou ") {
        return Some(SentenceMatch::new(Template::Disjunction, [first, second]));
    }
    None
}

/// Find the formula behind a simple Portuguese sentence
///
/// Returns `None` when the sentence fits no template. The captured phrases are lowercase, since
/// the whole sentence is lowercased before matching.
///
/// # Example
/// ```
/// use cpc_translate::match_sentence;
/// use cpc_translate::tree::Atom;
///
/// let found = match_sentence("Se chover, então a grama ficará molhada.").unwrap();
/// assert_eq!(found.formula(), "P → Q");
/// assert_eq!(found.mapping.get(Atom::P), Some("chover"));
/// assert_eq!(found.mapping.get(Atom::Q), Some("a grama ficará molhada"));
///
/// assert!(match_sentence("hoje é um bom dia").is_none());
/// ```
pub fn match_sentence(sentence: &str) -> Option<SentenceMatch> {
    let normalized = normalize(sentence);
    let found = match_normalized(&normalized);
    match &found {
        Some(found) => log::debug!("matched {:?} as {:?}", sentence, found.template),
        None => log::debug!("no template matches {:?}", sentence),
    }
    found
}

#[cfg(test)]
mod tests {
    use super::{match_sentence, normalize, SentenceMatch, Template};
    use crate::tree::Atom;
    use crate::{parse, Mapping};

    fn phrases(found: &SentenceMatch) -> Vec<(Atom, &str)> {
        found.mapping.iter().collect()
    }

    #[test]
    fn simple_implication() {
        let found = match_sentence("Se chover, então a grama ficará molhada.").unwrap();
        assert_eq!(found.template, Template::Implication);
        assert_eq!(found.formula(), "P → Q");
        assert_eq!(
            phrases(&found),
            [(Atom::P, "chover"), (Atom::Q, "a grama ficará molhada")]
        );
    }

    #[test]
    fn implication_without_tilde() {
        let found = match_sentence("se estudo entao passo").unwrap();
        assert_eq!(found.template, Template::Implication);
        assert_eq!(phrases(&found), [(Atom::P, "estudo"), (Atom::Q, "passo")]);
    }

    #[test]
    fn compound_antecedents() {
        let found = match_sentence("Se chover e ventar, então cancelamos o jogo.").unwrap();
        assert_eq!(found.formula(), "(P ∧ Q) → R");
        assert_eq!(
            phrases(&found),
            [
                (Atom::P, "chover"),
                (Atom::Q, "ventar"),
                (Atom::R, "cancelamos o jogo")
            ]
        );

        let found = match_sentence("Se chover ou nevar, então fico em casa!").unwrap();
        assert_eq!(found.formula(), "(P ∨ Q) → R");
        assert_eq!(
            phrases(&found),
            [
                (Atom::P, "chover"),
                (Atom::Q, "nevar"),
                (Atom::R, "fico em casa")
            ]
        );
    }

    #[test]
    fn splits_use_first_occurrence() {
        let found = match_sentence("se pão e queijo e vinho, então festa").unwrap();
        assert_eq!(
            phrases(&found),
            [
                (Atom::P, "pão"),
                (Atom::Q, "queijo e vinho"),
                (Atom::R, "festa")
            ]
        );

        let found = match_sentence("chove e venta e troveja").unwrap();
        assert_eq!(found.template, Template::Conjunction);
        assert_eq!(
            phrases(&found),
            [(Atom::P, "chove"), (Atom::Q, "venta e troveja")]
        );
    }

    #[test]
    fn conjunction_beats_disjunction_in_antecedent() {
        let found = match_sentence("se a ou b e c então d").unwrap();
        assert_eq!(found.template, Template::ConjunctiveImplication);
        assert_eq!(
            phrases(&found),
            [(Atom::P, "a ou b"), (Atom::Q, "c"), (Atom::R, "d")]
        );
    }

    #[test]
    fn antecedent_runs_to_last_entao() {
        let found = match_sentence("se a então b então c").unwrap();
        assert_eq!(phrases(&found), [(Atom::P, "a então b"), (Atom::Q, "c")]);
    }

    #[test]
    fn biconditional() {
        let found = match_sentence("Passo se e somente se estudo.").unwrap();
        assert_eq!(found.formula(), "P ↔ Q");
        assert_eq!(phrases(&found), [(Atom::P, "passo"), (Atom::Q, "estudo")]);
    }

    #[test]
    fn negation() {
        let found = match_sentence("Não chove?").unwrap();
        assert_eq!(found.formula(), "¬P");
        assert_eq!(phrases(&found), [(Atom::P, "chove")]);

        let found = match_sentence("nao chove e venta").unwrap();
        assert_eq!(found.template, Template::Negation);
        assert_eq!(phrases(&found), [(Atom::P, "chove e venta")]);
    }

    #[test]
    fn conjunction_and_disjunction() {
        let found = match_sentence("  Chove, e faz frio  ").unwrap();
        assert_eq!(found.formula(), "P ∧ Q");
        assert_eq!(phrases(&found), [(Atom::P, "chove"), (Atom::Q, "faz frio")]);

        let found = match_sentence("vou à praia ou ao cinema.").unwrap();
        assert_eq!(found.formula(), "P ∨ Q");
        assert_eq!(
            phrases(&found),
            [(Atom::P, "vou à praia"), (Atom::Q, "ao cinema")]
        );
    }

    #[test]
    fn unrecognized_sentences() {
        assert_eq!(match_sentence("hoje é um bom dia"), None);
        assert_eq!(match_sentence(""), None);
        assert_eq!(match_sentence("senão"), None);
        assert_eq!(match_sentence("se chover"), None);
    }

    #[test]
    fn only_one_terminator_is_dropped() {
        assert_eq!(normalize(" Oi!! "), "oi!");
        assert_eq!(normalize("Oi"), "oi");
        let found = match_sentence("chove e venta..").unwrap();
        assert_eq!(found.mapping.get(Atom::Q), Some("venta."));
    }

    #[test]
    fn template_formulas_parse_to_their_trees() {
        for template in Template::ALL {
            assert_eq!(
                parse(template.formula()).unwrap(),
                template.to_formula(),
                "{:?}",
                template
            );
        }
    }

    #[test]
    fn mapping_covers_formula_atoms() {
        for sentence in ["se a e b então c", "a se e somente se b", "não a", "a ou b"] {
            let found = match_sentence(sentence).unwrap();
            let atoms: Vec<_> = found.mapping.iter().map(|(atom, _)| atom).collect();
            assert_eq!(atoms, found.to_formula().atoms());
        }
        assert_ne!(
            match_sentence("a e b").unwrap().mapping,
            Mapping::identity()
        );
    }
}
