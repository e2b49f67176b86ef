//! What each atom means in natural language
//!
//! A [`Mapping`] holds at most one phrase per atom and always iterates in alphabet order, so
//! anything built from it, like a list of suggested meanings, comes out the same every time.
use crate::tree::Atom;

/// A phrase for each of some atoms
///
/// # Example
/// ```
/// use cpc_translate::Mapping;
/// use cpc_translate::tree::Atom;
///
/// let mapping = Mapping::from_iter([(Atom::Q, "ventar"), (Atom::P, "chover")]);
/// let atoms: Vec<_> = mapping.iter().map(|(atom, _)| atom).collect();
/// assert_eq!(atoms, [Atom::P, Atom::Q]);
/// assert_eq!(mapping.meaning(Atom::R), "R");
/// ```
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mapping {
    phrases: [Option<String>; 3],
}

impl Mapping {
    /// An empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Map every atom to its own letter
    pub fn identity() -> Self {
        Atom::ALL
            .into_iter()
            .map(|atom| (atom, atom.to_string()))
            .collect()
    }

    /// Build a mapping from user supplied meanings
    ///
    /// Meanings are trimmed, and a blank meaning falls back to the atom's letter, so every atom
    /// in `meanings` ends up with a phrase.
    ///
    /// # Example
    /// ```
    /// use cpc_translate::Mapping;
    /// use cpc_translate::tree::Atom;
    ///
    /// let mapping = Mapping::with_defaults([(Atom::P, " chover "), (Atom::Q, "  ")]);
    /// assert_eq!(mapping.get(Atom::P), Some("chover"));
    /// assert_eq!(mapping.get(Atom::Q), Some("Q"));
    /// assert_eq!(mapping.get(Atom::R), None);
    /// ```
    pub fn with_defaults<T, S>(meanings: T) -> Self
    where
        T: IntoIterator<Item = (Atom, S)>,
        S: AsRef<str>,
    {
        meanings
            .into_iter()
            .map(|(atom, meaning)| match meaning.as_ref().trim() {
                "" => (atom, atom.to_string()),
                meaning => (atom, meaning.to_owned()),
            })
            .collect()
    }

    /// Set the phrase for an atom, returning the one it replaced
    pub fn insert<S: Into<String>>(&mut self, atom: Atom, phrase: S) -> Option<String> {
        self.phrases[atom.index()].replace(phrase.into())
    }

    /// Remove the phrase for an atom
    pub fn remove(&mut self, atom: Atom) -> Option<String> {
        self.phrases[atom.index()].take()
    }

    /// The phrase for an atom, if it has one
    pub fn get(&self, atom: Atom) -> Option<&str> {
        self.phrases[atom.index()].as_deref()
    }

    /// The phrase for an atom, or the atom's letter when it has none
    pub fn meaning(&self, atom: Atom) -> std::borrow::Cow<'_, str> {
        match self.get(atom) {
            Some(phrase) => phrase.into(),
            None => atom.to_string().into(),
        }
    }

    /// The number of atoms with a phrase
    pub fn len(&self) -> usize {
        self.phrases.iter().flatten().count()
    }

    /// Whether no atom has a phrase
    pub fn is_empty(&self) -> bool {
        self.phrases.iter().all(Option::is_none)
    }

    /// The atoms with a phrase and their phrases, in alphabet order
    pub fn iter(&self) -> impl Iterator<Item = (Atom, &str)> + '_ {
        Atom::ALL
            .into_iter()
            .filter_map(move |atom| self.get(atom).map(|phrase| (atom, phrase)))
    }
}

impl<S: Into<String>> FromIterator<(Atom, S)> for Mapping {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (Atom, S)>,
    {
        let mut mapping = Mapping::new();
        mapping.extend(iter);
        mapping
    }
}

impl<S: Into<String>> Extend<(Atom, S)> for Mapping {
    fn extend<T>(&mut self, iter: T)
    where
        T: IntoIterator<Item = (Atom, S)>,
    {
        for (atom, phrase) in iter {
            self.insert(atom, phrase);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Mapping;
    use crate::tree::Atom;

    #[test]
    fn later_phrases_replace_earlier() {
        let mut mapping = Mapping::from_iter([(Atom::R, "a"), (Atom::R, "b")]);
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.insert(Atom::R, "c"), Some("b".to_owned()));
        assert_eq!(mapping.remove(Atom::R), Some("c".to_owned()));
        assert!(mapping.is_empty());
    }

    #[test]
    fn identity_uses_letters() {
        let mapping = Mapping::identity();
        let pairs: Vec<_> = mapping.iter().collect();
        assert_eq!(pairs, [(Atom::P, "P"), (Atom::Q, "Q"), (Atom::R, "R")]);
    }

    #[test]
    fn meaning_falls_back_to_letter() {
        let mapping = Mapping::from_iter([(Atom::Q, "ventar")]);
        assert_eq!(mapping.meaning(Atom::Q), "ventar");
        assert_eq!(mapping.meaning(Atom::P), "P");
    }
}
