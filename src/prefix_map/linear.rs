use super::PrefixMap;

/// A prefix map that scans its keys longest first
///
/// Keys are kept in descending length order, so the first key that starts the input is the
/// longest one. Lookups take `O(num_keys)`, which is fine for a glyph table of a couple dozen
/// entries and makes this the easiest map to check the others against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearPrefixMap<K, V>(Box<[(K, V)]>);

impl<K, V> LinearPrefixMap<K, V>
where
    K: AsRef<str>,
{
    /// Create from a vector of entries
    ///
    /// When a key appears more than once the last value wins.
    pub fn from_vec<B>(inp: B) -> Self
    where
        B: Into<Vec<(K, V)>>,
    {
        let mut entries = inp.into();
        super::longest_first(&mut entries);
        LinearPrefixMap(entries.into())
    }

    /// The number of distinct keys
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no keys at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for LinearPrefixMap<K, V>
where
    K: AsRef<str>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::from_vec(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<K: AsRef<str>, V> PrefixMap<V> for LinearPrefixMap<K, V> {
    fn get_longest_prefix<P: AsRef<str>>(&self, inp: P) -> Option<(usize, &V)> {
        let inp = inp.as_ref();
        self.0
            .iter()
            .find(|(key, _)| inp.starts_with(key.as_ref()))
            .map(|(key, val)| (key.as_ref().len(), val))
    }
}
