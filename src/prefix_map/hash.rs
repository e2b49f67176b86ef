use super::PrefixMap;
use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// A prefix map with one hash map per key length
///
/// A lookup tries every candidate prefix length from the longest key length down, skipping
/// lengths that would split a multi-byte char. This is the default map when the `qp-trie`
/// feature is disabled, and with the `fnv` feature it can use a faster hasher through
/// [`FnvHashPrefixMap`][super::FnvHashPrefixMap].
///
/// # Example
/// ```
/// use cpc_translate::prefix_map::HashPrefixMap;
/// use cpc_translate::CPC_TOKENS;
///
/// let token_map = HashPrefixMap::from_iter(CPC_TOKENS);
/// ```
#[derive(Debug, Clone)]
pub struct HashPrefixMap<K, V, S = RandomState> {
    // buckets[len] holds the keys that are exactly `len` bytes long
    buckets: Box<[HashMap<K, V, S>]>,
}

impl<K, V, S> HashPrefixMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher + Default,
{
    /// Create from an iterator using a custom hasher
    ///
    /// When a key appears more than once the last value wins.
    pub fn from_iter_hasher<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
    {
        let mut buckets: Vec<HashMap<K, V, S>> = Vec::new();
        for (key, val) in iter {
            let len = key.borrow().len();
            if buckets.len() <= len {
                buckets.resize_with(len + 1, HashMap::default);
            }
            buckets[len].insert(key, val);
        }
        HashPrefixMap {
            buckets: buckets.into(),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for HashPrefixMap<K, V>
where
    K: Borrow<str> + Hash + Eq,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::from_iter_hasher(iter)
    }
}

impl<K, V, S> PrefixMap<V> for HashPrefixMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    fn get_longest_prefix<P: AsRef<str>>(&self, inp: P) -> Option<(usize, &V)> {
        let inp = inp.as_ref();
        let longest = self.buckets.len().min(inp.len() + 1);
        (0..longest)
            .rev()
            .filter(|&len| inp.is_char_boundary(len))
            .find_map(|len| self.buckets[len].get(&inp[..len]).map(|val| (len, val)))
    }
}
