use super::PrefixMap;
use qp_trie::Trie;

/// A prefix map backed by a qp-trie
///
/// This is the default token map and requires the `qp-trie` feature (enabled by default). Keys
/// are stored as their UTF-8 bytes, and a lookup walks one byte deeper at a time until no key
/// shares the prefix, so it takes `O(longest_key)`.
///
/// # Example
/// ```
/// use cpc_translate::prefix_map::QpTriePrefixMap;
/// use cpc_translate::CPC_TOKENS;
///
/// let token_map = QpTriePrefixMap::from_iter(CPC_TOKENS);
/// ```
#[derive(Debug, Clone)]
pub struct QpTriePrefixMap<V>(Trie<Vec<u8>, V>);

impl<K, V> FromIterator<(K, V)> for QpTriePrefixMap<V>
where
    K: AsRef<str>,
{
    /// When a key appears more than once the last value wins
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        QpTriePrefixMap(
            iter.into_iter()
                .map(|(key, val)| (key.as_ref().as_bytes().to_vec(), val))
                .collect(),
        )
    }
}

impl<V> PrefixMap<V> for QpTriePrefixMap<V> {
    fn get_longest_prefix<P: AsRef<str>>(&self, inp: P) -> Option<(usize, &V)> {
        let bytes = inp.as_ref().as_bytes();
        let mut subtrie = self.0.subtrie(&bytes[..0]);
        let mut longest = subtrie.get(&bytes[..0]).map(|val| (0, val));
        for len in 1..=bytes.len() {
            let prefix = &bytes[..len];
            subtrie = subtrie.subtrie(prefix);
            if subtrie.is_empty() {
                break;
            }
            // keys are whole strings, so a hit always ends on a char boundary
            if let Some(val) = subtrie.get(prefix) {
                longest = Some((len, val));
            }
        }
        longest
    }
}
