//! PrefixMaps are string keyed maps that find the value of the longest key starting an input
//!
//! The tokenizer uses them to resolve glyph variants greedily: when `<->`, `->` and `-` could
//! all start the remaining formula, the longest known key wins. Several glyphs are multi-byte
//! (`¬`, `→`, `↔`), so every map measures keys in bytes and only reports prefixes that end on a
//! char boundary.
//!
//! The glyph table is tiny, so the backends differ little in speed. The `qp-trie` backed map is
//! the default, [HashPrefixMap] is used when that feature is disabled, and [LinearPrefixMap] is
//! the simplest reference implementation.
//!
//! # Example
//!
//! ```
//! use cpc_translate::prefix_map::LinearPrefixMap;
//! use cpc_translate::{tokenize_with, CPC_TOKENS};
//!
//! let token_map = LinearPrefixMap::from_vec(CPC_TOKENS);
//! let tokens = tokenize_with("P -> Q", &token_map).unwrap();
//! assert_eq!(tokens.len(), 3);
//! ```

mod hash;
mod linear;
#[cfg(feature = "qp-trie")]
mod trie;

#[cfg(feature = "fnv")]
use ::fnv::FnvBuildHasher;
pub use hash::HashPrefixMap;
pub use linear::LinearPrefixMap;
#[cfg(feature = "qp-trie")]
pub use trie::QpTriePrefixMap;

/// A hash prefix map using the fnv hasher
///
/// Requires the `fnv` feature.
///
/// # Example
/// ```
/// use cpc_translate::prefix_map::FnvHashPrefixMap;
/// use cpc_translate::CPC_TOKENS;
///
/// let token_map = FnvHashPrefixMap::from_iter_hasher(CPC_TOKENS);
/// ```
#[cfg(feature = "fnv")]
pub type FnvHashPrefixMap<K, V> = HashPrefixMap<K, V, FnvBuildHasher>;

/// A PrefixMap is a map that supports lookups on the prefix of an input
pub trait PrefixMap<V> {
    /// Get the byte length and value of the longest key that is a prefix of `inp`
    ///
    /// # Example
    /// ```
    /// use cpc_translate::prefix_map::{HashPrefixMap, PrefixMap};
    ///
    /// let map = HashPrefixMap::from_iter([("-", 1), ("->", 2), ("<->", 3)]);
    /// assert_eq!(map.get_longest_prefix("->Q"), Some((2, &2)));
    /// assert_eq!(map.get_longest_prefix("<-Q"), None);
    /// ```
    fn get_longest_prefix<P: AsRef<str>>(&self, inp: P) -> Option<(usize, &V)>;
}

/// Sort entries longest key first and drop duplicate keys, keeping the value inserted last
fn longest_first<K, V>(entries: &mut Vec<(K, V)>)
where
    K: AsRef<str>,
{
    entries.sort_by(|(left, _), (right, _)| {
        let (left, right) = (left.as_ref(), right.as_ref());
        right
            .len()
            .cmp(&left.len())
            .then_with(|| left.as_bytes().cmp(right.as_bytes()))
    });
    // sort_by is stable, so among equal keys the later one comes later
    entries.dedup_by(|later, earlier| {
        if later.0.as_ref() == earlier.0.as_ref() {
            std::mem::swap(&mut later.1, &mut earlier.1);
            true
        } else {
            false
        }
    });
}
