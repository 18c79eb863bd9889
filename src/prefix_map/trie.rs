use super::PrefixMap;
use qp_trie::Trie;
use std::borrow::Borrow;

#[derive(Debug, PartialEq, Eq, Clone)]
struct Key<K>(K);

impl<K: Borrow<str>> Borrow<[u8]> for Key<K> {
    fn borrow(&self) -> &[u8] {
        self.0.borrow().as_bytes()
    }
}

/// A prefix map backed by a qp-trie
///
/// Lookups walk the trie one byte at a time and stop as soon as no key continues the input, so
/// they take `O(longest_match)`. This backs the default tokenizers and needs the `qp-trie`
/// feature (enabled by default).
///
/// # Example
/// ```
/// use latex_ast::prefix_map::QpTriePrefixMap;
/// use latex_ast::LATEX_TOKENS;
///
/// let token_map = QpTriePrefixMap::from_iter(LATEX_TOKENS);
/// ```
#[derive(Debug, Clone)]
pub struct QpTriePrefixMap<K: Clone, V>(Trie<Key<K>, V>);

impl<K, V> FromIterator<(K, V)> for QpTriePrefixMap<K, V>
where
    K: Borrow<str> + Clone,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        QpTriePrefixMap(iter.into_iter().map(|(key, val)| (Key(key), val)).collect())
    }
}

impl<K, V> PrefixMap<V> for QpTriePrefixMap<K, V>
where
    K: Borrow<str> + Clone,
{
    fn get_longest_prefix<P: AsRef<str>>(&self, inp: P) -> Option<(usize, &V)> {
        let bytes = inp.as_ref().as_bytes();
        let mut subtrie = self.0.subtrie(&[][..]);
        let mut longest = subtrie.get(&[][..]).map(|val| (0, val));
        for len in 1..=bytes.len() {
            let prefix = &bytes[..len];
            subtrie = subtrie.subtrie(prefix);
            if subtrie.is_empty() {
                break;
            }
            if let Some(val) = subtrie.get(prefix) {
                longest = Some((len, val));
            }
        }
        longest
    }
}
