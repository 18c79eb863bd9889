use super::PrefixMap;
use std::borrow::Borrow;
use std::cmp::min;
use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// A prefix map with one hashmap per key length
///
/// A lookup probes each length from the longest key down, so it takes `O(longest_key)` hashes.
/// This backs the default tokenizers when the `qp-trie` feature is disabled.
///
/// # Example
/// ```
/// use latex_ast::prefix_map::HashPrefixMap;
/// use latex_ast::LATEX_TOKENS;
///
/// let token_map = HashPrefixMap::from_iter(LATEX_TOKENS);
/// ```
#[derive(Debug, Clone)]
pub struct HashPrefixMap<K, V, S = RandomState>(Box<[HashMap<K, V, S>]>);

impl<K, V, S> HashPrefixMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher + Default,
{
    /// Create from an iterator with a custom hasher
    ///
    /// Later entries replace earlier ones with the same key.
    pub fn from_iter_hasher<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut buckets: Vec<HashMap<K, V, S>> = Vec::new();
        for (key, val) in iter {
            let len = key.borrow().len();
            if buckets.len() <= len {
                buckets.resize_with(len + 1, HashMap::default);
            }
            buckets[len].insert(key, val);
        }
        HashPrefixMap(buckets.into())
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
        let longest = min(self.0.len(), inp.len() + 1);
        self.0[..longest]
            .iter()
            .enumerate()
            .rev()
            .filter(|&(len, _)| inp.is_char_boundary(len))
            .find_map(|(len, bucket)| bucket.get(&inp[..len]).map(|val| (len, val)))
    }
}

#[cfg(test)]
mod tests {
    use super::{HashPrefixMap, PrefixMap};
    use crate::prefix_map::tests::check_latex_prefixes;
    use crate::LATEX_TOKENS;

    #[test]
    fn latex_prefixes() {
        check_latex_prefixes(&HashPrefixMap::from_iter(LATEX_TOKENS));
    }

    #[test]
    fn later_entries_win() {
        let map = HashPrefixMap::from_iter([("\\mod", 0), ("\\bmod", 1), ("\\mod", 2)]);
        assert_eq!(map.get_longest_prefix("\\mod 3"), Some((4, &2)));
        assert_eq!(map.get_longest_prefix("\\bmod 3"), Some((5, &1)));
        assert_eq!(map.get_longest_prefix("\\mo"), None);
    }

    #[test]
    fn empty_key() {
        let map = HashPrefixMap::from_iter([("", 0), ("\\,", 1)]);
        assert_eq!(map.get_longest_prefix("\\, x"), Some((2, &1)));
        assert_eq!(map.get_longest_prefix("x"), Some((0, &0)));
    }

    #[cfg(feature = "fnv")]
    #[test]
    fn fnv_hasher() {
        use crate::prefix_map::FnvHashPrefixMap;

        check_latex_prefixes(&FnvHashPrefixMap::from_iter_hasher(LATEX_TOKENS));
    }
}
