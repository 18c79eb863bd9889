use super::PrefixMap;
use std::borrow::Borrow;
use std::mem;

/// A prefix map that scans its keys longest first
///
/// Lookups take `O(num_keys)`, which is fine for small tables like [`MATH_TOKENS`][crate::MATH_TOKENS]
/// and needs nothing but key equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearPrefixMap<K, V>(Box<[(K, V)]>);

impl<K, V> LinearPrefixMap<K, V>
where
    K: Borrow<str> + Eq,
{
    /// Create from a vector of entries
    ///
    /// Later entries replace earlier ones with the same key.
    pub fn from_vec<B>(inp: B) -> Self
    where
        B: Into<Vec<(K, V)>>,
    {
        let mut entries = inp.into();
        // stable, so duplicates keep their insertion order
        entries.sort_by(|(left, _), (right, _)| {
            let (left, right): (&str, &str) = (left.borrow(), right.borrow());
            right
                .len()
                .cmp(&left.len())
                .then_with(|| left.as_bytes().cmp(right.as_bytes()))
        });
        entries.dedup_by(|later, kept| {
            let duplicate = later.0 == kept.0;
            if duplicate {
                mem::swap(later, kept);
            }
            duplicate
        });
        LinearPrefixMap(entries.into())
    }
}

impl<K, V> FromIterator<(K, V)> for LinearPrefixMap<K, V>
where
    K: Borrow<str> + Eq,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::from_vec(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<K: Borrow<str>, V> PrefixMap<V> for LinearPrefixMap<K, V> {
    fn get_longest_prefix<P: AsRef<str>>(&self, inp: P) -> Option<(usize, &V)> {
        let inp = inp.as_ref();
        self.0.iter().find_map(|(key, val)| {
            let key: &str = key.borrow();
            inp.starts_with(key).then_some((key.len(), val))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{LinearPrefixMap, PrefixMap};
    use crate::prefix_map::tests::check_latex_prefixes;
    use crate::LATEX_TOKENS;

    #[test]
    fn latex_prefixes() {
        check_latex_prefixes(&LinearPrefixMap::from_vec(LATEX_TOKENS));
    }

    #[test]
    fn later_entries_win() {
        let map = LinearPrefixMap::from_vec([("\\mod", 0), ("\\bmod", 1), ("\\mod", 2)]);
        assert_eq!(map.get_longest_prefix("\\mod 3"), Some((4, &2)));
        assert_eq!(map.get_longest_prefix("\\bmod 3"), Some((5, &1)));
        assert_eq!(map.get_longest_prefix("\\mo"), None);
    }

    #[test]
    fn empty_key() {
        let map = LinearPrefixMap::from_vec([("", 0), ("\\,", 1)]);
        assert_eq!(map.get_longest_prefix("\\, x"), Some((2, &1)));
        assert_eq!(map.get_longest_prefix("x"), Some((0, &0)));
    }
}
