//! String keyed maps that find the value of the longest key prefixing an input
//!
//! Tokenizers use them to match the fixed lexemes of a notation: at every position the longest
//! entry wins, so `\bmod` is found before `\b` would be, and `\qquad` before `\quad`. Any map can
//! be handed to [`LatexTokenizer::with_tokens`][crate::LatexTokenizer::with_tokens] or
//! [`MathTokenizer::with_tokens`][crate::MathTokenizer::with_tokens].
//!
//! With the `qp-trie` feature (the default) [`QpTriePrefixMap`] backs the default tokenizers,
//! otherwise [`HashPrefixMap`] does. [`LinearPrefixMap`] needs nothing but key equality.
//!
//! # Example
//!
//! ```
//! use latex_ast::prefix_map::LinearPrefixMap;
//! use latex_ast::{parse_tokens, LatexTokenizer, LATEX_TOKENS};
//!
//! let token_map = LinearPrefixMap::from_vec(LATEX_TOKENS);
//! let tokens = LatexTokenizer::with_tokens("t_{last} \\bmod 2", &token_map);
//! assert_eq!(parse_tokens(tokens).unwrap().unwrap().to_math(), "t_(last)%2");
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
/// Lexeme keys are short, which fnv hashes faster than the default hasher. Requires the `fnv`
/// feature.
///
/// # Example
/// ```
/// use latex_ast::prefix_map::FnvHashPrefixMap;
/// use latex_ast::MATH_TOKENS;
///
/// let token_map = FnvHashPrefixMap::from_iter_hasher(MATH_TOKENS);
/// ```
#[cfg(feature = "fnv")]
pub type FnvHashPrefixMap<K, V> = HashPrefixMap<K, V, FnvBuildHasher>;

/// A map that supports lookups on the prefix of an input
pub trait PrefixMap<V> {
    /// Get the length and value of the longest key that prefixes `inp`
    ///
    /// # Example
    /// ```
    /// use latex_ast::prefix_map::{HashPrefixMap, PrefixMap};
    ///
    /// let map = HashPrefixMap::from_iter([("\\quad", 1), ("\\qquad", 2)]);
    /// assert_eq!(map.get_longest_prefix("\\qquad x"), Some((6, &2)));
    /// assert_eq!(map.get_longest_prefix("\\q"), None);
    /// ```
    fn get_longest_prefix<P: AsRef<str>>(&self, inp: P) -> Option<(usize, &V)>;
}
