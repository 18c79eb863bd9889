#[cfg(feature = "fnv")]
use latex_ast::prefix_map::FnvHashPrefixMap;
#[cfg(feature = "qp-trie")]
use latex_ast::prefix_map::QpTriePrefixMap;
use latex_ast::prefix_map::{HashPrefixMap, LinearPrefixMap, PrefixMap};
use latex_ast::{LatexTokenizer, Lexeme, MathTokenizer, TokenKind, TokenSource};
use latex_ast::{LATEX_TOKENS, MATH_TOKENS};
use rand::distributions::{Alphanumeric, Slice};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::WeightedIndex;

fn random_string<V>(rng: &mut impl Rng, tokens: &[(&str, V)]) -> String {
    let token = Slice::new(tokens).unwrap();
    let choice = WeightedIndex::new([1, 1, 3]).unwrap();

    let mut res = String::new();
    for _ in 0..30 {
        match rng.sample(&choice) {
            0 => res.push(' '),
            1 => res.push(rng.sample(Alphanumeric).into()),
            2 => res.push_str(rng.sample(&token).0),
            _ => unreachable!(),
        }
    }
    res
}

/// Drains two token sources in lockstep, requiring identical tokens and errors
fn assert_same_tokens<'a>(mut left: impl TokenSource<'a>, mut right: impl TokenSource<'a>) {
    loop {
        match (left.next_token(), right.next_token()) {
            (Ok(left), Ok(right)) => {
                assert_eq!(left, right);
                if left.kind == TokenKind::Eof {
                    break;
                }
            }
            (left, right) => {
                assert_eq!(left, right);
                break;
            }
        }
    }
}

fn check_latex<M: PrefixMap<Lexeme>>(map: &M) {
    let linear = LinearPrefixMap::from_vec(LATEX_TOKENS);
    let mut rng = StdRng::from_seed([0; 32]);
    for _ in 0..50 {
        let string = random_string(&mut rng, &LATEX_TOKENS);
        assert_same_tokens(
            LatexTokenizer::with_tokens(&string, &linear),
            LatexTokenizer::with_tokens(&string, map),
        );
    }
}

fn check_math<M: PrefixMap<Lexeme>>(map: &M) {
    let linear = LinearPrefixMap::from_vec(MATH_TOKENS);
    let mut rng = StdRng::from_seed([1; 32]);
    for _ in 0..50 {
        let string = random_string(&mut rng, &MATH_TOKENS);
        assert_same_tokens(
            MathTokenizer::with_tokens(&string, &linear),
            MathTokenizer::with_tokens(&string, map),
        );
    }
}

macro_rules! make_test {
    ($name:ident, $struct:ident, $factory:ident) => {
        mod $name {
            use super::*;

            #[test]
            fn random_latex() {
                check_latex(&$struct::$factory(LATEX_TOKENS));
            }

            #[test]
            fn random_math() {
                check_math(&$struct::$factory(MATH_TOKENS));
            }
        }
    };
}

make_test! {hash, HashPrefixMap, from_iter}
#[cfg(feature = "fnv")]
make_test! {fnv, FnvHashPrefixMap, from_iter_hasher}
#[cfg(feature = "qp-trie")]
make_test! {qptrie, QpTriePrefixMap, from_iter}
