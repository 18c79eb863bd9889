//! Names the parser recognizes among keywords
use lazy_static::lazy_static;
use std::collections::HashSet;

/// Keywords parsed as functions of one argument, e.g. `\sin x`
///
/// `frac` and `sqrt` have their own grammar and aren't part of this list.
pub const DEFAULT_FUNCTIONS: [&str; 26] = [
    "sin", "cos", "tan", "sec", "csc", "cot", "arcsin", "arccos", "arctan", "arcsec", "arccsc",
    "arccot", "sinh", "cosh", "tanh", "sech", "csch", "coth", "log", "lg", "ln", "exp", "det",
    "gcd", "min", "max",
];

/// Keywords parsed as variables, e.g. `\alpha` or `\Delta`
pub const GREEK_LETTERS: [&str; 33] = [
    "alpha", "beta", "gamma", "delta", "epsilon", "varepsilon", "zeta", "eta", "theta",
    "vartheta", "iota", "kappa", "lambda", "mu", "nu", "xi", "omicron", "pi", "varpi", "rho",
    "varrho", "sigma", "varsigma", "tau", "upsilon", "phi", "varphi", "chi", "psi", "omega",
    "digamma", "varkappa", "epsi",
];

lazy_static! {
    pub(crate) static ref DEFAULT_OPTIONS: Options = Options::default();
}

/// Parser configuration
///
/// Names are matched case-insensitively, so `\Delta` is a greek letter and `\Sin` a function, but
/// nodes keep the casing of the input.
///
/// # Example
/// ```
/// use latex_ast::{LatexTokenizer, Options, Parser};
///
/// let options = Options::default().with_functions(["erf"]);
/// let parsed = Parser::with_options(LatexTokenizer::new("\\erf x"), &options).parse();
/// assert_eq!(parsed.unwrap().unwrap().to_math(), "erf(x)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    functions: HashSet<String>,
    greek_letters: HashSet<String>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            functions: DEFAULT_FUNCTIONS.iter().map(|&name| name.to_owned()).collect(),
            greek_letters: GREEK_LETTERS.iter().map(|&name| name.to_owned()).collect(),
        }
    }
}

impl Options {
    /// Recognize additional function names on top of the current ones
    pub fn with_functions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.functions
            .extend(names.into_iter().map(|name| name.as_ref().to_lowercase()));
        self
    }

    /// Whether `name` is a known function
    pub fn is_function(&self, name: &str) -> bool {
        self.functions.contains(&name.to_lowercase())
    }

    /// Whether `name` is a greek letter
    pub fn is_greek_letter(&self, name: &str) -> bool {
        self.greek_letters.contains(&name.to_lowercase())
    }
}

/// Whether `name` is one of the default greek letters
pub(crate) fn is_greek_letter(name: &str) -> bool {
    DEFAULT_OPTIONS.is_greek_letter(name)
}

#[cfg(test)]
mod tests {
    use super::Options;

    #[test]
    fn case_insensitive() {
        let options = Options::default();
        assert!(options.is_function("sin"));
        assert!(options.is_function("Sin"));
        assert!(options.is_greek_letter("Delta"));
        assert!(!options.is_function("frac"));
        assert!(!options.is_greek_letter("x"));
    }

    #[test]
    fn functions_are_additive() {
        let options = Options::default().with_functions(["Erf", "gamma"]);
        assert!(options.is_function("erf"));
        assert!(options.is_function("gamma"));
        assert!(options.is_function("cos"));
        assert!(options.is_greek_letter("gamma"));
    }
}
