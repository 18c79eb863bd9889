//! Tokenizers that turn text into a stream of [`Token`]s
//!
//! Fixed lexemes (operators, brackets, spacing commands) are found by looking up the longest
//! prefix of the remaining input in a [`PrefixMap`]. Numbers, identifiers and unknown control
//! words are scanned by hand after that lookup fails.
#[cfg(not(feature = "qp-trie"))]
use crate::prefix_map::HashPrefixMap;
use crate::prefix_map::PrefixMap;
#[cfg(feature = "qp-trie")]
use crate::prefix_map::QpTriePrefixMap;
use crate::token::{Bracket, Token, TokenKind};
use crate::tree::Operator;
use crate::SyntaxError;

mod latex;
mod math;

pub use latex::{LatexTokenizer, LATEX_TOKENS};
pub use math::{MathTokenizer, MATH_TOKENS};

/// What a fixed entry of a token table lexes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lexeme {
    /// An operator
    Operator(Operator),
    /// A bracket
    Bracket(Bracket),
    /// The subscript separator
    Underscore,
    /// The equation separator
    Equal,
    /// Spacing that is skipped like whitespace
    Space,
    /// `\left` (`true`) or `\right` (`false`), which must be followed by a bracket
    Delimiter(bool),
}

macro_rules! tokens {
    ($($lexeme:expr => $($str:expr),+;)+) => {
        [
            $(
                $(
                    ($str, $lexeme),
                )+
            )+
        ]
    };
}
pub(crate) use tokens;

/// The prefix map backing [`LatexTokenizer::new`] and [`MathTokenizer::new`]
#[cfg(feature = "qp-trie")]
pub type DefaultTokens = QpTriePrefixMap<&'static str, Lexeme>;
/// The prefix map backing [`LatexTokenizer::new`] and [`MathTokenizer::new`]
#[cfg(not(feature = "qp-trie"))]
pub type DefaultTokens = HashPrefixMap<&'static str, Lexeme>;

/// Find the fixed lexeme at the start of `inp`
///
/// Control words only match on a word boundary, so `\model` isn't `\mod` followed by `el`.
fn strip_lexeme<T: PrefixMap<Lexeme>>(token_map: &T, inp: &str) -> Option<(usize, Lexeme)> {
    let (len, &lexeme) = token_map.get_longest_prefix(inp)?;
    let matched = &inp[..len];
    let word = matched.starts_with('\\') && matched.ends_with(|c: char| c.is_ascii_alphabetic());
    if len == 0 || (word && inp[len..].starts_with(|c: char| c.is_ascii_alphabetic())) {
        None
    } else {
        Some((len, lexeme))
    }
}

fn strip_number(inp: &str) -> Option<usize> {
    let mut seen_decimal = false;
    let len = inp
        .char_indices()
        .find(|(_, c)| match c {
            '.' if !seen_decimal => {
                seen_decimal = true;
                false
            }
            '0'..='9' => false,
            _ => true,
        })
        .map(|(i, _)| i)
        .unwrap_or(inp.len());
    if len > 1 || (!seen_decimal && len > 0) {
        Some(len)
    } else {
        None
    }
}

/// The byte length of the alphabetic run at the start of `inp`
fn strip_word(inp: &str) -> usize {
    inp.char_indices()
        .find(|(_, c)| !c.is_alphabetic())
        .map(|(i, _)| i)
        .unwrap_or(inp.len())
}

/// A position in the text being tokenized
#[derive(Debug, Clone, PartialEq, Eq)]
struct Cursor<'a> {
    source: &'a str,
    remaining: &'a str,
    line: usize,
    col: usize,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Cursor {
            source,
            remaining: source,
            line: 0,
            col: 0,
        }
    }

    fn remaining(&self) -> &'a str {
        self.remaining
    }

    fn bump(&mut self, len: usize) -> &'a str {
        let (taken, rest) = self.remaining.split_at(len);
        for chr in taken.chars() {
            if chr == '\n' {
                self.line += 1;
                self.col = 0;
            } else {
                self.col += 1;
            }
        }
        self.remaining = rest;
        taken
    }

    fn skip_whitespace(&mut self) {
        let trimmed = self.remaining.trim_start();
        self.bump(self.remaining.len() - trimmed.len());
    }

    fn token(&mut self, kind: TokenKind<'a>, len: usize) -> Token<'a> {
        let (line, col) = (self.line, self.col);
        self.bump(len);
        Token {
            kind,
            line,
            col,
            end: self.col,
        }
    }

    fn eof(&self) -> Token<'a> {
        Token {
            kind: TokenKind::Eof,
            line: self.line,
            col: self.col,
            end: self.col,
        }
    }

    fn number(&mut self, len: usize) -> Result<Token<'a>, SyntaxError> {
        let raw = &self.remaining[..len];
        match raw.parse() {
            Ok(val) => Ok(self.token(TokenKind::Number(val), len)),
            Err(err) => Err(self.error(len, format!("Invalid number {raw:?}: {err}"))),
        }
    }

    /// An error pointing just past the next `len` bytes
    fn error<M: Into<String>>(&self, len: usize, message: M) -> SyntaxError {
        let width = self.remaining[..len].chars().count();
        SyntaxError::new(self.source, self.line, self.col + width, message)
    }

    fn unknown(&self) -> SyntaxError {
        let mut chars = self.remaining.chars();
        let len = match (chars.next(), chars.next()) {
            (Some('\\'), Some(chr)) => 1 + chr.len_utf8(),
            (Some(chr), _) => chr.len_utf8(),
            (None, _) => 0,
        };
        self.error(len, format!("Unknown symbol {:?}", &self.remaining[..len]))
    }
}

#[cfg(test)]
mod tests {
    use super::{strip_number, strip_word, Cursor};

    #[test]
    fn numbers() {
        assert_eq!(strip_number("12+3"), Some(2));
        assert_eq!(strip_number("1.5.2"), Some(3));
        assert_eq!(strip_number(".5"), Some(2));
        assert_eq!(strip_number("."), None);
        assert_eq!(strip_number("x1"), None);
    }

    #[test]
    fn words() {
        assert_eq!(strip_word("var+1"), 3);
        assert_eq!(strip_word("αβ2"), 4);
        assert_eq!(strip_word("2x"), 0);
    }

    #[test]
    fn cursor_tracks_lines() {
        let mut cursor = Cursor::new("a\n  bc");
        cursor.bump(1);
        cursor.skip_whitespace();
        assert_eq!((cursor.line, cursor.col), (1, 2));
        let token = cursor.token(crate::token::TokenKind::Variable("bc"), 2);
        assert_eq!((token.line, token.col, token.end), (1, 2, 4));
        assert_eq!(cursor.eof().col, 4);
    }
}
