use crate::tree::Operator;
use crate::SyntaxError;
use std::fmt;

/// A bracket, with `\left(` and `\{` style delimiters normalized to their plain character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bracket {
    /// The bracket character, one of `(`, `)`, `[`, `]`, `{`, `}`
    pub value: char,
    /// Whether this opens a group
    pub open: bool,
}

impl Bracket {
    /// An opening bracket
    pub const fn open(value: char) -> Self {
        Bracket { value, open: true }
    }

    /// A closing bracket
    pub const fn close(value: char) -> Self {
        Bracket { value, open: false }
    }

    /// The character that closes a group opened by this bracket
    pub fn closing(self) -> Option<char> {
        match self.value {
            '(' => Some(')'),
            '[' => Some(']'),
            '{' => Some('}'),
            _ => None,
        }
    }
}

/// The classification and payload of a token
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind<'a> {
    /// A numeric literal
    Number(f64),
    /// A binary or prefix operator
    Operator(Operator),
    /// A free symbol
    Variable(&'a str),
    /// A control word without its backslash
    Keyword(&'a str),
    /// A name directly followed by `(` in linear notation
    Call(&'a str),
    /// A bracket
    Bracket(Bracket),
    /// The subscript separator `_`
    Underscore,
    /// The equation separator `=`
    Equal,
    /// End of input, returned repeatedly once reached
    Eof,
}

impl fmt::Display for TokenKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(val) => write!(f, "number {val}"),
            TokenKind::Operator(op) => write!(f, "operator {op}"),
            TokenKind::Variable(var) => write!(f, "variable {var:?}"),
            TokenKind::Keyword(kwd) => write!(f, "keyword {kwd:?}"),
            TokenKind::Call(name) => write!(f, "call {name:?}"),
            TokenKind::Bracket(Bracket { value, open: true }) => {
                write!(f, "opening bracket \"{value}\"")
            }
            TokenKind::Bracket(Bracket { value, open: false }) => {
                write!(f, "closing bracket \"{value}\"")
            }
            TokenKind::Underscore => f.write_str("underscore"),
            TokenKind::Equal => f.write_str("equal"),
            TokenKind::Eof => f.write_str("end of input"),
        }
    }
}

/// A token with its position in the source
///
/// Positions are 0-based. `end` is the column one past the token, where a tokenizer's cursor
/// stands once the token is read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    /// What was read
    pub kind: TokenKind<'a>,
    /// The line the token is on
    pub line: usize,
    /// The column the token starts on
    pub col: usize,
    /// The column after the token
    pub end: usize,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

/// A pull based source of tokens
///
/// The parser only needs one token at a time and keeps its own lookahead, so any lexer that can
/// produce the next token is enough. Once the input is exhausted [`TokenKind::Eof`] must be
/// returned on every further call.
pub trait TokenSource<'a> {
    /// Consume and return the next token
    fn next_token(&mut self) -> Result<Token<'a>, SyntaxError>;

    /// The complete text being tokenized, used to render diagnostics
    fn source(&self) -> &'a str;
}

impl<'a, S: TokenSource<'a> + ?Sized> TokenSource<'a> for &mut S {
    fn next_token(&mut self) -> Result<Token<'a>, SyntaxError> {
        (**self).next_token()
    }

    fn source(&self) -> &'a str {
        (**self).source()
    }
}
