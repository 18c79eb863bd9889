use super::{strip_lexeme, strip_number, strip_word, tokens, Cursor, DefaultTokens, Lexeme};
use crate::prefix_map::PrefixMap;
use crate::token::{Bracket, Token, TokenKind, TokenSource};
use crate::tree::Operator;
use crate::SyntaxError;
use lazy_static::lazy_static;

/// The fixed lexemes of the linear math notation
pub const MATH_TOKENS: [(&str, Lexeme); 14] = tokens!(
    Lexeme::Operator(Operator::Plus) => "+";
    Lexeme::Operator(Operator::Minus) => "-";
    Lexeme::Operator(Operator::Multiply) => "*";
    Lexeme::Operator(Operator::Divide) => "/";
    Lexeme::Operator(Operator::Modulus) => "%";
    Lexeme::Operator(Operator::Exponent) => "^";
    Lexeme::Underscore => "_";
    Lexeme::Equal => "=";
    Lexeme::Bracket(Bracket::open('(')) => "(";
    Lexeme::Bracket(Bracket::open('[')) => "[";
    Lexeme::Bracket(Bracket::open('{')) => "{";
    Lexeme::Bracket(Bracket::close(')')) => ")";
    Lexeme::Bracket(Bracket::close(']')) => "]";
    Lexeme::Bracket(Bracket::close('}')) => "}";
);

lazy_static! {
    static ref DEFAULT_TOKENS: DefaultTokens = MATH_TOKENS.into_iter().collect();
}

/// A tokenizer for the linear notation produced by [`Node::to_math`][crate::tree::Node::to_math]
///
/// An identifier directly followed by `(` is read as a call, any other identifier is a variable.
/// The parser turns a call to a name it does not know as a function back into a variable.
///
/// # Example
/// ```
/// use latex_ast::{MathTokenizer, TokenKind, TokenSource};
///
/// let mut tokens = MathTokenizer::new("sqrt(x)");
/// assert_eq!(tokens.next_token().unwrap().kind, TokenKind::Call("sqrt"));
/// ```
#[derive(Debug, Clone)]
pub struct MathTokenizer<'a, 'b, T> {
    cursor: Cursor<'a>,
    token_map: &'b T,
}

impl<'a> MathTokenizer<'a, 'static, DefaultTokens> {
    /// Create a new tokenizer with the default tokens
    pub fn new(inp: &'a str) -> Self {
        Self::with_tokens(inp, &DEFAULT_TOKENS)
    }
}

impl<'a, 'b, T> MathTokenizer<'a, 'b, T> {
    /// Create a new tokenizer with a custom token map
    pub fn with_tokens(inp: &'a str, token_map: &'b T) -> Self {
        MathTokenizer {
            cursor: Cursor::new(inp),
            token_map,
        }
    }
}

impl<'a, 'b, T> TokenSource<'a> for MathTokenizer<'a, 'b, T>
where
    T: PrefixMap<Lexeme>,
{
    fn next_token(&mut self) -> Result<Token<'a>, SyntaxError> {
        self.cursor.skip_whitespace();
        let remaining = self.cursor.remaining();
        if remaining.is_empty() {
            return Ok(self.cursor.eof());
        }
        if let Some((len, lexeme)) = strip_lexeme(self.token_map, remaining) {
            let kind = match lexeme {
                Lexeme::Operator(op) => TokenKind::Operator(op),
                Lexeme::Bracket(bracket) => TokenKind::Bracket(bracket),
                Lexeme::Underscore => TokenKind::Underscore,
                Lexeme::Equal => TokenKind::Equal,
                // latex only
                Lexeme::Space | Lexeme::Delimiter(_) => return Err(self.cursor.unknown()),
            };
            return Ok(self.cursor.token(kind, len));
        }
        if let Some(len) = strip_number(remaining) {
            return self.cursor.number(len);
        }
        let len = strip_word(remaining);
        if len == 0 {
            return Err(self.cursor.unknown());
        }
        let name = &remaining[..len];
        let kind = if remaining[len..].starts_with('(') {
            TokenKind::Call(name)
        } else {
            TokenKind::Variable(name)
        };
        Ok(self.cursor.token(kind, len))
    }

    fn source(&self) -> &'a str {
        self.cursor.source
    }
}

#[cfg(test)]
mod tests {
    use super::MathTokenizer;
    use crate::token::{Bracket, TokenKind, TokenSource};
    use crate::tree::Operator;

    #[test]
    fn math_tokenizer() {
        let mut tokens = MathTokenizer::new("1/sqrt(2) % t_(last) = x (y)");
        let mut kinds = Vec::new();
        loop {
            match tokens.next_token().unwrap().kind {
                TokenKind::Eof => break,
                kind => kinds.push(kind),
            }
        }
        assert_eq!(
            kinds,
            [
                TokenKind::Number(1.0),
                TokenKind::Operator(Operator::Divide),
                TokenKind::Call("sqrt"),
                TokenKind::Bracket(Bracket::open('(')),
                TokenKind::Number(2.0),
                TokenKind::Bracket(Bracket::close(')')),
                TokenKind::Operator(Operator::Modulus),
                TokenKind::Variable("t"),
                TokenKind::Underscore,
                TokenKind::Bracket(Bracket::open('(')),
                TokenKind::Variable("last"),
                TokenKind::Bracket(Bracket::close(')')),
                TokenKind::Equal,
                TokenKind::Variable("x"),
                TokenKind::Bracket(Bracket::open('(')),
                TokenKind::Variable("y"),
                TokenKind::Bracket(Bracket::close(')')),
            ]
        );
    }

    #[test]
    fn rejects_latex() {
        let err = MathTokenizer::new("\\frac").next_token().unwrap_err();
        assert_eq!(err.col, 3);
    }
}
