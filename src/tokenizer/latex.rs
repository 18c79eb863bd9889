use super::{strip_lexeme, strip_number, strip_word, tokens, Cursor, DefaultTokens, Lexeme};
use crate::prefix_map::PrefixMap;
use crate::token::{Bracket, Token, TokenKind, TokenSource};
use crate::tree::Operator;
use crate::SyntaxError;
use lazy_static::lazy_static;

/// The fixed lexemes of LaTeX math
///
/// This is exported to allow building alternate token maps, e.g. with extra spacing commands.
pub const LATEX_TOKENS: [(&str, Lexeme); 32] = tokens!(
    Lexeme::Operator(Operator::Plus) => "+";
    Lexeme::Operator(Operator::Minus) => "-";
    Lexeme::Operator(Operator::Multiply) => "*", "\\cdot", "\\times", "\\ast";
    Lexeme::Operator(Operator::Divide) => "/", "\\div";
    Lexeme::Operator(Operator::Modulus) => "\\mod", "\\bmod", "\\%";
    Lexeme::Operator(Operator::Exponent) => "^";
    Lexeme::Underscore => "_";
    Lexeme::Equal => "=";
    Lexeme::Bracket(Bracket::open('(')) => "(";
    Lexeme::Bracket(Bracket::open('[')) => "[";
    Lexeme::Bracket(Bracket::open('{')) => "{", "\\{";
    Lexeme::Bracket(Bracket::close(')')) => ")";
    Lexeme::Bracket(Bracket::close(']')) => "]";
    Lexeme::Bracket(Bracket::close('}')) => "}", "\\}";
    Lexeme::Space => "\\ ", "\\,", "\\;", "\\:", "\\!", "\\quad", "\\qquad", "\\\\";
    Lexeme::Delimiter(true) => "\\left";
    Lexeme::Delimiter(false) => "\\right";
);

lazy_static! {
    static ref DEFAULT_TOKENS: DefaultTokens = LATEX_TOKENS.into_iter().collect();
}

/// A tokenizer for LaTeX math
///
/// Runs of letters are single variables, control words that aren't operators or spacing are
/// keywords, and `\left(` style delimiters become plain brackets.
///
/// # Example
/// ```
/// use latex_ast::{LatexTokenizer, TokenKind, TokenSource};
///
/// let mut tokens = LatexTokenizer::new("\\sin\\left( x \\right)");
/// assert_eq!(tokens.next_token().unwrap().kind, TokenKind::Keyword("sin"));
/// assert!(matches!(tokens.next_token().unwrap().kind, TokenKind::Bracket(b) if b.value == '('));
/// assert_eq!(tokens.next_token().unwrap().kind, TokenKind::Variable("x"));
/// ```
#[derive(Debug, Clone)]
pub struct LatexTokenizer<'a, 'b, T> {
    cursor: Cursor<'a>,
    token_map: &'b T,
}

impl<'a> LatexTokenizer<'a, 'static, DefaultTokens> {
    /// Create a new tokenizer with the default tokens
    pub fn new(inp: &'a str) -> Self {
        Self::with_tokens(inp, &DEFAULT_TOKENS)
    }
}

impl<'a, 'b, T> LatexTokenizer<'a, 'b, T>
where
    T: PrefixMap<Lexeme>,
{
    /// Create a new tokenizer with a custom token map
    ///
    /// # Example
    /// ```
    /// use latex_ast::prefix_map::HashPrefixMap;
    /// use latex_ast::{LatexTokenizer, LATEX_TOKENS};
    ///
    /// let token_map = HashPrefixMap::from_iter(LATEX_TOKENS);
    /// let parsed = latex_ast::parse_tokens(LatexTokenizer::with_tokens("2x", &token_map));
    /// assert_eq!(parsed.unwrap().unwrap().to_math(), "2*x");
    /// ```
    pub fn with_tokens(inp: &'a str, token_map: &'b T) -> Self {
        LatexTokenizer {
            cursor: Cursor::new(inp),
            token_map,
        }
    }

    /// Read the bracket after `\left` or `\right`, reported as one token spanning both
    fn delimiter(&mut self, len: usize, open: bool) -> Result<Token<'a>, SyntaxError> {
        let (line, col) = (self.cursor.line, self.cursor.col);
        self.cursor.bump(len);
        self.cursor.skip_whitespace();
        match strip_lexeme(self.token_map, self.cursor.remaining()) {
            Some((len, Lexeme::Bracket(bracket))) if bracket.open == open => {
                self.cursor.bump(len);
                Ok(Token {
                    kind: TokenKind::Bracket(bracket),
                    line,
                    col,
                    end: self.cursor.col,
                })
            }
            _ => {
                let side = if open { "\\left" } else { "\\right" };
                let kind = if open { "opening" } else { "closing" };
                Err(self.cursor.error(0, format!("Expected {kind} bracket after {side}")))
            }
        }
    }
}

impl<'a, 'b, T> TokenSource<'a> for LatexTokenizer<'a, 'b, T>
where
    T: PrefixMap<Lexeme>,
{
    fn next_token(&mut self) -> Result<Token<'a>, SyntaxError> {
        loop {
            self.cursor.skip_whitespace();
            let remaining = self.cursor.remaining();
            if remaining.is_empty() {
                return Ok(self.cursor.eof());
            }
            if let Some((len, lexeme)) = strip_lexeme(self.token_map, remaining) {
                let kind = match lexeme {
                    Lexeme::Space => {
                        self.cursor.bump(len);
                        continue;
                    }
                    Lexeme::Delimiter(open) => return self.delimiter(len, open),
                    Lexeme::Operator(op) => TokenKind::Operator(op),
                    Lexeme::Bracket(bracket) => TokenKind::Bracket(bracket),
                    Lexeme::Underscore => TokenKind::Underscore,
                    Lexeme::Equal => TokenKind::Equal,
                };
                return Ok(self.cursor.token(kind, len));
            }
            if let Some(len) = strip_number(remaining) {
                return self.cursor.number(len);
            }
            let len = strip_word(remaining);
            if len > 0 {
                return Ok(self.cursor.token(TokenKind::Variable(&remaining[..len]), len));
            }
            if let Some(name) = remaining.strip_prefix('\\') {
                let len = strip_word(name);
                if len > 0 {
                    return Ok(self.cursor.token(TokenKind::Keyword(&name[..len]), len + 1));
                }
            }
            return Err(self.cursor.unknown());
        }
    }

    fn source(&self) -> &'a str {
        self.cursor.source
    }
}
