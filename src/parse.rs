use crate::tables::{Options, DEFAULT_OPTIONS};
use crate::token::{Bracket, Token, TokenKind, TokenSource};
use crate::tree::{BinaryOp, Equation, Function, Node, Operator, Sign, Subscript, UnaryOp};
use crate::{LatexTokenizer, MathTokenizer, SyntaxError};
use log::trace;

type ParseResult<T> = Result<T, SyntaxError>;

/// A recursive descent parser over a [`TokenSource`]
///
/// Each grammar tier is its own method, from [`equation`][Parser::parse] down to atoms. The
/// parser holds the last consumed token and at most one token of lookahead.
///
/// # Example
/// ```
/// use latex_ast::{LatexTokenizer, Parser};
///
/// let ast = Parser::new(LatexTokenizer::new("3(x + y)")).parse().unwrap();
/// assert_eq!(ast.unwrap().to_math(), "3*(x+y)");
/// ```
#[derive(Debug)]
pub struct Parser<'a, 'o, S> {
    tokens: S,
    options: &'o Options,
    current: Option<Token<'a>>,
    peeked: Option<Token<'a>>,
}

impl<'a, S> Parser<'a, 'static, S>
where
    S: TokenSource<'a>,
{
    /// Create a parser with the default function and greek letter names
    pub fn new(tokens: S) -> Self {
        Self::with_options(tokens, &DEFAULT_OPTIONS)
    }
}

impl<'a, 'o, S> Parser<'a, 'o, S>
where
    S: TokenSource<'a>,
{
    /// Create a parser with custom options
    pub fn with_options(tokens: S, options: &'o Options) -> Self {
        Parser {
            tokens,
            options,
            current: None,
            peeked: None,
        }
    }

    /// Parse all tokens into a single tree
    ///
    /// Empty input produces `None`. Any unexpected token aborts the parse.
    pub fn parse(mut self) -> ParseResult<Option<Node<'a>>> {
        let ast = self.equation()?;
        let token = self.advance()?;
        if token.kind != TokenKind::Eof {
            return Err(self.error(format!("Expected end of input found {token}")));
        }
        Ok(ast)
    }

    fn advance(&mut self) -> ParseResult<Token<'a>> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.tokens.next_token()?,
        };
        trace!("next token {token:?}");
        self.current = Some(token);
        Ok(token)
    }

    fn peek(&mut self) -> ParseResult<Token<'a>> {
        match self.peeked {
            Some(token) => Ok(token),
            None => {
                let token = self.tokens.next_token()?;
                self.peeked = Some(token);
                Ok(token)
            }
        }
    }

    /// An error located just past the last consumed token
    fn error<M: Into<String>>(&self, message: M) -> SyntaxError {
        let (line, col) = self
            .current
            .map(|token| (token.line, token.end))
            .unwrap_or_default();
        SyntaxError::new(self.tokens.source(), line, col, message)
    }

    fn next_operator(&mut self) -> ParseResult<Option<Operator>> {
        match self.peek()?.kind {
            TokenKind::Operator(op) => Ok(Some(op)),
            _ => Ok(None),
        }
    }

    fn is_right_distributive(&self, op: Operator, rhs: &Node<'a>) -> bool {
        let closed_group = matches!(
            self.current,
            Some(Token {
                kind: TokenKind::Bracket(Bracket { open: false, .. }),
                ..
            })
        );
        op == Operator::Minus && closed_group && matches!(rhs, Node::Operator(_))
    }

    // equation : expr ( EQUAL expr )?
    fn equation(&mut self) -> ParseResult<Option<Node<'a>>> {
        // a leading "=" is already rejected by expr
        let lhs = match self.expr()? {
            Some(lhs) if self.peek()?.kind == TokenKind::Equal => lhs,
            lhs => return Ok(lhs),
        };
        self.advance()?;
        match self.expr()? {
            Some(rhs) => Ok(Some(Equation::new(lhs, rhs).into())),
            None => {
                self.advance()?;
                Err(self.error("Expected expression after \"=\" found end of input"))
            }
        }
    }

    // expr : operator | epsilon
    fn expr(&mut self) -> ParseResult<Option<Node<'a>>> {
        trace!("expr");
        let token = self.peek()?;
        match token.kind {
            TokenKind::Number(_)
            | TokenKind::Operator(_)
            | TokenKind::Variable(_)
            | TokenKind::Keyword(_)
            | TokenKind::Call(_)
            | TokenKind::Bracket(_) => self.operator().map(Some),
            TokenKind::Eof => Ok(None),
            TokenKind::Underscore | TokenKind::Equal => {
                self.advance()?;
                Err(self.error(format!("Unexpected token: {token}")))
            }
        }
    }

    // operator : operator_multiply ( (PLUS | MINUS) operator )?
    fn operator(&mut self) -> ParseResult<Node<'a>> {
        trace!("operator");
        let lhs = self.operator_multiply()?;
        let op = match self.next_operator()? {
            Some(op @ (Operator::Plus | Operator::Minus)) => op,
            _ => return Ok(lhs),
        };
        self.advance()?;
        let rhs = self.operator()?;
        let right_distributive = self.is_right_distributive(op, &rhs);
        Ok(BinaryOp::new(op, lhs, rhs)
            .right_distributive(right_distributive)
            .into())
    }

    // operator_multiply : operator_divide ( (MULTIPLY | DIVIDE)? operator_multiply )?
    fn operator_multiply(&mut self) -> ParseResult<Node<'a>> {
        trace!("operator_multiply");
        let lhs = self.operator_divide()?;
        let op = match self.peek()?.kind {
            // implicit multiplication, e.g. 3x or (a+1)(b+1)
            TokenKind::Number(_)
            | TokenKind::Variable(_)
            | TokenKind::Keyword(_)
            | TokenKind::Call(_)
            | TokenKind::Bracket(Bracket {
                value: '(',
                open: true,
            }) => Operator::Multiply,
            TokenKind::Operator(op @ (Operator::Multiply | Operator::Divide)) => {
                self.advance()?;
                op
            }
            _ => return Ok(lhs),
        };
        let rhs = self.operator_multiply()?;
        Ok(BinaryOp::new(op, lhs, rhs).into())
    }

    // operator_divide : operator_mod ( DIVIDE operator_mod )*
    fn operator_divide(&mut self) -> ParseResult<Node<'a>> {
        trace!("operator_divide");
        let mut lhs = self.operator_mod()?;
        while let Some(Operator::Divide) = self.next_operator()? {
            self.advance()?;
            let rhs = self.operator_mod()?;
            lhs = BinaryOp::new(Operator::Divide, lhs, rhs).into();
        }
        Ok(lhs)
    }

    // operator_mod : operator_exp ( MODULUS operator_mod )?
    fn operator_mod(&mut self) -> ParseResult<Node<'a>> {
        trace!("operator_mod");
        let lhs = self.operator_exp()?;
        if self.next_operator()? != Some(Operator::Modulus) {
            return Ok(lhs);
        }
        self.advance()?;
        let rhs = self.operator_mod()?;
        Ok(BinaryOp::new(Operator::Modulus, lhs, rhs).into())
    }

    // operator_exp : subscript ( EXPONENT operator_exp )?
    fn operator_exp(&mut self) -> ParseResult<Node<'a>> {
        trace!("operator_exp");
        let lhs = self.subscript()?;
        if self.next_operator()? != Some(Operator::Exponent) {
            return Ok(lhs);
        }
        self.advance()?;
        let rhs = self.operator_exp()?;
        Ok(BinaryOp::new(Operator::Exponent, lhs, rhs).into())
    }

    // subscript : number ( UNDERSCORE subscript )?
    fn subscript(&mut self) -> ParseResult<Node<'a>> {
        trace!("subscript");
        let base = self.number()?;
        if self.peek()?.kind != TokenKind::Underscore {
            return Ok(base);
        }
        self.advance()?;
        let sub = self.subscript()?;
        Ok(Subscript::new(base, sub).into())
    }

    // number : NUMBER | uni_operator | VARIABLE | keyword | group
    fn number(&mut self) -> ParseResult<Node<'a>> {
        trace!("number");
        match self.peek()?.kind {
            TokenKind::Number(val) => {
                self.advance()?;
                Ok(Node::Number(val))
            }
            TokenKind::Operator(_) => self.uni_operator(),
            TokenKind::Variable(name) => {
                self.advance()?;
                Ok(Node::Variable(name))
            }
            TokenKind::Keyword(name) => self.keyword(name, false),
            TokenKind::Call(name) => self.keyword(name, true),
            TokenKind::Bracket(_) => self.group(),
            TokenKind::Underscore | TokenKind::Equal | TokenKind::Eof => {
                let token = self.advance()?;
                Err(self.error(format!(
                    "Expected number, variable, function, group, or + - found {token}"
                )))
            }
        }
    }

    // uni_operator : (PLUS | MINUS) number
    fn uni_operator(&mut self) -> ParseResult<Node<'a>> {
        trace!("uni_operator");
        let token = self.advance()?;
        let sign = match token.kind {
            TokenKind::Operator(op) => op.as_sign(),
            _ => None,
        };
        let sign = match sign {
            Some(sign) => sign,
            None => return Err(self.error(format!("Expected + or - found {token}"))),
        };
        let value = self.number()?;
        if let Node::Number(val) = value {
            return Ok(Node::Number(match sign {
                Sign::Plus => val,
                Sign::Minus => -val,
            }));
        }
        let right_distributive = self.is_right_distributive(sign.into(), &value);
        Ok(UnaryOp::new(sign, value)
            .right_distributive(right_distributive)
            .into())
    }

    // keyword : fraction | sqrt | function | GREEK | KEYWORD | CALL
    fn keyword(&mut self, name: &'a str, call: bool) -> ParseResult<Node<'a>> {
        trace!("keyword {name}");
        if name.eq_ignore_ascii_case("frac") {
            self.fraction()
        } else if name.eq_ignore_ascii_case("sqrt") {
            self.sqrt()
        } else if self.options.is_function(name) {
            self.function(name)
        } else if call || self.options.is_greek_letter(name) {
            // x(y) is a product in linear notation
            self.advance()?;
            Ok(Node::Variable(name))
        } else {
            self.advance()?;
            Ok(Node::Keyword(name))
        }
    }

    // fraction : FRAC group group
    fn fraction(&mut self) -> ParseResult<Node<'a>> {
        trace!("fraction");
        self.advance()?;
        let numerator = self.group()?;
        let denominator = self.group()?;
        Ok(BinaryOp::new(Operator::Divide, numerator, denominator).into())
    }

    // sqrt : SQRT ( L_SQUARE number R_SQUARE )? group
    fn sqrt(&mut self) -> ParseResult<Node<'a>> {
        trace!("sqrt");
        self.advance()?;
        if self.peek()?.kind != TokenKind::Bracket(Bracket::open('[')) {
            let content = self.group()?;
            return Ok(Function::new("sqrt", content).into());
        }
        self.advance()?;
        let index = self.number()?;
        let token = self.advance()?;
        if token.kind != TokenKind::Bracket(Bracket::close(']')) {
            return Err(self.error(format!("Expected \"]\" bracket, found {token}")));
        }
        let value = self.group()?;
        Ok(BinaryOp::new(
            Operator::Exponent,
            value,
            BinaryOp::new(Operator::Divide, 1.0, index),
        )
        .into())
    }

    // function : FUNCTION ( group | number )
    fn function(&mut self, name: &'a str) -> ParseResult<Node<'a>> {
        trace!("function {name}");
        self.advance()?;
        let content = match self.peek()?.kind {
            TokenKind::Bracket(_) => self.group()?,
            _ => self.number()?,
        };
        Ok(Function::new(name, content).into())
    }

    // group : LBRACKET expr RBRACKET
    fn group(&mut self) -> ParseResult<Node<'a>> {
        trace!("group");
        let token = self.advance()?;
        let closing = match token.kind {
            TokenKind::Bracket(bracket) if bracket.open => bracket.closing(),
            _ => None,
        };
        let closing = match closing {
            Some(closing) => closing,
            None => return Err(self.error(format!("Expected opening bracket found {token}"))),
        };
        let content = self.expr()?;
        let token = self.advance()?;
        if token.kind != TokenKind::Bracket(Bracket::close(closing)) {
            return Err(self.error(format!(
                "Expected closing bracket \"{closing}\" found {token}"
            )));
        }
        content.ok_or_else(|| self.error("Expected expression in group"))
    }
}

/// Parse tokens from any source with the default options
///
/// # Example
/// ```
/// use latex_ast::{parse_tokens, MathTokenizer};
///
/// let ast = parse_tokens(MathTokenizer::new("1/sqrt(2)")).unwrap().unwrap();
/// assert_eq!(ast.to_latex(), "\\frac{1}{\\sqrt{2}}");
/// ```
pub fn parse_tokens<'a, S>(tokens: S) -> ParseResult<Option<Node<'a>>>
where
    S: TokenSource<'a>,
{
    Parser::new(tokens).parse()
}

/// Parse a LaTeX string
///
/// This uses the default [`LATEX_TOKENS`][crate::LATEX_TOKENS] and [`Options`].
pub fn parse(inp: &str) -> ParseResult<Option<Node<'_>>> {
    parse_tokens(LatexTokenizer::new(inp))
}

/// Parse a string in the linear notation produced by [`Node::to_math`]
pub fn parse_math(inp: &str) -> ParseResult<Option<Node<'_>>> {
    parse_tokens(MathTokenizer::new(inp))
}
