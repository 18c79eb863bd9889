//! A small recursive descent parser for LaTeX math
//!
//! This parser turns a LaTeX math expression into a [`Node`][tree::Node] tree, and prints trees
//! back out either as LaTeX or as an unambiguous linear notation (`+ - * / % ^`, `f(x)`, `a_b`)
//! that algebra engines can consume. The tree keeps references to the underlying string for
//! names, so no text is copied while parsing.
//!
//! ## Usage
//!
//! ```sh
//! cargo add latex-ast
//! ```
//!
//! then
//!
//! ```
//! let ast = latex_ast::parse("\\frac{1}{2} + \\sqrt{2} \\cdot 4").unwrap();
//! assert_eq!(latex_ast::format(ast.as_ref()), "1/2+sqrt(2)*4");
//! ```
//!
//! ## Grammar
//!
//! The parser is written by hand, one method per rule. The rules from loosest to tightest are:
//!
//! ```txt
//! equation         ::= expr ( "=" expr )?
//! expr             ::= operator | nothing
//! operator         ::= operator_multiply ( ("+" | "-") operator )?
//! operator_multiply::= operator_divide ( ("*" | "/")? operator_multiply )?
//! operator_divide  ::= operator_mod ( "/" operator_mod )*
//! operator_mod     ::= operator_exp ( "%" operator_mod )?
//! operator_exp     ::= subscript ( "^" operator_exp )?
//! subscript        ::= number ( "_" subscript )?
//! number           ::= NUMBER | ("+" | "-") number | VARIABLE | keyword | group
//! keyword          ::= frac group group | sqrt ( "[" number "]" )? group
//!                    | FUNCTION ( group | number ) | GREEK | KEYWORD
//! group            ::= "(" expr ")" | "[" expr "]" | "{" expr "}"
//! ```
//!
//! Addition and subtraction are right recursive, so `5 - 3 + 1` is `5 - (3 + 1)`. The tree
//! remembers when a subtraction or negation came from an explicit group, e.g. `5 - (3 + 1)`, with
//! the [right distributive][tree::BinaryOp::is_right_distributive] flag so printing puts the
//! brackets back. Multiplication is implicit before a number, variable, keyword or `(`, so `3x`
//! and `(a+1)(b+1)` are products, but `{a}{b}` is an error. A sign directly before a number is
//! folded into it, so `-3` is the number `-3` while `-x` is a negation.
//!
//! Unknown control words like `\infty` become [keywords][tree::Node::Keyword], greek letters
//! become variables, and `\sqrt[n]{x}` is rewritten as `x^(1/n)`.
//!
//! ## Printing
//!
//! [`format`][crate::format()] (or [`Node::to_math`][tree::Node::to_math]) prints the linear
//! notation with the fewest brackets that keep the tree intact:
//!
//! ```
//! let ast = latex_ast::parse("(x+1)-((x+1))").unwrap();
//! assert_eq!(latex_ast::format(ast.as_ref()), "x+1-(x+1)");
//!
//! let ast = latex_ast::parse("5 - 1(3 + 1)").unwrap();
//! assert_eq!(latex_ast::format(ast.as_ref()), "5-(1*(3+1))");
//! ```
//!
//! [`format_latex`] (or [`Node::to_latex`][tree::Node::to_latex]) prints LaTeX that parses back
//! into the same tree:
//!
//! ```
//! let ast = latex_ast::parse_math("1/sqrt(2)").unwrap();
//! assert_eq!(latex_ast::format_latex(ast.as_ref()), "\\frac{1}{\\sqrt{2}}");
//! ```
//!
//! ## Errors
//!
//! Parsing stops at the first problem with a [`SyntaxError`] that carries the line and column of
//! the offending token and renders a caret under it.
//!
//! ```
//! let err = latex_ast::parse("{23}}").unwrap_err();
//! assert_eq!((err.line, err.col), (1, 6));
//! ```
//!
//! ## Extending
//!
//! 1. [`parse`][crate::parse()] reads LaTeX with the default tables, [`parse_math`] reads the
//!    linear notation, and [`parse_tokens`] accepts any [`TokenSource`].
//! 2. Extra function names can be registered with [`Options`] and [`Parser::with_options`]:
//!    ```
//!    use latex_ast::{LatexTokenizer, Options, Parser};
//!
//!    let options = Options::default().with_functions(["erf"]);
//!    let parsed = Parser::with_options(LatexTokenizer::new("\\erf{x}"), &options).parse();
//!    ```
//! 3. The fixed lexemes can be swapped by building a custom token map:
//!    ```
//!    use latex_ast::prefix_map::HashPrefixMap;
//!    use latex_ast::{parse_tokens, LatexTokenizer, Lexeme, LATEX_TOKENS};
//!
//!    let token_map: HashPrefixMap<_, _> = LATEX_TOKENS
//!        .into_iter()
//!        .chain([("\\thinspace", Lexeme::Space)])
//!        .collect();
//!    let parsed = parse_tokens(LatexTokenizer::with_tokens("a\\thinspace b", &token_map));
//!    assert_eq!(parsed.unwrap().unwrap().to_math(), "a*b");
//!    ```
//!
//! ## Logging
//!
//! The parser reports every consumed token and grammar rule it enters at `trace` level through
//! the [`log`](https://docs.rs/log) facade.
#![warn(missing_docs)]
mod error;
pub mod format;
mod parse;
pub mod prefix_map;
mod tables;
mod token;
mod tokenizer;
pub mod tree;

pub use error::SyntaxError;
pub use format::{format, format_latex};
pub use parse::{parse, parse_math, parse_tokens, Parser};
pub use tables::{Options, DEFAULT_FUNCTIONS, GREEK_LETTERS};
pub use token::{Bracket, Token, TokenKind, TokenSource};
pub use tokenizer::{
    DefaultTokens, LatexTokenizer, Lexeme, MathTokenizer, LATEX_TOKENS, MATH_TOKENS,
};
