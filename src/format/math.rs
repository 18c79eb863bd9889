use super::{brackets, is_simple_subscript, unsigned_zero};
use crate::tree::{Node, Sign};
use std::fmt::{self, Display};

/// Displays a node in linear notation
///
/// # Example
/// ```
/// use latex_ast::format::Math;
///
/// let ast = latex_ast::parse("t_{last}-t_{first_a}").unwrap().unwrap();
/// assert_eq!(format!("{}", Math(&ast)), "t_(last)-t_(first_a)");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Math<'n, 'a>(pub &'n Node<'a>);

impl Math<'_, '_> {
    fn operand(f: &mut fmt::Formatter<'_>, node: &Node<'_>, bracketed: bool) -> fmt::Result {
        if bracketed {
            write!(f, "({})", Math(node))
        } else {
            Math(node).fmt(f)
        }
    }
}

impl fmt::Display for Math<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Node::Number(val) => write!(f, "{}", unsigned_zero(*val)),
            Node::Variable(name) | Node::Keyword(name) => f.write_str(name),
            Node::Operator(op) => {
                let (lhs_bracket, rhs_bracket) = brackets(op);
                Self::operand(f, op.lhs(), lhs_bracket)?;
                write!(f, "{}", op.op.symbol())?;
                Self::operand(f, op.rhs(), rhs_bracket)
            }
            Node::UnaryOperator(unary) => match unary.sign {
                Sign::Minus => {
                    f.write_str("-")?;
                    Self::operand(f, unary.value(), unary.is_right_distributive())
                }
                Sign::Plus => Math(unary.value()).fmt(f),
            },
            Node::Function(func) => write!(f, "{}({})", func.name, Math(func.content())),
            Node::Subscript(sub) if is_simple_subscript(sub.subscript()) => {
                write!(f, "{}_{}", Math(sub.base()), Math(sub.subscript()))
            }
            Node::Subscript(sub) => {
                write!(f, "{}_({})", Math(sub.base()), Math(sub.subscript()))
            }
            Node::Equation(eq) => write!(f, "{}={}", Math(eq.lhs()), Math(eq.rhs())),
        }
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Math(self).fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use crate::tree::{BinaryOp, Equation, Function, Node, Operator, Sign, Subscript, UnaryOp};

    fn op<'a, L, R>(op: Operator, lhs: L, rhs: R) -> BinaryOp<'a>
    where
        L: Into<Node<'a>>,
        R: Into<Node<'a>>,
    {
        BinaryOp::new(op, lhs, rhs)
    }

    fn math<'a, N: Into<Node<'a>>>(node: N) -> String {
        node.into().to_math()
    }

    #[test]
    fn general_example() {
        let ast = op(
            Operator::Multiply,
            op(Operator::Plus, 2.0, 3.0),
            op(Operator::Divide, 5.0, 1.0),
        );
        assert_eq!(math(ast), "(2+3)*5/1");
    }

    #[test]
    fn minus_bracket() {
        let ast = op(
            Operator::Minus,
            op(
                Operator::Multiply,
                3.0,
                op(Operator::Plus, Node::Variable("x"), Node::Variable("y")),
            ),
            op(
                Operator::Plus,
                op(Operator::Multiply, 3.0, Node::Variable("x")),
                op(Operator::Multiply, 3.0, Node::Variable("y")),
            ),
        )
        .right_distributive(true);
        assert_eq!(math(ast), "3*(x+y)-(3*x+3*y)");
    }

    #[test]
    fn uni_minus_bracket() {
        let ast = UnaryOp::new(
            Sign::Minus,
            op(
                Operator::Plus,
                3.0,
                op(Operator::Minus, 4.0, op(Operator::Plus, 4.0, 8.0)),
            ),
        )
        .right_distributive(true);
        assert_eq!(math(ast), "-(3+4-4+8)");

        let ast = UnaryOp::new(Sign::Minus, Node::Variable("x"));
        assert_eq!(math(ast), "-x");
        let ast = UnaryOp::new(Sign::Plus, Node::Variable("x"));
        assert_eq!(math(ast), "x");
    }

    #[test]
    fn division() {
        let ast = op(Operator::Divide, 1.0, op(Operator::Multiply, 3.0, 4.0));
        assert_eq!(math(ast), "1/(3*4)");
    }

    #[test]
    fn parenthesis_nesting() {
        let ast = op(
            Operator::Multiply,
            6.0,
            op(
                Operator::Multiply,
                op(Operator::Plus, 5.0, op(Operator::Multiply, 2.0, 6.0)),
                8.0,
            ),
        );
        assert_eq!(math(ast), "6*(5+2*6)*8");
    }

    #[test]
    fn exponents() {
        let ast = op(
            Operator::Minus,
            op(Operator::Exponent, 3.0, op(Operator::Plus, 6.0, 4.0)),
            op(Operator::Exponent, Node::Variable("var"), 2.0),
        );
        assert_eq!(math(ast), "3^(6+4)-var^2");

        let ast = op(
            Operator::Exponent,
            3.0,
            op(Operator::Exponent, 5.0, op(Operator::Minus, 22.0, 3.0)),
        );
        assert_eq!(math(ast), "3^5^(22-3)");
        assert_eq!(math(op(Operator::Exponent, 3.0, -1.0)), "3^(-1)");
        assert_eq!(math(op(Operator::Exponent, -1.0, 2.0)), "(-1)^2");
    }

    #[test]
    fn modulus_binds_tighter_than_exponent() {
        let ast = op(Operator::Modulus, op(Operator::Exponent, 2.0, 3.0), 5.0);
        assert_eq!(math(ast), "(2^3)%5");
        let ast = op(Operator::Exponent, op(Operator::Modulus, 7.0, 3.0), 2.0);
        assert_eq!(math(ast), "7%3^2");
    }

    #[test]
    fn leaves() {
        assert_eq!(math(1.5), "1.5");
        assert_eq!(math(-3.0), "-3");
        assert_eq!(math(-0.0), "0");
        assert_eq!(math(op(Operator::Exponent, 3.0, -0.0)), "3^0");
        assert_eq!(math(Node::Keyword("infty")), "infty");
        assert_eq!(
            math(op(Operator::Multiply, Node::Variable("var"), Node::Variable("var"))),
            "var*var"
        );
    }

    #[test]
    fn functions() {
        assert_eq!(math(Function::new("sqrt", 123.0)), "sqrt(123)");
    }

    #[test]
    fn equations() {
        let ast = Equation::new(
            Node::Variable("y"),
            op(
                Operator::Plus,
                op(Operator::Multiply, Node::Variable("a"), Node::Variable("x")),
                op(Operator::Multiply, 2.0, Node::Variable("b")),
            ),
        );
        assert_eq!(math(ast), "y=a*x+2*b");
    }

    #[test]
    fn subscripts() {
        let ast = op(
            Operator::Minus,
            Subscript::new(Node::Variable("t"), Node::Variable("last")),
            Subscript::new(
                Node::Variable("t"),
                Subscript::new(Node::Variable("first"), Node::Variable("a")),
            ),
        );
        assert_eq!(math(ast), "t_(last)-t_(first_a)");
        assert_eq!(math(Subscript::new(Node::Variable("x"), 1.0)), "x_(1)");
    }

    #[test]
    fn display_matches_to_math() {
        let ast = Node::from(op(Operator::Divide, Node::Variable("x"), 2.0));
        assert_eq!(ast.to_string(), ast.to_math());
    }
}
