use super::{brackets, is_simple_subscript, tier, unsigned_zero};
use crate::tables::is_greek_letter;
use crate::tree::{BinaryOp, Node, Operator, Sign};
use std::fmt::{self, Display};

/// Displays a node as LaTeX
///
/// Divisions become `\frac`, so their operands never need brackets, and exponents are always
/// braced. Everything else follows the same bracket rules as [`Math`][super::Math] using
/// `\left(` and `\right)`, with extra groups where the LaTeX grammar would otherwise read the
/// output back differently: a left operand of the same tier (the parser nests those to the right),
/// a `\bmod` under an exponent, and a subscripted operation.
///
/// # Example
/// ```
/// use latex_ast::format::Latex;
///
/// let ast = latex_ast::parse_math("(x+1)^2/3").unwrap().unwrap();
/// assert_eq!(format!("{}", Latex(&ast)), "\\frac{\\left(x+1\\right)^{2}}{3}");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Latex<'n, 'a>(pub &'n Node<'a>);

/// Which operands of `node` need `\left(` and `\right)`
fn latex_brackets(node: &BinaryOp<'_>) -> (bool, bool) {
    let (lhs_bracket, rhs_bracket) = brackets(node);
    // \frac is already a group
    let nested = node.lhs().as_operator().map_or(false, |child| {
        (child.op != Operator::Divide && tier(child.op) == tier(node.op))
            || (node.op == Operator::Exponent && child.op == Operator::Modulus)
    });
    (lhs_bracket || nested, rhs_bracket)
}

impl Latex<'_, '_> {
    fn operand(f: &mut fmt::Formatter<'_>, node: &Node<'_>, bracketed: bool) -> fmt::Result {
        if bracketed {
            write!(f, "\\left({}\\right)", Latex(node))
        } else {
            Latex(node).fmt(f)
        }
    }
}

impl fmt::Display for Latex<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Node::Number(val) => write!(f, "{}", unsigned_zero(*val)),
            Node::Variable(name) if is_greek_letter(name) => write!(f, "\\{name}"),
            Node::Variable(name) => f.write_str(name),
            Node::Keyword(name) => write!(f, "\\{name}"),
            Node::Operator(op) => {
                let (lhs_bracket, rhs_bracket) = latex_brackets(op);
                let symbol = match op.op {
                    Operator::Plus => "+",
                    Operator::Minus => "-",
                    Operator::Multiply => "\\cdot ",
                    Operator::Modulus => "\\bmod ",
                    Operator::Divide => {
                        return write!(f, "\\frac{{{}}}{{{}}}", Latex(op.lhs()), Latex(op.rhs()));
                    }
                    Operator::Exponent => {
                        Self::operand(f, op.lhs(), lhs_bracket)?;
                        return write!(f, "^{{{}}}", Latex(op.rhs()));
                    }
                };
                Self::operand(f, op.lhs(), lhs_bracket)?;
                f.write_str(symbol)?;
                Self::operand(f, op.rhs(), rhs_bracket)
            }
            Node::UnaryOperator(unary) => match unary.sign {
                Sign::Minus => {
                    f.write_str("-")?;
                    Self::operand(f, unary.value(), unary.is_right_distributive())
                }
                Sign::Plus => Latex(unary.value()).fmt(f),
            },
            Node::Function(func) if func.name.eq_ignore_ascii_case("sqrt") => {
                write!(f, "\\sqrt{{{}}}", Latex(func.content()))
            }
            Node::Function(func) => {
                write!(f, "\\{}\\left({}\\right)", func.name, Latex(func.content()))
            }
            Node::Subscript(sub) => {
                let grouped = matches!(sub.base(), Node::Operator(_) | Node::Subscript(_));
                Self::operand(f, sub.base(), grouped)?;
                if is_simple_subscript(sub.subscript()) {
                    write!(f, "_{}", Latex(sub.subscript()))
                } else {
                    write!(f, "_{{{}}}", Latex(sub.subscript()))
                }
            }
            Node::Equation(eq) => write!(f, "{}={}", Latex(eq.lhs()), Latex(eq.rhs())),
        }
    }
}
