//! Printers that turn a tree back into text
//!
//! [`Math`] writes the linear notation (`+ - * / % ^`, `name(arg)`, `base_sub`) meant for algebra
//! engines, and [`Latex`] writes LaTeX. Both only add the brackets needed to keep the tree's
//! meaning, using the precedence ladder
//!
//! ```txt
//! plus, minus  <  multiply, divide  <  exponent  <  modulus
//! ```
//!
//! plus the grouping flags the parser records on [`BinaryOp`] and [`UnaryOp`][crate::tree::UnaryOp].
use crate::tree::{BinaryOp, Node, Operator};

mod latex;
mod math;

pub use latex::Latex;
pub use math::Math;

/// The position of an operator on the precedence ladder, higher binds tighter
fn tier(op: Operator) -> u8 {
    match op {
        Operator::Plus | Operator::Minus => 0,
        Operator::Multiply | Operator::Divide => 1,
        Operator::Exponent => 2,
        Operator::Modulus => 3,
    }
}

/// Whether `child` is an operation that binds looser than `parent`
fn looser(parent: Operator, child: &Node<'_>) -> bool {
    child
        .as_operator()
        .map_or(false, |child| tier(child.op) < tier(parent))
}

/// Which operands of `node` need brackets in linear notation
fn brackets(node: &BinaryOp<'_>) -> (bool, bool) {
    let (lhs, rhs) = (node.lhs(), node.rhs());
    let exponent = node.op == Operator::Exponent;
    let lhs_bracket = looser(node.op, lhs) || (exponent && lhs.is_negative_number());
    let rhs_bracket = looser(node.op, rhs)
        || (node.op == Operator::Divide && rhs.as_operator().is_some())
        || node.is_right_distributive()
        || matches!(rhs, Node::UnaryOperator(_))
        || (exponent && rhs.is_negative_number());
    (lhs_bracket, rhs_bracket)
}

/// Negative zero prints as `0`
fn unsigned_zero(val: f64) -> f64 {
    if val == 0.0 {
        0.0
    } else {
        val
    }
}

/// Whether a subscript is short enough to print without a group
fn is_simple_subscript(sub: &Node<'_>) -> bool {
    matches!(sub, Node::Variable(name) if name.chars().count() == 1)
}

impl Node<'_> {
    /// Print in linear notation
    ///
    /// # Example
    /// ```
    /// let ast = latex_ast::parse("3(x + y) - (3x + 3y)").unwrap().unwrap();
    /// assert_eq!(ast.to_math(), "3*(x+y)-(3*x+3*y)");
    /// ```
    pub fn to_math(&self) -> String {
        Math(self).to_string()
    }

    /// Print as LaTeX
    ///
    /// # Example
    /// ```
    /// let ast = latex_ast::parse("x+\\frac{2}{3}-4=8").unwrap().unwrap();
    /// assert_eq!(ast.to_latex(), "x+\\frac{2}{3}-4=8");
    /// ```
    pub fn to_latex(&self) -> String {
        Latex(self).to_string()
    }
}

/// Print an optional tree in linear notation, where `None` is the empty string
pub fn format(ast: Option<&Node<'_>>) -> String {
    ast.map(Node::to_math).unwrap_or_default()
}

/// Print an optional tree as LaTeX, where `None` is the empty string
pub fn format_latex(ast: Option<&Node<'_>>) -> String {
    ast.map(Node::to_latex).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{brackets, format, tier};
    use crate::tree::{BinaryOp, Node, Operator, Sign, UnaryOp};

    #[test]
    fn modulus_binds_tightest() {
        assert!(tier(Operator::Modulus) > tier(Operator::Exponent));
        assert!(tier(Operator::Exponent) > tier(Operator::Multiply));
        assert_eq!(tier(Operator::Multiply), tier(Operator::Divide));
        assert!(tier(Operator::Divide) > tier(Operator::Minus));
    }

    #[test]
    fn bracket_rules() {
        let sum = || BinaryOp::new(Operator::Plus, 1.0, 2.0);
        assert_eq!(brackets(&BinaryOp::new(Operator::Multiply, sum(), sum())), (true, true));
        assert_eq!(brackets(&BinaryOp::new(Operator::Minus, sum(), sum())), (false, false));
        assert_eq!(
            brackets(&BinaryOp::new(Operator::Minus, sum(), sum()).right_distributive(true)),
            (false, true)
        );
        let product = BinaryOp::new(Operator::Multiply, 1.0, 2.0);
        assert_eq!(brackets(&BinaryOp::new(Operator::Divide, 1.0, product)), (false, true));
        assert_eq!(brackets(&BinaryOp::new(Operator::Exponent, -1.0, -2.0)), (true, true));
        let neg = UnaryOp::new(Sign::Minus, Node::Variable("x"));
        assert_eq!(brackets(&BinaryOp::new(Operator::Multiply, 2.0, neg)), (false, true));
    }

    #[test]
    fn empty() {
        assert_eq!(format(None), "");
        assert_eq!(format(Some(&Node::Variable("x"))), "x");
    }
}
