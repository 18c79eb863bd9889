//! The module containing the abstract syntax tree produced by the parser
//!
//! - [`Node`] - The closed set of tree nodes, every consumer matches on it exhaustively
//! - [`BinaryOp`] - An infix [`Operator`] applied to two operands
//! - [`UnaryOp`] - A prefix [`Sign`] applied to a non-numeric operand
//! - [`Function`] - A named function applied to one argument, e.g. `sin(x)`
//! - [`Subscript`] - A base indexed by a subscript, e.g. `t_{last}`
//! - [`Equation`] - A top level `lhs = rhs`
//!
//! Identifiers borrow from the parsed string. Nodes are immutable once built: children are only
//! reachable through accessors and the grouping flag is fixed at construction.
use std::fmt;

/// A binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition `+`
    Plus,
    /// Subtraction `-`
    Minus,
    /// Multiplication `*`
    Multiply,
    /// Division `/`
    Divide,
    /// Remainder `%`
    Modulus,
    /// Power `^`
    Exponent,
}

impl Operator {
    /// The ascii symbol used in linear notation
    pub fn symbol(self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Modulus => '%',
            Operator::Exponent => '^',
        }
    }

    /// The name of the operator
    pub fn name(self) -> &'static str {
        match self {
            Operator::Plus => "plus",
            Operator::Minus => "minus",
            Operator::Multiply => "multiply",
            Operator::Divide => "divide",
            Operator::Modulus => "modulus",
            Operator::Exponent => "exponent",
        }
    }

    /// The sign this operator denotes when used as a prefix
    pub fn as_sign(self) -> Option<Sign> {
        match self {
            Operator::Plus => Some(Sign::Plus),
            Operator::Minus => Some(Sign::Minus),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A prefix sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// `+x`, which has no effect
    Plus,
    /// `-x`
    Minus,
}

impl From<Sign> for Operator {
    fn from(sign: Sign) -> Self {
        match sign {
            Sign::Plus => Operator::Plus,
            Sign::Minus => Operator::Minus,
        }
    }
}

/// An infix operation like `a - b`
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp<'a> {
    /// The operator
    pub op: Operator,
    lhs: Box<Node<'a>>,
    rhs: Box<Node<'a>>,
    right_distributive: bool,
}

impl<'a> BinaryOp<'a> {
    /// Create an operation from its operator and operands
    pub fn new<L, R>(op: Operator, lhs: L, rhs: R) -> Self
    where
        L: Into<Node<'a>>,
        R: Into<Node<'a>>,
    {
        BinaryOp {
            op,
            lhs: Box::new(lhs.into()),
            rhs: Box::new(rhs.into()),
            right_distributive: false,
        }
    }

    /// Mark whether the right operand was written as a bracketed group that must stay grouped
    ///
    /// # Example
    /// ```
    /// use latex_ast::tree::{BinaryOp, Node, Operator};
    ///
    /// let sum = BinaryOp::new(Operator::Plus, Node::Number(3.0), Node::Number(1.0));
    /// let diff = BinaryOp::new(Operator::Minus, Node::Number(5.0), sum).right_distributive(true);
    /// assert_eq!(Node::from(diff).to_math(), "5-(3+1)");
    /// ```
    pub fn right_distributive(mut self, right_distributive: bool) -> Self {
        self.right_distributive = right_distributive;
        self
    }

    /// Whether the right operand must be re-bracketed when printed
    pub fn is_right_distributive(&self) -> bool {
        self.right_distributive
    }

    /// The left operand
    pub fn lhs(&self) -> &Node<'a> {
        &self.lhs
    }

    /// The right operand
    pub fn rhs(&self) -> &Node<'a> {
        &self.rhs
    }
}

/// A prefix sign applied to something that isn't a number, e.g. `-x`
///
/// Signs before numbers are folded into the [`Number`][Node::Number] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOp<'a> {
    /// The sign
    pub sign: Sign,
    value: Box<Node<'a>>,
    right_distributive: bool,
}

impl<'a> UnaryOp<'a> {
    /// Create a signed operand
    pub fn new<V: Into<Node<'a>>>(sign: Sign, value: V) -> Self {
        UnaryOp {
            sign,
            value: Box::new(value.into()),
            right_distributive: false,
        }
    }

    /// Mark whether the operand was written as a bracketed group that must stay grouped
    pub fn right_distributive(mut self, right_distributive: bool) -> Self {
        self.right_distributive = right_distributive;
        self
    }

    /// Whether the operand must be re-bracketed when printed
    pub fn is_right_distributive(&self) -> bool {
        self.right_distributive
    }

    /// The signed operand
    pub fn value(&self) -> &Node<'a> {
        &self.value
    }
}

/// A named function like `sin`
#[derive(Debug, Clone, PartialEq)]
pub struct Function<'a> {
    /// The function name with its original casing
    pub name: &'a str,
    content: Box<Node<'a>>,
}

impl<'a> Function<'a> {
    /// Create a function application from its name and argument
    pub fn new<C: Into<Node<'a>>>(name: &'a str, content: C) -> Self {
        Function {
            name,
            content: Box::new(content.into()),
        }
    }

    /// The function argument
    pub fn content(&self) -> &Node<'a> {
        &self.content
    }
}

/// An indexed base like `t_{last}`
#[derive(Debug, Clone, PartialEq)]
pub struct Subscript<'a> {
    base: Box<Node<'a>>,
    subscript: Box<Node<'a>>,
}

impl<'a> Subscript<'a> {
    /// Create a subscript from a base and its index
    pub fn new<B, S>(base: B, subscript: S) -> Self
    where
        B: Into<Node<'a>>,
        S: Into<Node<'a>>,
    {
        Subscript {
            base: Box::new(base.into()),
            subscript: Box::new(subscript.into()),
        }
    }

    /// The indexed base
    pub fn base(&self) -> &Node<'a> {
        &self.base
    }

    /// The index
    pub fn subscript(&self) -> &Node<'a> {
        &self.subscript
    }
}

/// A top level equation `lhs = rhs`
#[derive(Debug, Clone, PartialEq)]
pub struct Equation<'a> {
    lhs: Box<Node<'a>>,
    rhs: Box<Node<'a>>,
}

impl<'a> Equation<'a> {
    /// Create an equation from both sides
    pub fn new<L, R>(lhs: L, rhs: R) -> Self
    where
        L: Into<Node<'a>>,
        R: Into<Node<'a>>,
    {
        Equation {
            lhs: Box::new(lhs.into()),
            rhs: Box::new(rhs.into()),
        }
    }

    /// The left side
    pub fn lhs(&self) -> &Node<'a> {
        &self.lhs
    }

    /// The right side
    pub fn rhs(&self) -> &Node<'a> {
        &self.rhs
    }
}

/// A node of the parsed tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node<'a> {
    /// A numeric literal, including any folded prefix sign
    Number(f64),
    /// A free symbol, e.g. `x` or `Delta`
    Variable(&'a str),
    /// A control word that isn't a known function or greek letter, kept verbatim
    Keyword(&'a str),
    /// An infix operation
    Operator(BinaryOp<'a>),
    /// A prefix sign on a non-numeric operand
    UnaryOperator(UnaryOp<'a>),
    /// A function application
    Function(Function<'a>),
    /// A subscripted base
    Subscript(Subscript<'a>),
    /// An equation
    Equation(Equation<'a>),
}

impl<'a> Node<'a> {
    /// Whether this is a number with a negative sign
    pub fn is_negative_number(&self) -> bool {
        matches!(self, Node::Number(val) if *val < 0.0)
    }

    /// The operation if this is an infix operator node
    pub fn as_operator(&self) -> Option<&BinaryOp<'a>> {
        match self {
            Node::Operator(op) => Some(op),
            _ => None,
        }
    }
}

impl From<f64> for Node<'_> {
    fn from(val: f64) -> Self {
        Node::Number(val)
    }
}

// macro to derive from for component types
macro_rules! node_from {
    ($from:ty => $to:ident) => {
        impl<'a> From<$from> for Node<'a> {
            fn from(inp: $from) -> Self {
                Node::$to(inp)
            }
        }
    };
}

node_from!(BinaryOp<'a> => Operator);
node_from!(UnaryOp<'a> => UnaryOperator);
node_from!(Function<'a> => Function);
node_from!(Subscript<'a> => Subscript);
node_from!(Equation<'a> => Equation);

#[cfg(test)]
mod tests {
    use super::{BinaryOp, Node, Operator, Sign, UnaryOp};

    #[test]
    fn negative_numbers() {
        assert!(Node::Number(-1.0).is_negative_number());
        assert!(!Node::Number(-0.0).is_negative_number());
        assert!(!Node::Number(2.0).is_negative_number());
        assert!(!Node::Variable("x").is_negative_number());
    }

    #[test]
    fn flags_default_off() {
        let op = BinaryOp::new(Operator::Minus, 1.0, Node::Variable("x"));
        assert!(!op.is_right_distributive());
        assert!(op.right_distributive(true).is_right_distributive());
        let unary = UnaryOp::new(Sign::Minus, Node::Variable("x"));
        assert!(!unary.is_right_distributive());
    }

    #[test]
    fn signs_as_operators() {
        assert_eq!(Operator::Minus.as_sign(), Some(Sign::Minus));
        assert_eq!(Operator::Exponent.as_sign(), None);
        assert_eq!(Operator::from(Sign::Plus), Operator::Plus);
    }
}
