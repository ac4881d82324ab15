// Abstract syntax tree definitions for arithmetic expressions.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExpressionNode {
    Literal(LiteralNode),
    Binary(Box<BinaryExpressionNode>),
    Unary(Box<UnaryExpressionNode>),
}

/// A number literal. Integers and fractional literals are lexed separately
/// but both evaluate to `f64`; see [`LiteralNode::value`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LiteralNode {
    Int(i64),
    Float(f64),
}

impl LiteralNode {
    /// The numeric value of the literal, promoted to `f64`.
    pub fn value(&self) -> f64 {
        match self {
            LiteralNode::Int(n) => *n as f64,
            LiteralNode::Float(x) => *x,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryExpressionNode {
    pub left: ExpressionNode,
    pub operator: BinaryOperator,
    pub right: ExpressionNode,
}

/// Binary operators, strongest-binding tier first:
/// `@ & $`, then `^`, then `* / %`, then `+ -`.
///
/// Every tier is left-associative, including `^`: repeated powers fold the
/// leftmost pair first, so `2 ^ 3 ^ 2` groups as `(2 ^ 3) ^ 2`. This matches
/// the engine's historical leftmost-reduction behavior and deviates from the
/// usual mathematical right-grouping on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Average,
    Min,
    Max,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Mod => "%",
            BinaryOperator::Pow => "^",
            BinaryOperator::Average => "@",
            BinaryOperator::Min => "&",
            BinaryOperator::Max => "$",
        };
        write!(f, "{symbol}")
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnaryExpressionNode {
    pub operator: UnaryOperator,
    pub operand: ExpressionNode,
}

/// Unary operators. `!` (postfix) binds tighter than `~` (prefix), so
/// `~3!` negates the factorial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOperator {
    Negate,
    Factorial,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            UnaryOperator::Negate => "~",
            UnaryOperator::Factorial => "!",
        };
        write!(f, "{symbol}")
    }
}

impl ExpressionNode {
    /// Convenience constructor for binary nodes.
    pub fn binary(left: ExpressionNode, operator: BinaryOperator, right: ExpressionNode) -> Self {
        ExpressionNode::Binary(Box::new(BinaryExpressionNode {
            left,
            operator,
            right,
        }))
    }

    /// Convenience constructor for unary nodes.
    pub fn unary(operator: UnaryOperator, operand: ExpressionNode) -> Self {
        ExpressionNode::Unary(Box::new(UnaryExpressionNode { operator, operand }))
    }
}
