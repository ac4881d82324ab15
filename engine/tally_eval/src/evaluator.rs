// Bottom-up evaluation of the expression tree over f64.

use tally_ast::{BinaryOperator, ExpressionNode, UnaryOperator};

use crate::error::EvalError;

/// Evaluate a parsed expression to a single `f64`.
///
/// The left spine of binary chains is unwound iteratively, so evaluation
/// depth tracks the expression's nesting depth (which the parser bounds)
/// rather than the length of `1 + 1 + ... + 1` chains.
///
/// # Errors
///
/// Returns an [`EvalError`] for division or modulo by zero and for factorial
/// of a negative or non-integer operand.
pub fn evaluate_expression(expr: &ExpressionNode) -> Result<f64, EvalError> {
    let mut pending: Vec<(BinaryOperator, &ExpressionNode)> = Vec::new();
    let mut node = expr;
    while let ExpressionNode::Binary(binary) = node {
        pending.push((binary.operator, &binary.right));
        node = &binary.left;
    }

    let mut value = match node {
        ExpressionNode::Literal(literal) => literal.value(),
        ExpressionNode::Unary(unary) => {
            apply_unary(unary.operator, evaluate_expression(&unary.operand)?)?
        }
        ExpressionNode::Binary(_) => unreachable!("left spine fully unwound"),
    };

    while let Some((operator, right)) = pending.pop() {
        value = apply_binary(operator, value, evaluate_expression(right)?)?;
    }

    Ok(value)
}

fn apply_binary(operator: BinaryOperator, left: f64, right: f64) -> Result<f64, EvalError> {
    match operator {
        BinaryOperator::Add => Ok(left + right),
        BinaryOperator::Sub => Ok(left - right),
        BinaryOperator::Mul => Ok(left * right),
        BinaryOperator::Div => {
            if right == 0.0 {
                log::error!("division by zero: {left} / {right}");
                Err(EvalError::DivisionByZero)
            } else {
                Ok(left / right)
            }
        }
        BinaryOperator::Mod => {
            if right == 0.0 {
                log::error!("modulo by zero: {left} % {right}");
                Err(EvalError::ModuloByZero)
            } else {
                Ok(left % right)
            }
        }
        BinaryOperator::Pow => Ok(left.powf(right)),
        BinaryOperator::Average => Ok((left + right) / 2.0),
        BinaryOperator::Min => Ok(left.min(right)),
        BinaryOperator::Max => Ok(left.max(right)),
    }
}

fn apply_unary(operator: UnaryOperator, operand: f64) -> Result<f64, EvalError> {
    match operator {
        UnaryOperator::Negate => Ok(-operand),
        UnaryOperator::Factorial => factorial(operand),
    }
}

/// The product 1 * 2 * ... * n, with 0! = 1.
///
/// The operand must be a non-negative integer value at the moment factorial
/// is applied. The loop stops once the accumulator overflows to infinity,
/// so huge integral operands terminate promptly.
fn factorial(operand: f64) -> Result<f64, EvalError> {
    if operand < 0.0 {
        log::error!("factorial of a negative value: {operand}");
        return Err(EvalError::FactorialOfNegative { operand });
    }
    if !operand.is_finite() || operand.fract() != 0.0 {
        log::error!("factorial of a non-integer value: {operand}");
        return Err(EvalError::FactorialNotInteger { operand });
    }

    let n = operand as u64;
    let mut product = 1.0_f64;
    for i in 2..=n {
        product *= i as f64;
        if product.is_infinite() {
            break;
        }
    }
    Ok(product)
}
