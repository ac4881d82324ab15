use thiserror::Error;

/// Represents all domain errors that can occur during evaluation.
///
/// Messages are user-facing; callers surface them verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Attempted division by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// Attempted modulo by zero.
    #[error("Modulo by zero.")]
    ModuloByZero,
    /// Factorial applied to a negative value.
    #[error("Factorial of a negative value: {operand}.")]
    FactorialOfNegative { operand: f64 },
    /// Factorial applied to a fractional (or non-finite) value.
    #[error("Factorial requires an integer operand, got {operand}.")]
    FactorialNotInteger { operand: f64 },
}
