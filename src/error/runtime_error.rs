use crate::ast::BinaryOperator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero,
    /// Attempted modulo by zero.
    ModuloByZero,
    /// The exponent of `^` evaluated to a negative number.
    NegativeExponent {
        /// The evaluated exponent.
        exponent: i64,
    },
    /// Arithmetic operation overflowed `i64`.
    Overflow {
        /// The operator whose result did not fit.
        op: BinaryOperator,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Runtime error: Division by zero."),
            Self::ModuloByZero => write!(f, "Runtime error: Modulo by zero."),
            Self::NegativeExponent { exponent } => write!(f,
                                                          "Runtime error: Negative exponent {exponent} is not supported."),
            Self::Overflow { op } => write!(f,
                                            "Runtime error: Integer overflow while computing '{op}'."),
        }
    }
}

impl std::error::Error for RuntimeError {}
