use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// `^` is routed to [`Context::eval_pow`], everything else to
    /// [`Context::eval_scalar_op`].
    ///
    /// # Example
    /// ```
    /// use exprtree::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Add, 3, 4), Ok(7));
    /// assert_eq!(Context::eval_binary(BinaryOperator::Pow, 2, 10), Ok(1024));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
        match op {
            BinaryOperator::Pow => Self::eval_pow(left, right),
            _ => Self::eval_scalar_op(op, left, right),
        }
    }

    /// Evaluates `+`, `-`, `*`, `/` and `%`.
    ///
    /// All operations are checked. Division and remainder truncate toward
    /// zero; a zero divisor is rejected before the left operand is looked at,
    /// so `0 / 0` is a division by zero as well.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The computed value, or `DivisionByZero`, `ModuloByZero` or `Overflow`.
    ///
    /// # Example
    /// ```
    /// use exprtree::{
    ///     ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::Context,
    /// };
    ///
    /// assert_eq!(Context::eval_scalar_op(BinaryOperator::Div, -7, 2), Ok(-3));
    /// assert_eq!(Context::eval_scalar_op(BinaryOperator::Mod, -7, 2), Ok(-1));
    /// assert_eq!(Context::eval_scalar_op(BinaryOperator::Mod, 5, 0),
    ///            Err(RuntimeError::ModuloByZero));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

        let result = match op {
            Add => left.checked_add(right),
            Sub => left.checked_sub(right),
            Mul => left.checked_mul(right),
            Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                left.checked_div(right)
            },
            Mod => {
                if right == 0 {
                    return Err(RuntimeError::ModuloByZero);
                }
                // `i64::MIN % -1` is mathematically zero.
                Some(left.wrapping_rem(right))
            },
            Pow => return Self::eval_pow(left, right),
        };

        result.ok_or(RuntimeError::Overflow { op })
    }
}
