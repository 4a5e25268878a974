use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates an exponentiation operation.
    ///
    /// The result is built by multiplying `base` into an accumulator
    /// `exponent` times with checked arithmetic, so every representable result
    /// is exact. Bases `0`, `1` and `-1` are answered directly; for any other
    /// base the accumulator overflows after at most 63 steps, which bounds the
    /// loop.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    ///
    /// # Returns
    /// `base ^ exponent`, with `0 ^ 0 == 1`.
    ///
    /// # Errors
    /// - `NegativeExponent` if `exponent < 0`.
    /// - `Overflow` if the result does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use exprtree::{error::RuntimeError, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_pow(3, 39), Ok(4_052_555_153_018_976_267));
    /// assert_eq!(Context::eval_pow(-1, 1_000_001), Ok(-1));
    /// assert_eq!(Context::eval_pow(2, -2),
    ///            Err(RuntimeError::NegativeExponent { exponent: -2 }));
    /// ```
    pub fn eval_pow(base: i64, exponent: i64) -> EvalResult<i64> {
        if exponent < 0 {
            return Err(RuntimeError::NegativeExponent { exponent });
        }

        match base {
            0 => return Ok(i64::from(exponent == 0)),
            1 => return Ok(1),
            -1 => return Ok(if exponent % 2 == 0 { 1 } else { -1 }),
            _ => {},
        }

        let mut result: i64 = 1;
        for _ in 0..exponent {
            result = result.checked_mul(base)
                           .ok_or(RuntimeError::Overflow { op: BinaryOperator::Pow })?;
        }
        Ok(result)
    }
}
