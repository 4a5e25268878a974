/// Core evaluation logic and context management.
///
/// Contains the recursive tree walk and the [`Context`](core::Context) that
/// binds the variable.
pub mod core;

/// Binary operator evaluation.
///
/// Implements addition, subtraction, multiplication, division and modulo with
/// checked integer arithmetic.
pub mod binary;

/// Exponentiation.
///
/// Computes `^` by repeated integer multiplication.
pub mod power;
