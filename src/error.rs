/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing an expression or
/// building its tree. Parse errors include unknown characters, literals outside
/// the configured range, operators without operands and mismatched
/// parentheses.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a tree for a
/// bound value of the variable: division or modulo by zero, negative exponents
/// and integer overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
