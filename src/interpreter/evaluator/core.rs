use tracing::{debug, instrument};

use crate::{
    ast::{Leaf, Node},
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The only state an expression needs is the value bound to the variable `x`.
/// A context never mutates the trees it evaluates, so one context can evaluate
/// any number of trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// The value substituted for `x`.
    pub x: i64,
}

impl Context {
    /// Creates a context binding `x`.
    #[must_use]
    pub const fn new(x: i64) -> Self {
        Self { x }
    }

    /// Evaluates a tree and returns the resulting value.
    ///
    /// Literals evaluate to themselves and the variable to `x`. Internal nodes
    /// evaluate the left subtree, then the right subtree, then apply the
    /// operator through [`Context::eval_binary`]. The first error aborts the
    /// walk.
    ///
    /// # Parameters
    /// - `node`: Root of the (sub)tree to evaluate.
    ///
    /// # Returns
    /// The integer value of the tree.
    pub fn eval(&self, node: &Node) -> EvalResult<i64> {
        match node {
            Node::Leaf(Leaf::Literal(value)) => Ok(*value),
            Node::Leaf(Leaf::Variable) => Ok(self.x),
            Node::Internal { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right)
            },
        }
    }
}

/// Evaluates `tree` with the variable bound to `x`.
///
/// # Errors
/// - `DivisionByZero` / `ModuloByZero` when a right operand of `/` or `%` is
///   zero.
/// - `NegativeExponent` when the exponent of `^` is negative.
/// - `Overflow` when an intermediate value does not fit in an `i64`.
///
/// # Example
/// ```
/// use exprtree::{
///     config::Config,
///     interpreter::{evaluator::core::evaluate, parser::core::parse},
/// };
///
/// let tree = parse("3 + 4 * x", &Config::default()).unwrap();
/// assert_eq!(evaluate(&tree, 5), Ok(23));
/// ```
#[instrument(level = "debug", skip(tree))]
pub fn evaluate(tree: &Node, x: i64) -> EvalResult<i64> {
    let value = Context::new(x).eval(tree)?;
    debug!(value, "evaluated expression tree");
    Ok(value)
}
