use tracing::{debug, instrument};

use crate::ast::{BinaryOperator, Node};

/// Rewrites every `x * A` into `A * x`, in place.
///
/// The tree is walked in post-order: both subtrees are rewritten before the
/// rule is checked at the current node. A `Mul` node whose left child is the
/// variable leaf has its children swapped. Nothing else changes, so the value
/// of the tree is preserved and a second pass performs no swaps. `x * x` is
/// left as it is.
///
/// # Parameters
/// - `tree`: Root of the tree to rewrite.
///
/// # Returns
/// The number of nodes whose children were swapped.
///
/// # Example
/// ```
/// use exprtree::{
///     config::Config,
///     interpreter::{parser::core::parse, transformer::transform},
/// };
///
/// let mut tree = parse("x * 2 + 1", &Config::default()).unwrap();
/// assert_eq!(transform(&mut tree), 1);
/// assert_eq!(tree.to_string(), "(+ (* 2 x) 1)");
/// assert_eq!(transform(&mut tree), 0);
/// ```
#[instrument(level = "debug", skip_all)]
pub fn transform(tree: &mut Node) -> usize {
    let swaps = rewrite(tree);
    debug!(swaps, tree = %tree, "transformed expression tree");
    swaps
}

fn rewrite(node: &mut Node) -> usize {
    let Node::Internal { op, left, right } = node else {
        return 0;
    };

    let mut swaps = rewrite(left) + rewrite(right);

    if *op == BinaryOperator::Mul && left.is_variable() && !right.is_variable() {
        std::mem::swap(left, right);
        swaps += 1;
    }
    swaps
}
