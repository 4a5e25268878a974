use std::fmt;

use crate::ast::Node;

/// Number of spaces each tree level is indented by.
pub const INDENT_WIDTH: usize = 4;

/// Renders a tree as indented text, rotated a quarter turn.
///
/// Each node occupies one line holding its label, indented by
/// [`INDENT_WIDTH`] spaces per level of depth. The right subtree is printed
/// above its parent and the left subtree below, so the root sits at the left
/// margin and the tree reads like a diagram turned 90° counter-clockwise.
/// Every line, including the last, ends with `\n`.
///
/// # Example
/// ```
/// use exprtree::{
///     config::Config,
///     interpreter::{parser::core::parse, renderer::render},
/// };
///
/// let tree = parse("1 - x", &Config::default()).unwrap();
/// assert_eq!(render(&tree), "    x\n-\n    1\n");
/// ```
#[must_use]
pub fn render(tree: &Node) -> String {
    Rotated(tree).to_string()
}

/// Display adapter writing the rotated form of a tree.
struct Rotated<'a>(&'a Node);

impl fmt::Display for Rotated<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_node(self.0, 0, f)
    }
}

fn render_node(node: &Node, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if let Node::Internal { right, .. } = node {
        render_node(right, depth + 1, f)?;
    }

    writeln!(f, "{:indent$}{}", "", node.label(), indent = depth * INDENT_WIDTH)?;

    if let Node::Internal { left, .. } = node {
        render_node(left, depth + 1, f)?;
    }
    Ok(())
}
