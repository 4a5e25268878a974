use tracing::trace;

use crate::{
    ast::{BinaryOperator, Node},
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// An entry of the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackEntry {
    /// A pending binary operator.
    Operator(BinaryOperator),
    /// An open parenthesis acting as a barrier for reductions.
    LParen,
}

/// A finished subtree on the operand stack, together with its height.
#[derive(Debug)]
pub struct Operand {
    /// The subtree.
    pub node:   Node,
    /// Height of `node`; leaves have height 1.
    pub height: usize,
}

impl Operand {
    /// Wraps a leaf node.
    ///
    /// # Errors
    /// `TreeTooDeep` if `max_depth` is zero.
    pub fn leaf(node: Node, max_depth: usize) -> ParseResult<Self> {
        if max_depth == 0 {
            return Err(ParseError::TreeTooDeep { max_depth });
        }
        Ok(Self { node, height: 1 })
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for literals, the variable and parentheses.
///
/// # Example
/// ```
/// use exprtree::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::utils::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Percent),
///            Some(BinaryOperator::Mod));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}

/// Decides whether the pending operator `top` must be reduced before
/// `incoming` is pushed.
///
/// `top` is reduced if it binds tighter, or equally tight when `incoming` is
/// left-associative.
///
/// # Example
/// ```
/// use exprtree::{ast::BinaryOperator::*, interpreter::parser::utils::should_reduce};
///
/// assert!(should_reduce(Mul, Add));
/// assert!(should_reduce(Sub, Add));
/// assert!(!should_reduce(Add, Mul));
/// assert!(!should_reduce(Pow, Pow));
/// ```
#[must_use]
pub const fn should_reduce(top: BinaryOperator, incoming: BinaryOperator) -> bool {
    let (top, new) = (top.precedence(), incoming.precedence());
    top > new || (top == new && !incoming.is_right_associative())
}

/// Pops two operands, combines them under `op` and pushes the result.
///
/// The first popped operand becomes the right child, the second the left
/// child.
///
/// # Errors
/// - `InsufficientOperands` if fewer than two operands are pending.
/// - `TreeTooDeep` if the combined subtree exceeds `max_depth`.
pub fn reduce(operands: &mut Vec<Operand>, op: BinaryOperator, max_depth: usize) -> ParseResult<()> {
    let (Some(right), Some(left)) = (operands.pop(), operands.pop()) else {
        return Err(ParseError::InsufficientOperands);
    };

    let height = 1 + left.height.max(right.height);
    if height > max_depth {
        return Err(ParseError::TreeTooDeep { max_depth });
    }

    trace!(%op, height, "reduced operator");
    operands.push(Operand { node: Node::internal(op, left.node, right.node),
                            height });
    Ok(())
}
