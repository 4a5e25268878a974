use tracing::{debug, instrument};

use crate::{
    ast::Node,
    config::{Config, ParserConfig},
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::utils::{Operand, StackEntry, reduce, should_reduce, token_to_binary_operator},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Builds an expression tree from a token sequence.
///
/// The tokens are consumed in a single left-to-right pass using two stacks:
/// finished subtrees go onto the operand stack, pending operators and open
/// parentheses onto the operator stack. Before an operator is pushed, every
/// pending operator that binds at least as tightly is reduced into a subtree.
/// `^` does not reduce an equal-precedence `^`, which makes it
/// right-associative. No postfix sequence is materialized.
///
/// # Parameters
/// - `tokens`: Tokens as produced by [`tokenize`].
/// - `config`: Builder settings; `max_depth` bounds the tree height.
///
/// # Returns
/// The root of the tree.
///
/// # Errors
/// - `InsufficientOperands` if an operator lacks one of its operands.
/// - `UnbalancedParentheses` for a `)` without `(` or an unclosed `(`.
/// - `MalformedExpression` if not exactly one tree remains at the end.
/// - `TreeTooDeep` if the tree would exceed `max_depth`.
///
/// # Example
/// ```
/// use exprtree::{
///     config::ParserConfig,
///     interpreter::{lexer::Token, parser::core::build},
/// };
///
/// let tokens = [Token::Integer(2), Token::Caret, Token::Integer(3), Token::Caret, Token::Integer(2)];
/// let tree = build(&tokens, &ParserConfig::default()).unwrap();
/// assert_eq!(tree.to_string(), "(^ 2 (^ 3 2))");
/// ```
#[instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn build(tokens: &[Token], config: &ParserConfig) -> ParseResult<Node> {
    let max_depth = config.max_depth;
    let mut operands: Vec<Operand> = Vec::new();
    let mut operators: Vec<StackEntry> = Vec::new();

    for token in tokens {
        match token {
            Token::Integer(value) => {
                operands.push(Operand::leaf(Node::literal(*value), max_depth)?);
            },
            Token::Variable => operands.push(Operand::leaf(Node::variable(), max_depth)?),
            Token::LParen => operators.push(StackEntry::LParen),
            Token::RParen => loop {
                match operators.pop() {
                    Some(StackEntry::LParen) => break,
                    Some(StackEntry::Operator(op)) => reduce(&mut operands, op, max_depth)?,
                    None => return Err(ParseError::UnbalancedParentheses),
                }
            },
            other => {
                if let Some(op) = token_to_binary_operator(other) {
                    while let Some(StackEntry::Operator(top)) = operators.last().copied()
                          && should_reduce(top, op)
                    {
                        operators.pop();
                        reduce(&mut operands, top, max_depth)?;
                    }
                    operators.push(StackEntry::Operator(op));
                }
            },
        }
    }

    while let Some(entry) = operators.pop() {
        match entry {
            StackEntry::Operator(op) => reduce(&mut operands, op, max_depth)?,
            StackEntry::LParen => return Err(ParseError::UnbalancedParentheses),
        }
    }

    let root = operands.pop().ok_or(ParseError::MalformedExpression)?;
    if !operands.is_empty() {
        return Err(ParseError::MalformedExpression);
    }

    debug!(tree = %root.node, height = root.height, "built expression tree");
    Ok(root.node)
}

/// Tokenizes and builds `source` in one step.
///
/// # Errors
/// Any error of [`tokenize`] or [`build`].
///
/// # Example
/// ```
/// use exprtree::{config::Config, interpreter::parser::core::parse};
///
/// let tree = parse("x * 2 + 1", &Config::default()).unwrap();
/// assert_eq!(tree.to_string(), "(+ (* x 2) 1)");
/// ```
pub fn parse(source: &str, config: &Config) -> ParseResult<Node> {
    let tokens = tokenize(source, &config.lexer)?;
    build(&tokens, &config.parser)
}
