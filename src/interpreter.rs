/// The evaluator module computes the value of an expression tree.
///
/// The evaluator walks the tree with the variable bound to a caller-supplied
/// integer and applies each operator with checked integer arithmetic.
///
/// # Responsibilities
/// - Evaluates literals, the variable and all six binary operators.
/// - Reports division or modulo by zero, negative exponents and overflow.
/// - Never mutates the tree.
pub mod evaluator;
/// The lexer module tokenizes expressions for further parsing.
///
/// The lexer (tokenizer) reads the raw expression and produces the sequence of
/// integer literals, the variable, operators and parentheses it contains. This
/// is the first stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input into tokens, either by scanning characters or by
///   splitting whitespace-delimited fields.
/// - Enforces the optional literal range.
/// - Reports unknown characters and empty input.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The builder processes the token sequence with an operand stack and an
/// operator stack, reducing pending operators according to precedence and
/// associativity.
///
/// # Responsibilities
/// - Converts tokens into a strict binary tree.
/// - Validates operand counts and parenthesis balance.
/// - Bounds the height of the resulting tree.
pub mod parser;
/// Rotated, indented text rendering of expression trees.
pub mod renderer;
/// The `x * A` to `A * x` rewrite.
pub mod transformer;
