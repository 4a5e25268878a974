/// Tree construction.
///
/// Contains the shunting-yard style builder that turns a token sequence into
/// an expression tree, and the [`ParseResult`](core::ParseResult) alias used by
/// the tokenizer and the builder.
pub mod core;

/// Stack helpers for the builder.
///
/// Defines the operator stack entries, the reduction step that combines two
/// operands under an operator, and the mapping from tokens to operators.
pub mod utils;
