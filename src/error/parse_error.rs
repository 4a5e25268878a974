#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenizing or tree building.
pub enum ParseError {
    /// The expression contained no tokens at all.
    EmptyExpression,
    /// A piece of input did not match any lexical class.
    ///
    /// Range violations are reported as [`ParseError::LiteralOutOfRange`]
    /// instead. Use [`ParseError::is_invalid_token`] to catch both.
    InvalidToken {
        /// The offending text.
        token:    String,
        /// Byte offset of the offending text in the source.
        position: usize,
    },
    /// A literal was well formed but outside the configured range.
    ///
    /// This is an invalid token carrying the bounds it violated; matching on
    /// `InvalidToken { .. }` alone misses it, so callers that treat every bad
    /// token alike should test [`ParseError::is_invalid_token`].
    LiteralOutOfRange {
        /// The parsed literal.
        value:    i64,
        /// Smallest accepted literal.
        min:      i64,
        /// Largest accepted literal.
        max:      i64,
        /// Byte offset of the literal in the source.
        position: usize,
    },
    /// An operator was reduced while fewer than two operands were pending.
    InsufficientOperands,
    /// A parenthesis was never closed, or closed without being opened.
    UnbalancedParentheses,
    /// More or fewer than one operand remained after full reduction.
    MalformedExpression,
    /// The tree would be taller than the configured maximum.
    TreeTooDeep {
        /// The configured maximum height.
        max_depth: usize,
    },
}

impl ParseError {
    /// Returns `true` for every error raised by the tokenizer on bad input,
    /// including range violations.
    ///
    /// # Example
    /// ```
    /// use exprtree::error::ParseError;
    ///
    /// let err = ParseError::LiteralOutOfRange { value:    31,
    ///                                           min:      1,
    ///                                           max:      30,
    ///                                           position: 0, };
    /// assert!(err.is_invalid_token());
    /// assert!(!ParseError::UnbalancedParentheses.is_invalid_token());
    /// ```
    #[must_use]
    pub const fn is_invalid_token(&self) -> bool {
        matches!(self,
                 Self::InvalidToken { .. } | Self::LiteralOutOfRange { .. })
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Parse error: The expression is empty."),

            Self::InvalidToken { token, position } => {
                write!(f, "Parse error at {position}: Invalid token '{token}'.")
            },

            Self::LiteralOutOfRange { value,
                                      min,
                                      max,
                                      position, } => write!(f,
                                                            "Parse error at {position}: Literal {value} is outside the allowed range {min}..={max}."),

            Self::InsufficientOperands => {
                write!(f, "Parse error: Not enough operands for operator.")
            },

            Self::UnbalancedParentheses => write!(f, "Parse error: Unbalanced parentheses."),

            Self::MalformedExpression => write!(f,
                                                "Parse error: Malformed expression. Check for missing operators or operands."),

            Self::TreeTooDeep { max_depth } => write!(f,
                                                      "Parse error: Expression is nested deeper than the limit of {max_depth} levels."),
        }
    }
}

impl std::error::Error for ParseError {}
