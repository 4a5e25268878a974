use std::ops::RangeInclusive;

/// Default maximum tree height accepted by the tree builder.
pub const DEFAULT_MAX_DEPTH: usize = 512;
/// Literal range enforced by [`Config::strict`].
pub const STRICT_LITERAL_RANGE: RangeInclusive<i64> = 1..=30;

/// How the tokenizer splits its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenizeMode {
    /// Scan character by character. Tokens may touch, as in `3+4*x`.
    #[default]
    Scan,
    /// Split on whitespace; every field must be exactly one token, as in
    /// `3 + 4 * x`.
    Fields,
}

/// Settings for the tokenizer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexerConfig {
    /// Splitting strategy.
    pub mode:          TokenizeMode,
    /// When set, integer literals outside this inclusive range are rejected.
    pub literal_range: Option<RangeInclusive<i64>>,
}

/// Settings for the tree builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum height of the built tree. Evaluation, transformation and
    /// rendering recurse once per level, so this bounds their stack use.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

/// Complete configuration of the pipeline.
///
/// ## Example
/// ```
/// use exprtree::config::{Config, TokenizeMode};
///
/// let config = Config::strict();
/// assert_eq!(config.lexer.mode, TokenizeMode::Fields);
/// assert_eq!(config.lexer.literal_range, Some(1..=30));
///
/// let relaxed = Config::default().with_literal_range(0, 100);
/// assert_eq!(relaxed.lexer.mode, TokenizeMode::Scan);
/// assert_eq!(relaxed.lexer.literal_range, Some(0..=100));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Tokenizer settings.
    pub lexer:  LexerConfig,
    /// Tree builder settings.
    pub parser: ParserConfig,
}

impl Config {
    /// Whitespace-delimited tokens with literals bounded to `1..=30`.
    #[must_use]
    pub fn strict() -> Self {
        Self { lexer:  LexerConfig { mode:          TokenizeMode::Fields,
                                     literal_range: Some(STRICT_LITERAL_RANGE), },
               parser: ParserConfig::default(), }
    }

    /// Returns `self` with the given tokenize mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: TokenizeMode) -> Self {
        self.lexer.mode = mode;
        self
    }

    /// Returns `self` with literals restricted to `min..=max`.
    #[must_use]
    pub fn with_literal_range(mut self, min: i64, max: i64) -> Self {
        self.lexer.literal_range = Some(min..=max);
        self
    }

    /// Returns `self` with a different maximum tree height.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.parser.max_depth = max_depth;
        self
    }
}
