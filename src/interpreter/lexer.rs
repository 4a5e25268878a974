use logos::Logos;
use tracing::{debug, instrument};

use crate::{
    config::{LexerConfig, TokenizeMode},
    error::ParseError,
    interpreter::parser::core::ParseResult,
};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the expression grammar.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// The variable `x`.
    #[token("x")]
    Variable,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    /// Spaces, tabs, feeds and line breaks.
    #[regex(r"[ \t\f\r\n]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Variable => write!(f, "x"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed value.
/// - `None`: If the digit run does not fit in an `i64`, which makes the lexer
///   report an error for this slice.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Converts an expression into its token sequence.
///
/// In [`TokenizeMode::Scan`] the input is scanned character by character and
/// tokens may touch each other. In [`TokenizeMode::Fields`] the input is first
/// split on whitespace and every field must form exactly one token. Both modes
/// share one definition of whitespace (space, tab, form feed, carriage return,
/// newline) and yield the same sequence when tokens are separated by it. Any
/// other character, including non-ASCII spaces, is an invalid token.
///
/// # Parameters
/// - `source`: The raw expression.
/// - `config`: Tokenizer settings, including the optional literal range.
///
/// # Returns
/// The tokens in source order.
///
/// # Errors
/// - `InvalidToken` for characters (or fields) that are not part of the
///   grammar, and for literals too large for `i64`.
/// - `LiteralOutOfRange` when a literal violates the configured range.
/// - `EmptyExpression` when no tokens were produced.
///
/// # Example
/// ```
/// use exprtree::{
///     config::LexerConfig,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("3+x", &LexerConfig::default()).unwrap();
/// assert_eq!(tokens, vec![Token::Integer(3), Token::Plus, Token::Variable]);
///
/// assert!(tokenize("3 # 4", &LexerConfig::default()).is_err());
/// ```
#[instrument(level = "debug", skip(config), fields(mode = ?config.mode))]
pub fn tokenize(source: &str, config: &LexerConfig) -> ParseResult<Vec<Token>> {
    let spanned = match config.mode {
        TokenizeMode::Scan => scan(source, 0)?,
        TokenizeMode::Fields => split_fields(source)?,
    };

    if spanned.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    if let Some(range) = &config.literal_range {
        for (token, position) in &spanned {
            if let Token::Integer(value) = token
               && !range.contains(value)
            {
                return Err(ParseError::LiteralOutOfRange { value:    *value,
                                                           min:      *range.start(),
                                                           max:      *range.end(),
                                                           position: *position, });
            }
        }
    }

    debug!(count = spanned.len(), "tokenized expression");
    Ok(spanned.into_iter().map(|(token, _)| token).collect())
}

/// Scans `source` with the lexer, pairing each token with its byte offset.
/// `offset` is added to every position so that fields report offsets into the
/// full expression.
fn scan(source: &str, offset: usize) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = offset + lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => {
                return Err(ParseError::InvalidToken { token: lexer.slice().to_string(),
                                                      position });
            },
        }
    }

    Ok(tokens)
}

/// Tokenizes whitespace-delimited fields, each of which must be one token.
///
/// Fields are separated by the same characters the lexer skips (see
/// [`is_separator`]), so both modes agree on what counts as whitespace.
fn split_fields(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut position = 0;

    for field in source.split(is_separator) {
        let start = position;
        // Separators are single-byte ASCII characters.
        position += field.len() + 1;
        if field.is_empty() {
            continue;
        }

        let invalid = || ParseError::InvalidToken { token:    field.to_string(),
                                                    position: start, };

        let mut scanned = scan(field, start).map_err(|_| invalid())?;
        if scanned.len() != 1 {
            return Err(invalid());
        }
        tokens.push(scanned.remove(0));
    }

    Ok(tokens)
}

/// Whitespace understood by both tokenize modes: space, tab, form feed,
/// carriage return and newline. Matches the `Ignored` token's pattern.
const fn is_separator(ch: char) -> bool {
    ch.is_ascii_whitespace()
}
