use crate::interpreter::lexer::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while matching tokens to the grammar.
pub enum SyntaxError {
    /// The current token is not the one the grammar requires here.
    UnexpectedToken {
        /// The token kind the grammar required.
        expected: TokenKind,
        /// The token actually found.
        found:    Token,
        /// Byte offset of the found token in the line.
        position: usize,
    },
    /// Parentheses are nested deeper than the evaluator allows.
    NestingTooDeep {
        /// The maximum nesting depth.
        limit:    usize,
        /// Byte offset of the opening parenthesis that exceeded the limit.
        position: usize,
    },
}

impl SyntaxError {
    /// Byte offset in the line at which parsing failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. } | Self::NestingTooDeep { position, .. } => {
                *position
            },
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    position, } => write!(f,
                                                          "Error at position {position}: Invalid syntax, expected {expected} but found {}.",
                                                          found.kind()),
            Self::NestingTooDeep { limit, position } => write!(f,
                                                               "Error at position {position}: Parentheses nested deeper than {limit} levels."),
        }
    }
}

impl std::error::Error for SyntaxError {}
