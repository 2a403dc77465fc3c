#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while lexing a line.
pub enum LexError {
    /// Found a character that does not start any token.
    UnknownCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the line.
        position:  usize,
    },
    /// An integer literal does not fit in a signed 64-bit integer.
    LiteralTooLarge {
        /// The digits of the literal, as written.
        literal:  String,
        /// Byte offset of the literal in the line.
        position: usize,
    },
}

impl LexError {
    /// Byte offset in the line at which lexing failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnknownCharacter { position, .. } | Self::LiteralTooLarge { position, .. } => {
                *position
            },
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCharacter { character, position } => {
                write!(f,
                       "Error at position {position}: Unknown character {character:?}.")
            },
            Self::LiteralTooLarge { literal, position } => {
                write!(f, "Error at position {position}: Literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}
