use std::fmt;

use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in one input line.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Only integer literals carry a value; every other token stands for the
/// single character it was lexed from.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r" +")]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    Div,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Produced once the input is exhausted, and on every request after that.
    EndOfInput,
}

/// The kind of a [`Token`], without its payload.
///
/// Syntax errors report kinds rather than tokens on the expected side, since
/// `eat` only ever asks for a kind.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// An integer literal.
    Integer,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// The end of the line.
    EndOfInput,
}

impl Token {
    /// Returns the kind of this token.
    ///
    /// # Example
    /// ```
    /// use intcalc::interpreter::lexer::{Token, TokenKind};
    ///
    /// assert_eq!(Token::Integer(7).kind(), TokenKind::Integer);
    /// assert_eq!(Token::LParen.kind(), TokenKind::LParen);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::Integer,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Mul => TokenKind::Mul,
            Self::Div => TokenKind::Div,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::EndOfInput => TokenKind::EndOfInput,
        }
    }

    /// Returns the lexeme this token was produced from.
    ///
    /// Integer literals are rendered in canonical decimal form, so `007`
    /// comes back as `7`. The end-of-input token has no lexeme and renders
    /// as `None`.
    #[must_use]
    pub fn symbol(&self) -> String {
        match self {
            Self::Integer(value) => value.to_string(),
            Self::Plus => "+".to_string(),
            Self::Minus => "-".to_string(),
            Self::Mul => "*".to_string(),
            Self::Div => "/".to_string(),
            Self::LParen => "(".to_string(),
            Self::RParen => ")".to_string(),
            Self::EndOfInput => "None".to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "Token({}, {value})", self.kind()),
            Self::EndOfInput => write!(f, "Token({}, None)", self.kind()),
            _ => write!(f, "Token({}, '{}')", self.kind(), self.symbol()),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::EndOfInput => "EOF",
        };
        write!(f, "{name}")
    }
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the digit run does not fit in an `i64`, which makes
/// logos report the slice as an error.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Produces tokens from a single line of input, one per request.
///
/// The lexer is a strict forward pass over its source: the cursor never
/// moves backwards, and once the input is exhausted every further call to
/// [`Lexer::next_token`] returns [`Token::EndOfInput`].
pub struct Lexer<'source> {
    inner:    logos::Lexer<'source, Token>,
    position: usize,
    failed:   bool,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { inner:    Token::lexer(source),
               position: 0,
               failed:   false, }
    }

    /// Returns the next token in the stream.
    ///
    /// Spaces between tokens are skipped. After the last token, this returns
    /// [`Token::EndOfInput`] on every call without touching the cursor.
    ///
    /// # Errors
    /// - [`LexError::UnknownCharacter`] if the cursor sits on a character
    ///   that starts no token.
    /// - [`LexError::LiteralTooLarge`] if a digit run does not fit in an
    ///   `i64`.
    ///
    /// An error ends the token stream. Tokens returned by further calls after
    /// an error are unspecified; the iterator stops there instead.
    ///
    /// # Example
    /// ```
    /// use intcalc::interpreter::lexer::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("12 *");
    /// assert_eq!(lexer.next_token().unwrap(), Token::Integer(12));
    /// assert_eq!(lexer.next_token().unwrap(), Token::Mul);
    /// assert_eq!(lexer.next_token().unwrap(), Token::EndOfInput);
    /// assert_eq!(lexer.next_token().unwrap(), Token::EndOfInput);
    /// ```
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        match self.inner.next() {
            None => {
                self.position = self.inner.source().len();
                Ok(Token::EndOfInput)
            },
            Some(Ok(token)) => {
                self.position = self.inner.span().start;
                log::trace!("lexed {token} at {}", self.position);
                Ok(token)
            },
            Some(Err(())) => {
                self.position = self.inner.span().start;
                self.failed = true;
                Err(self.error_at_cursor())
            },
        }
    }

    /// Returns the byte offset of the most recently produced token.
    ///
    /// Once [`Token::EndOfInput`] has been produced, this is the length of the
    /// source.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Classifies the slice logos rejected at the current position.
    fn error_at_cursor(&self) -> LexError {
        let rest = &self.inner.source()[self.position..];
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();

        // A digit run only fails to lex when it overflows.
        if digits > 0 {
            return LexError::LiteralTooLarge { literal:  rest[..digits].to_string(),
                                               position: self.position, };
        }

        LexError::UnknownCharacter { character: rest.chars().next().unwrap_or('\u{FFFD}'),
                                     position:  self.position, }
    }
}

/// Yields every token before [`Token::EndOfInput`].
///
/// Iteration ends at the end of input, or right after the first error.
impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(Token::EndOfInput) => None,
            other => Some(other),
        }
    }
}

/// Splits a line into its tokens, terminated by a single
/// [`Token::EndOfInput`].
///
/// # Errors
/// Returns the first [`LexError`] encountered.
///
/// # Example
/// ```
/// use intcalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("(1 + 2)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::LParen,
///                 Token::Integer(1),
///                 Token::Plus,
///                 Token::Integer(2),
///                 Token::RParen,
///                 Token::EndOfInput]);
///
/// assert!(tokenize("1 + a").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Lexer::new(source).collect::<Result<Vec<_>, _>>()?;
    tokens.push(Token::EndOfInput);
    Ok(tokens)
}
