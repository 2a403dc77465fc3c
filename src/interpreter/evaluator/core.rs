use crate::{
    error::{EvalError, SyntaxError},
    interpreter::{
        evaluator::binary::BinaryOperator,
        lexer::{Lexer, Token, TokenKind},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Deepest parenthesis nesting a line may use.
pub const MAX_NESTING: usize = 256;

/// Parses and evaluates one line in a single pass.
///
/// The interpreter owns its lexer and holds exactly one token of lookahead.
/// Each grammar rule is a method that computes its value while matching:
///
/// ```text
/// line   := expr EOF
/// expr   := term (("+" | "-") term)*
/// term   := factor (("*" | "/") factor)*
/// factor := INTEGER | "(" expr ")"
/// ```
///
/// An interpreter is consumed by [`Interpreter::evaluate`]; every line gets a
/// fresh one.
pub struct Interpreter<'source> {
    lexer:         Lexer<'source>,
    current_token: Token,
    position:      usize,
    depth:         usize,
}

impl<'source> Interpreter<'source> {
    /// Creates an interpreter and reads the first token from `lexer`.
    ///
    /// # Errors
    /// Returns a lex error if the first token cannot be read.
    pub fn new(mut lexer: Lexer<'source>) -> EvalResult<Self> {
        let current_token = lexer.next_token()?;
        let position = lexer.position();

        Ok(Self { lexer,
                  current_token,
                  position,
                  depth: 0 })
    }

    /// Evaluates the whole line and returns its value.
    ///
    /// The line must hold exactly one expression: tokens left over after a
    /// complete expression are a syntax error.
    ///
    /// # Errors
    /// - [`EvalError::Lex`] if the line contains a character that starts no
    ///   token.
    /// - [`EvalError::Syntax`] if the tokens do not match the grammar.
    /// - [`EvalError::Runtime`] on division by zero or overflow.
    ///
    /// # Example
    /// ```
    /// use intcalc::interpreter::{evaluator::core::Interpreter, lexer::Lexer};
    ///
    /// let interpreter = Interpreter::new(Lexer::new("(2 + 3) * 4")).unwrap();
    /// assert_eq!(interpreter.evaluate().unwrap(), 20);
    ///
    /// let interpreter = Interpreter::new(Lexer::new("1 + 1 )")).unwrap();
    /// assert!(interpreter.evaluate().is_err());
    /// ```
    pub fn evaluate(mut self) -> EvalResult<i64> {
        let result = self.expr()?;
        self.eat(TokenKind::EndOfInput)?;
        Ok(result)
    }

    /// Consumes the current token if it has the expected kind.
    ///
    /// This is the only place the lookahead advances.
    fn eat(&mut self, expected: TokenKind) -> EvalResult<()> {
        if self.current_token.kind() != expected {
            return Err(self.unexpected(expected));
        }

        log::trace!("eat {expected} at {}", self.position);
        self.current_token = self.lexer.next_token()?;
        self.position = self.lexer.position();
        Ok(())
    }

    /// Builds the error for a lookahead that is not of the `expected` kind.
    fn unexpected(&self, expected: TokenKind) -> EvalError {
        SyntaxError::UnexpectedToken { expected,
                                       found: self.current_token,
                                       position: self.position }.into()
    }

    /// `expr := term (("+" | "-") term)*`
    fn expr(&mut self) -> EvalResult<i64> {
        let mut result = self.term()?;

        while let Some(op) = BinaryOperator::from_token(self.current_token)
              && op.is_additive()
        {
            let position = self.position;
            self.eat(op.token_kind())?;
            let right = self.term()?;
            result = Self::eval_scalar_op(op, result, right, position)?;
        }

        Ok(result)
    }

    /// `term := factor (("*" | "/") factor)*`
    fn term(&mut self) -> EvalResult<i64> {
        let mut result = self.factor()?;

        while let Some(op) = BinaryOperator::from_token(self.current_token)
              && op.is_multiplicative()
        {
            let position = self.position;
            self.eat(op.token_kind())?;
            let right = self.factor()?;
            result = Self::eval_scalar_op(op, result, right, position)?;
        }

        Ok(result)
    }

    /// `factor := INTEGER | "(" expr ")"`
    ///
    /// Anything else is reported as a missing integer.
    fn factor(&mut self) -> EvalResult<i64> {
        match self.current_token {
            Token::Integer(value) => {
                self.eat(TokenKind::Integer)?;
                Ok(value)
            },
            Token::LParen => {
                if self.depth >= MAX_NESTING {
                    return Err(SyntaxError::NestingTooDeep { limit:    MAX_NESTING,
                                                             position: self.position, }.into());
                }

                self.eat(TokenKind::LParen)?;
                self.depth += 1;
                let result = self.expr()?;
                self.depth -= 1;
                self.eat(TokenKind::RParen)?;
                Ok(result)
            },
            _ => Err(self.unexpected(TokenKind::Integer)),
        }
    }
}
