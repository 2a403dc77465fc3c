use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        lexer::{Token, TokenKind},
    },
};

/// Binary operators supported by the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Integer division truncating toward zero (`/`)
    Div,
}

impl BinaryOperator {
    /// Maps a token to its corresponding binary operator.
    ///
    /// Returns `None` for tokens that are not operators.
    ///
    /// # Example
    /// ```
    /// use intcalc::interpreter::{evaluator::binary::BinaryOperator, lexer::Token};
    ///
    /// assert_eq!(BinaryOperator::from_token(Token::Plus),
    ///            Some(BinaryOperator::Add));
    /// assert_eq!(BinaryOperator::from_token(Token::LParen), None);
    /// ```
    #[must_use]
    pub const fn from_token(token: Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            Token::Mul => Some(Self::Mul),
            Token::Div => Some(Self::Div),
            _ => None,
        }
    }

    /// The token kind this operator is written with.
    #[must_use]
    pub const fn token_kind(self) -> TokenKind {
        match self {
            Self::Add => TokenKind::Plus,
            Self::Sub => TokenKind::Minus,
            Self::Mul => TokenKind::Mul,
            Self::Div => TokenKind::Div,
        }
    }

    /// `+` and `-`, the loosest-binding tier.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// `*` and `/`, which bind tighter than the additive tier.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl Interpreter<'_> {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// All operations are checked. Division truncates toward zero, and a zero
    /// divisor is reported rather than producing a value.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Byte offset of the operator, for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<i64>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use intcalc::interpreter::evaluator::{binary::BinaryOperator, core::Interpreter};
    ///
    /// assert_eq!(Interpreter::eval_scalar_op(BinaryOperator::Div, -7, 2, 0).unwrap(),
    ///            -3);
    /// assert!(Interpreter::eval_scalar_op(BinaryOperator::Div, 1, 0, 0).is_err());
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: i64,
                          right: i64,
                          position: usize)
                          -> EvalResult<i64> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        let result = match op {
            Add => left.checked_add(right),
            Sub => left.checked_sub(right),
            Mul => left.checked_mul(right),
            Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { position }.into());
                }
                left.checked_div(right)
            },
        };

        result.ok_or_else(|| RuntimeError::Overflow { position }.into())
    }
}
