use crate::error::{LexError, RuntimeError, SyntaxError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure that ends the evaluation of a line.
///
/// The wrapped errors keep their own messages; this type only adds the
/// conversions the evaluator needs to propagate them with `?`.
pub enum EvalError {
    /// The line contains text that is not a token.
    Lex(LexError),
    /// The tokens do not form an expression.
    Syntax(SyntaxError),
    /// The expression is well formed but cannot be computed.
    Runtime(RuntimeError),
}

impl EvalError {
    /// Byte offset in the line at which evaluation failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lex(e) => e.position(),
            Self::Syntax(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }
}

impl From<LexError> for EvalError {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<SyntaxError> for EvalError {
    fn from(value: SyntaxError) -> Self {
        Self::Syntax(value)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
