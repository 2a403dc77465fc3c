#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while computing a result.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// Byte offset of the `/` operator in the line.
        position: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// Byte offset of the operator in the line.
        position: usize,
    },
}

impl RuntimeError {
    /// Byte offset of the operator that failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::DivisionByZero { position } | Self::Overflow { position } => *position,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::Overflow { position } => write!(f,
                                                  "Error at position {position}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
