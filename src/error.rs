/// Evaluation errors.
///
/// Wraps every failure a single line can produce, so callers that only want
/// to report an error can handle one type.
pub mod eval_error;
/// Lexical errors.
///
/// Raised while turning the input line into tokens: characters that start no
/// token, and integer literals too large to represent.
pub mod lex_error;
/// Runtime errors.
///
/// Raised while computing the value of an expression that parsed correctly,
/// such as division by zero or integer overflow.
pub mod runtime_error;
/// Syntax errors.
///
/// Raised when the token stream does not match the grammar.
pub mod syntax_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;
