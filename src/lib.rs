//! # intcalc
//!
//! intcalc is a single-pass interpreter for integer arithmetic expressions.
//! It evaluates one line at a time: integer literals combined with `+`, `-`,
//! `*`, `/` and parentheses, with the usual precedence and truncating
//! division.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::EvalError,
    interpreter::{evaluator::core::Interpreter, lexer::Lexer},
};

/// Provides the error types for lexing and evaluation.
///
/// Every failure carries the byte position at which it occurred, and enough
/// detail to reproduce it: the offending character for lexical errors, the
/// expected and found token kinds for syntax errors.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (lexer, grammar, arithmetic).
/// - Wraps them in a single type for callers that only report errors.
pub mod error;
/// Turns a line of text into an integer.
///
/// This module ties together the lexer and the fused parser/evaluator.
///
/// # Responsibilities
/// - Tokenizes input on demand.
/// - Matches tokens to the grammar and computes the result in one pass.
pub mod interpreter;
/// Drives the interpreter over a stream of lines.
///
/// The read–evaluate–print loop used by the command-line binary, written
/// against `BufRead` and `Write` so it can run over any input and output.
///
/// # Responsibilities
/// - Evaluates each line with fresh interpreter state.
/// - Writes results and diagnostics.
/// - Applies the caller's policy after a failing line.
pub mod repl;

/// Evaluates one line and returns its value.
///
/// A fresh lexer and interpreter are created for every call, so calls never
/// share state.
///
/// # Errors
/// Returns an error if the line contains an unknown character, does not
/// match the grammar, divides by zero, or overflows.
///
/// # Examples
/// ```
/// use intcalc::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14);
/// assert_eq!(evaluate("10 - 2 - 3").unwrap(), 5);
/// assert_eq!(evaluate("7 / 2").unwrap(), 3);
///
/// // Division by zero is an error, not a value.
/// assert!(evaluate("1 / 0").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<i64, EvalError> {
    Interpreter::new(Lexer::new(source))?.evaluate()
}
