/// The evaluator module parses and evaluates one line in a single pass.
///
/// The evaluator pulls tokens from the lexer one at a time and descends
/// through the precedence tiers of the grammar, computing the integer result
/// as each rule matches. No syntax tree is built.
///
/// # Responsibilities
/// - Matches tokens against the grammar with one token of lookahead.
/// - Performs checked integer arithmetic with truncating division.
/// - Reports syntax errors, division by zero, and overflow.
pub mod evaluator;
/// The lexer module tokenizes a line of input for the evaluator.
///
/// The lexer reads the raw line and produces tokens on demand: integer
/// literals, the four arithmetic operators, and parentheses. Spaces between
/// tokens are skipped.
///
/// # Responsibilities
/// - Converts the input characters into tokens, one per request.
/// - Signals the end of input explicitly and repeatably.
/// - Reports unknown characters and oversized literals.
pub mod lexer;
