/// Binary operator evaluation logic.
///
/// Maps operator tokens to operators and performs the checked integer
/// arithmetic behind `+`, `-`, `*` and `/`.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the fused parser and evaluator: the lookahead, the `eat`
/// primitive, and one method per grammar rule.
pub mod core;
