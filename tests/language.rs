use std::fs;

use intcalc::{
    error::{EvalError, LexError, RuntimeError, SyntaxError},
    evaluate,
    interpreter::{
        evaluator::core::MAX_NESTING,
        lexer::{Token, TokenKind},
    },
};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (source, expected)) in extract_cases(&content).into_iter().enumerate() {
            count += 1;
            let result = evaluate(&source);
            match expected {
                Some(value) => assert_eq!(result,
                                          Ok(value),
                                          "case {} in {:?} failed: {source}",
                                          i + 1,
                                          path),
                None => assert!(result.is_err(),
                                "case {} in {:?} should fail: {source} gave {result:?}",
                                i + 1,
                                path),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Reads `<expression> => <value>` lines; `error` as the value means the
/// expression must fail.
fn extract_cases(content: &str) -> Vec<(String, Option<i64>)> {
    content.lines()
           .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
           .map(|line| {
               let (source, expected) =
                   line.rsplit_once(" => ")
                       .unwrap_or_else(|| panic!("Malformed case line: {line:?}"));
               let expected = match expected.trim() {
                   "error" => None,
                   value => Some(value.parse()
                                      .unwrap_or_else(|e| panic!("Bad expected value {value:?}: {e}"))),
               };
               (source.to_string(), expected)
           })
           .collect()
}

fn assert_value(src: &str, expected: i64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "{src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("2 + 3", 5);
    assert_value("8 - 5", 3);
    assert_value("7 * 9", 63);
    assert_value("10 / 2", 5);
    assert_value("42", 42);
}

#[test]
fn precedence_and_grouping() {
    assert_value("2 + 3 * 4", 14);
    assert_value("(2 + 3) * 4", 20);
    assert_value("2 - 6 / 3", 0);
    assert_value("(8 - 2) / (1 + 2)", 2);
}

#[test]
fn left_associativity() {
    assert_value("10 - 2 - 3", 5);
    assert_value("64 / 4 / 2", 8);
    assert_value("2 * 6 / 4", 3);
}

#[test]
fn truncating_division() {
    assert_value("7 / 2", 3);
    assert_value("(0 - 7) / 2", -3);
    assert_value("(0 - 9) / (0 - 4)", 2);
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(evaluate("1+1"), evaluate(" 1 + 1 "));
    assert_eq!(evaluate("(2+3)*4"), evaluate("  ( 2 +   3 )  *4"));
}

#[test]
fn leading_zeros_are_plain_digits() {
    assert_value("007 + 1", 8);
    assert_value("0", 0);
}

#[test]
fn division_by_zero_fails() {
    assert_eq!(evaluate("1 / 0"),
               Err(EvalError::Runtime(RuntimeError::DivisionByZero { position: 2 })));
    assert!(matches!(evaluate("4 / (2 - 2)"),
                     Err(EvalError::Runtime(RuntimeError::DivisionByZero { .. }))));
}

#[test]
fn overflow_fails() {
    assert!(matches!(evaluate("9223372036854775807 + 1"),
                     Err(EvalError::Runtime(RuntimeError::Overflow { position: 20 }))));
    assert!(matches!(evaluate("4611686018427387904 * 2"),
                     Err(EvalError::Runtime(RuntimeError::Overflow { .. }))));
    assert!(matches!(evaluate("0 - 9223372036854775807 - 2"),
                     Err(EvalError::Runtime(RuntimeError::Overflow { .. }))));
    assert!(matches!(evaluate("(0 - 9223372036854775807 - 1) / (0 - 1)"),
                     Err(EvalError::Runtime(RuntimeError::Overflow { .. }))));

    assert_value("9223372036854775807", i64::MAX);
    assert_value("0 - 9223372036854775807 - 1", i64::MIN);
}

#[test]
fn unbalanced_parentheses_expect_rparen() {
    assert_eq!(evaluate("(1 + 2"),
               Err(EvalError::Syntax(SyntaxError::UnexpectedToken { expected: TokenKind::RParen,
                                                                    found:    Token::EndOfInput,
                                                                    position: 6, })));
}

#[test]
fn unknown_character_is_reported() {
    assert_eq!(evaluate("1 + a"),
               Err(EvalError::Lex(LexError::UnknownCharacter { character: 'a',
                                                               position:  4, })));
    assert!(matches!(evaluate("2 % 3"),
                     Err(EvalError::Lex(LexError::UnknownCharacter { character: '%', .. }))));
    assert!(matches!(evaluate("1\t+ 1"),
                     Err(EvalError::Lex(LexError::UnknownCharacter { character: '\t', .. }))));
    assert!(matches!(evaluate("1 + é"),
                     Err(EvalError::Lex(LexError::UnknownCharacter { character: 'é', .. }))));
}

#[test]
fn oversized_literal_is_reported() {
    assert_eq!(evaluate("1 + 99999999999999999999"),
               Err(EvalError::Lex(LexError::LiteralTooLarge { literal:  "99999999999999999999".to_string(),
                                                              position: 4, })));
}

#[test]
fn trailing_tokens_are_rejected() {
    assert_eq!(evaluate("1 + 1 )"),
               Err(EvalError::Syntax(SyntaxError::UnexpectedToken { expected: TokenKind::EndOfInput,
                                                                    found:    Token::RParen,
                                                                    position: 6, })));
    assert!(matches!(evaluate("2 3"),
                     Err(EvalError::Syntax(SyntaxError::UnexpectedToken { expected: TokenKind::EndOfInput,
                                                                          found: Token::Integer(3),
                                                                          .. }))));
}

#[test]
fn missing_operand_expects_integer() {
    assert!(matches!(evaluate("1 +"),
                     Err(EvalError::Syntax(SyntaxError::UnexpectedToken { expected: TokenKind::Integer,
                                                                          found: Token::EndOfInput,
                                                                          .. }))));
    assert!(matches!(evaluate("* 2"),
                     Err(EvalError::Syntax(SyntaxError::UnexpectedToken { expected: TokenKind::Integer,
                                                                          found: Token::Mul,
                                                                          position: 0 }))));
    assert!(matches!(evaluate("()"),
                     Err(EvalError::Syntax(SyntaxError::UnexpectedToken { found: Token::RParen,
                                                                          .. }))));
}

#[test]
fn unary_minus_is_not_supported() {
    assert!(matches!(evaluate("-1"),
                     Err(EvalError::Syntax(SyntaxError::UnexpectedToken { expected: TokenKind::Integer,
                                                                          found: Token::Minus,
                                                                          .. }))));
}

#[test]
fn empty_line_is_a_syntax_error() {
    assert!(matches!(evaluate(""),
                     Err(EvalError::Syntax(SyntaxError::UnexpectedToken { found: Token::EndOfInput,
                                                                          .. }))));
    assert!(matches!(evaluate("   "), Err(EvalError::Syntax(_))));
}

#[test]
fn nesting_limit() {
    let depth = MAX_NESTING;
    let allowed = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_value(&allowed, 1);

    let too_deep = format!("{}1{}", "(".repeat(depth + 1), ")".repeat(depth + 1));
    assert!(matches!(evaluate(&too_deep),
                     Err(EvalError::Syntax(SyntaxError::NestingTooDeep { limit, .. })) if limit == MAX_NESTING));
}

#[test]
fn evaluations_do_not_share_state() {
    assert!(evaluate("(1 + ").is_err());
    assert_value("2 * 3", 6);
    assert!(evaluate("1 / 0").is_err());
    assert_value("4", 4);
    assert_eq!(evaluate("5 - 1"), evaluate("5 - 1"));
}

#[test]
fn error_messages_identify_the_failure() {
    let message = evaluate("1 + a").unwrap_err().to_string();
    assert!(message.contains("'a'"), "{message}");
    assert!(message.contains("position 4"), "{message}");

    let message = evaluate("(1 + 2").unwrap_err().to_string();
    assert!(message.contains("expected RPAREN but found EOF"), "{message}");

    let message = evaluate("1 / 0").unwrap_err().to_string();
    assert!(message.contains("Division by zero"), "{message}");
}

#[test]
fn eval_error_exposes_its_source() {
    use std::error::Error;

    let error = evaluate("1 / 0").unwrap_err();
    let source = error.source().expect("wrapped error");
    assert_eq!(source.to_string(), error.to_string());
    assert_eq!(error.position(), 2);
}
