// End-to-end tests of the public `evaluate` entry point.

use pretty_assertions::assert_eq;
use tally::{evaluate, Error, EvalError, ParseError};

fn eval_ok(expression: &str) -> f64 {
    match evaluate(expression) {
        Ok(value) => value,
        Err(e) => panic!("'{expression}' failed: {e}"),
    }
}

#[test]
fn numeric_literals_evaluate_to_themselves() {
    for literal in ["0", "7", "42", "523", "0.5", "17.25", "-3", "-0.25"] {
        let expected: f64 = literal.parse().unwrap();
        assert_eq!(eval_ok(literal), expected, "literal {literal}");
    }
}

#[test]
fn basic_binary_operators() {
    assert_eq!(eval_ok("4 + 10"), 14.0);
    assert_eq!(eval_ok("4 - 10"), -6.0);
    assert_eq!(eval_ok("4 * 10"), 40.0);
    assert_eq!(eval_ok("10 / 4"), 2.5);
    assert_eq!(eval_ok("7 % 4"), 3.0);
    assert_eq!(eval_ok("2 ^ 10"), 1024.0);
}

#[test]
fn tier_semantics() {
    assert_eq!(eval_ok("3!"), 6.0);
    assert_eq!(eval_ok("~5"), -5.0);
    assert_eq!(eval_ok("4 @ 10"), 7.0);
    assert_eq!(eval_ok("4 & 10"), 4.0);
    assert_eq!(eval_ok("4 $ 10"), 10.0);
}

#[test]
fn precedence_ordering() {
    // Multiplication before addition: 14, not 20.
    assert_eq!(eval_ok("2 + 3 * 4"), 14.0);
    assert_eq!(eval_ok("1 + 2 * 3"), 7.0);
    assert_eq!(eval_ok("(1 + 2) * 3"), 9.0);
}

#[test]
fn average_tier_binds_tighter_than_lower_tiers() {
    // 2 ^ 4 @ 10 is 2 ^ (4 @ 10) = 2 ^ 7.
    assert_eq!(eval_ok("2 ^ 4 @ 10"), 128.0);
    // 1 + 4 & 10 is 1 + (4 & 10).
    assert_eq!(eval_ok("1 + 4 & 10"), 5.0);
}

#[test]
fn power_is_left_associative() {
    // (2 ^ 3) ^ 2 = 64 by design, not 2 ^ (3 ^ 2) = 512.
    assert_eq!(eval_ok("2 ^ 3 ^ 2"), 64.0);
}

#[test]
fn parenthesized_subexpressions_evaluate_independently() {
    for inner in ["1 + 2", "2 * 3 - 1", "3! @ 2", "~4 $ 1"] {
        let wrapped = format!("({inner})");
        assert_eq!(eval_ok(&wrapped), eval_ok(inner), "({inner})");
    }
}

#[test]
fn nesting_round_trip() {
    for inner in ["7", "1 + 2 * 3", "4 @ 10"] {
        let nested = format!("(((({inner}))))");
        assert_eq!(eval_ok(&nested), eval_ok(inner), "(((({inner}))))");
    }
}

#[test]
fn reference_end_to_end_scenario() {
    assert_eq!(eval_ok("4 + (5 + 2! - 3!) + ((5 * 3) @ 13)"), 19.0);
}

#[test]
fn unary_operator_interactions() {
    // Factorial binds tighter than ~, so ~3! is -(3!).
    assert_eq!(eval_ok("~3!"), -6.0);
    assert_eq!(eval_ok("3!!"), 720.0);
    assert_eq!(eval_ok("~~5"), 5.0);
    assert_eq!(eval_ok("0!"), 1.0);
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(eval_ok(" \t 2 +\n3 * 4 \r\n"), eval_ok("2+3*4"));
}

#[test]
fn division_by_zero_is_a_domain_error() {
    assert_eq!(
        evaluate("10 / 0"),
        Err(Error::Eval(EvalError::DivisionByZero))
    );
    assert_eq!(evaluate("5 % 0"), Err(Error::Eval(EvalError::ModuloByZero)));
}

#[test]
fn factorial_domain_errors() {
    // -3! applies factorial to the negative literal, unlike ~3!.
    assert_eq!(
        evaluate("-3!"),
        Err(Error::Eval(EvalError::FactorialOfNegative { operand: -3.0 }))
    );
    assert_eq!(
        evaluate("2.5!"),
        Err(Error::Eval(EvalError::FactorialNotInteger { operand: 2.5 }))
    );
}

#[test]
fn unbalanced_parentheses_are_syntax_errors() {
    assert!(matches!(
        evaluate("(1 + 2"),
        Err(Error::Parse(ParseError::ExpectedClosingParen { .. }))
    ));
    assert!(matches!(
        evaluate("1 + 2)"),
        Err(Error::Parse(ParseError::UnexpectedTrailingTokens { .. }))
    ));
}

#[test]
fn malformed_expressions_are_syntax_errors() {
    assert!(matches!(
        evaluate(""),
        Err(Error::Parse(ParseError::UnexpectedEndOfInput))
    ));
    assert!(matches!(
        evaluate("1 +"),
        Err(Error::Parse(ParseError::UnexpectedEndOfInput))
    ));
    assert!(matches!(
        evaluate("* 3"),
        Err(Error::Parse(ParseError::UnexpectedToken { .. }))
    ));
    assert!(matches!(
        evaluate("1 2"),
        Err(Error::Parse(ParseError::UnexpectedTrailingTokens { .. }))
    ));
    assert!(matches!(
        evaluate("1 + x"),
        Err(Error::Parse(ParseError::InvalidToken { .. }))
    ));
}

#[test]
fn deeply_nested_input_is_rejected_not_crashed() {
    let source = format!("{}1{}", "(".repeat(4_000), ")".repeat(4_000));
    assert!(matches!(
        evaluate(&source),
        Err(Error::Parse(ParseError::NestingTooDeep { .. }))
    ));
}

#[test]
fn long_operator_chains_evaluate() {
    let source = (0..10_000).map(|_| "1").collect::<Vec<_>>().join(" + ");
    assert_eq!(eval_ok(&source), 10_000.0);
}

#[test]
fn fractional_arithmetic() {
    assert_eq!(eval_ok("0.5 + 0.25"), 0.75);
    assert_eq!(eval_ok("1.5 * 4"), 6.0);
    assert_eq!(eval_ok("2.5 @ 7.5"), 5.0);
}

#[test]
fn negative_operands_in_binary_positions() {
    assert_eq!(eval_ok("2 - -3"), 5.0);
    assert_eq!(eval_ok("2 * -3"), -6.0);
    assert_eq!(eval_ok("-2 ^ 2"), 4.0);
    assert_eq!(eval_ok("-(1 + 2)"), -3.0);
}
