//! Unit tests for the evaluator.

use super::*;
use crate::parser::{self, SyntaxNode};
use crate::values::{ErrorKind, Value};

/// Parse a whole line and evaluate it.
fn run(input: &str) -> Value {
    let tree = parser::parse(input).expect("parsing failed");
    evaluate(&tree)
}

fn num(literal: &str) -> SyntaxNode {
    SyntaxNode::Number {
        literal: literal.to_string(),
    }
}

fn op(symbol: &str) -> SyntaxNode {
    SyntaxNode::Operator {
        symbol: symbol.to_string(),
    }
}

fn func(name: &str) -> SyntaxNode {
    SyntaxNode::Function {
        name: name.to_string(),
    }
}

fn expr(children: Vec<SyntaxNode>) -> SyntaxNode {
    SyntaxNode::Expr { children }
}

// ============================================================================
// Operator Forms
// ============================================================================

#[test]
fn test_addition() {
    assert_eq!(run("+ 2 3"), Value::Number(5));
}

#[test]
fn test_subtraction_is_binary_with_two_operands() {
    assert_eq!(run("- 5 3"), Value::Number(2));
}

#[test]
fn test_left_fold_over_operands() {
    assert_eq!(run("- 10 1 2"), Value::Number(7));
    assert_eq!(run("+ 1 2 3 4"), Value::Number(10));
    assert_eq!(run("/ 100 5 2"), Value::Number(10));
}

#[test]
fn test_multiplication() {
    assert_eq!(run("* 2 3 4"), Value::Number(24));
}

#[test]
fn test_division_truncates() {
    assert_eq!(run("/ 7 2"), Value::Number(3));
    assert_eq!(run("/ -7 2"), Value::Number(-3));
}

#[test]
fn test_remainder() {
    assert_eq!(run("% 7 2"), Value::Number(1));
    assert_eq!(run("% -7 2"), Value::Number(-1));
}

#[test]
fn test_exponentiation() {
    assert_eq!(run("^ 2 10"), Value::Number(1024));
    assert_eq!(run("^ 5 0"), Value::Number(1));
    assert_eq!(run("^ 2 -1"), Value::Number(0));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(run("/ 1 0"), Value::Error(ErrorKind::DivisionByZero));
    assert_eq!(run("% 3 0"), Value::Error(ErrorKind::DivisionByZero));
}

#[test]
fn test_nested_operands() {
    assert_eq!(run("+ 1 (* 2 3)"), Value::Number(7));
    assert_eq!(run("* (+ 1 2) (- 10 6)"), Value::Number(12));
}

#[test]
fn test_single_operand_returns_it() {
    assert_eq!(run("+ 5"), Value::Number(5));
    assert_eq!(run("* 7"), Value::Number(7));
    assert_eq!(run("/ 9"), Value::Number(9));
}

// ============================================================================
// Unary Minus
// ============================================================================

#[test]
fn test_unary_minus() {
    assert_eq!(run("- 5"), Value::Number(-5));
    assert_eq!(run("- -5"), Value::Number(5));
}

#[test]
fn test_unary_minus_of_nested_form() {
    assert_eq!(run("- (+ 2 3)"), Value::Number(-5));
}

#[test]
fn test_unary_minus_passes_errors_through() {
    assert_eq!(run("- (/ 1 0)"), Value::Error(ErrorKind::DivisionByZero));
}

#[test]
fn test_unary_minus_wraps_at_min() {
    assert_eq!(run("- -9223372036854775808"), Value::Number(i64::MIN));
}

// ============================================================================
// Functions
// ============================================================================

#[test]
fn test_min() {
    assert_eq!(run("min 3 7"), Value::Number(3));
    assert_eq!(run("min -3 7"), Value::Number(-3));
}

#[test]
fn test_max() {
    assert_eq!(run("max 3 7"), Value::Number(7));
    assert_eq!(run("max (min 1 2) (+ 3 4)"), Value::Number(7));
}

#[test]
fn test_function_with_single_operand_returns_it() {
    assert_eq!(run("min 3"), Value::Number(3));
    assert_eq!(run("max (+ 1 2)"), Value::Number(3));
}

#[test]
fn test_function_ignores_operands_past_the_second() {
    assert_eq!(run("min 3 7 2"), Value::Number(3));
    // The third operand is not even evaluated.
    assert_eq!(run("min 5 9 (/ 1 0)"), Value::Number(5));
}

#[test]
fn test_function_operand_errors_absorb() {
    assert_eq!(run("min (/ 1 0) 7"), Value::Error(ErrorKind::DivisionByZero));
    assert_eq!(run("max 1 (% 2 0)"), Value::Error(ErrorKind::DivisionByZero));
}

// ============================================================================
// Error Absorption
// ============================================================================

#[test]
fn test_error_absorbs_through_enclosing_forms() {
    assert_eq!(run("+ (/ 1 0) 5"), Value::Error(ErrorKind::DivisionByZero));
    assert_eq!(
        run("* 2 (% 3 0) 9"),
        Value::Error(ErrorKind::DivisionByZero)
    );
    assert_eq!(
        run("+ 1 (+ 2 (/ 3 0))"),
        Value::Error(ErrorKind::DivisionByZero)
    );
}

#[test]
fn test_error_kind_survives_unchanged() {
    assert_eq!(
        run("min (+ 99999999999999999999 1) 5"),
        Value::Error(ErrorKind::InvalidNumber)
    );
}

// ============================================================================
// Literals and Overflow
// ============================================================================

#[test]
fn test_literal_out_of_range_is_invalid_number() {
    assert_eq!(
        run("+ 99999999999999999999 1"),
        Value::Error(ErrorKind::InvalidNumber)
    );
    assert_eq!(
        run("+ 9223372036854775808 0"),
        Value::Error(ErrorKind::InvalidNumber)
    );
    assert_eq!(
        run("+ -9223372036854775809 0"),
        Value::Error(ErrorKind::InvalidNumber)
    );
}

#[test]
fn test_boundary_literals_evaluate_exactly() {
    assert_eq!(run("+ 9223372036854775807 0"), Value::Number(i64::MAX));
    assert_eq!(run("+ -9223372036854775808 0"), Value::Number(i64::MIN));
}

#[test]
fn test_arithmetic_wraps_instead_of_erroring() {
    assert_eq!(run("+ 9223372036854775807 1"), Value::Number(i64::MIN));
}

// ============================================================================
// Directly Built Trees
// ============================================================================

// The grammar cannot produce unknown operator or function leaves, so the
// evaluator's dispatch arms are exercised on hand-built trees.

#[test]
fn test_expr_form_evaluates_like_a_program() {
    let tree = expr(vec![op("+"), num("1"), num("2")]);
    assert_eq!(evaluate(&tree), Value::Number(3));
}

#[test]
fn test_bare_number_node() {
    assert_eq!(evaluate(&num("12")), Value::Number(12));
    assert_eq!(evaluate(&num("froth")), Value::Error(ErrorKind::InvalidNumber));
}

#[test]
fn test_unknown_operator_leaf() {
    let tree = expr(vec![op("@"), num("1"), num("2")]);
    assert_eq!(evaluate(&tree), Value::Error(ErrorKind::InvalidOperator));
}

#[test]
fn test_unknown_function_leaf() {
    let tree = expr(vec![func("avg"), num("3"), num("7")]);
    assert_eq!(evaluate(&tree), Value::Error(ErrorKind::InvalidFunction));
}

#[test]
fn test_division_alias_colon() {
    let tree = expr(vec![op(":"), num("9"), num("2")]);
    assert_eq!(evaluate(&tree), Value::Number(4));
}

#[test]
fn test_malformed_shapes_fall_back_to_invalid_number() {
    assert_eq!(
        evaluate(&expr(vec![])),
        Value::Error(ErrorKind::InvalidNumber)
    );
    assert_eq!(
        evaluate(&expr(vec![num("1"), num("2")])),
        Value::Error(ErrorKind::InvalidNumber)
    );
    assert_eq!(
        evaluate(&expr(vec![op("+")])),
        Value::Error(ErrorKind::InvalidNumber)
    );
    assert_eq!(
        evaluate(&op("+")),
        Value::Error(ErrorKind::InvalidNumber)
    );
    assert_eq!(
        evaluate(&func("min")),
        Value::Error(ErrorKind::InvalidNumber)
    );
}
