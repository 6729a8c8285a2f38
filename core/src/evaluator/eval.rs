//! Core evaluation logic.

use crate::evaluator::operators::{apply_function, apply_operator};
use crate::parser::SyntaxNode;
use crate::values::{ErrorKind, Value};

/// Evaluate a node to a value. Total: every tree shape, including ones the
/// grammar cannot produce, maps to a `Value`.
pub(super) fn eval_node(node: &SyntaxNode) -> Value {
    match node {
        SyntaxNode::Number { literal } => eval_number(literal),
        SyntaxNode::Expr { children } | SyntaxNode::Program { children } => eval_form(children),
        // A head leaf standing alone is not a meaningful expression.
        SyntaxNode::Operator { .. } | SyntaxNode::Function { .. } => {
            Value::Error(ErrorKind::InvalidNumber)
        }
    }
}

fn eval_number(literal: &str) -> Value {
    match literal.parse::<i64>() {
        Ok(n) => Value::Number(n),
        // The grammar only passes signed digit runs through, so the only
        // failure left is a literal outside the i64 range.
        Err(_) => Value::Error(ErrorKind::InvalidNumber),
    }
}

fn eval_form(children: &[SyntaxNode]) -> Value {
    match children.split_first() {
        Some((SyntaxNode::Operator { symbol }, operands)) if !operands.is_empty() => {
            eval_operator_form(symbol, operands)
        }
        Some((SyntaxNode::Function { name }, operands)) if !operands.is_empty() => {
            eval_function_form(name, operands)
        }
        _ => Value::Error(ErrorKind::InvalidNumber),
    }
}

fn eval_operator_form(symbol: &str, operands: &[SyntaxNode]) -> Value {
    let first = eval_node(&operands[0]);
    if symbol == "-" && operands.len() == 1 {
        return negate(first);
    }
    let mut acc = first;
    for operand in &operands[1..] {
        // Short-circuit before touching the next sibling.
        if acc.is_error() {
            return acc;
        }
        acc = apply_operator(acc, symbol, eval_node(operand));
    }
    acc
}

fn eval_function_form(name: &str, operands: &[SyntaxNode]) -> Value {
    let first = eval_node(&operands[0]);
    // Functions are binary: operands past the second are never evaluated.
    match operands.get(1) {
        Some(second) => apply_function(first, name, eval_node(second)),
        None => first,
    }
}

fn negate(value: Value) -> Value {
    match value {
        Value::Number(n) => Value::Number(n.wrapping_neg()),
        Value::Error(_) => value,
    }
}
