//! Operator and function application tables.

use crate::values::{ErrorKind, Value};

/// Apply a binary operator to two already-evaluated values.
///
/// Error values absorb: if either side is an error it is returned unchanged
/// (left side first), and the operator is never applied. Arithmetic uses
/// wrapping semantics to prevent panics on overflow; an unknown symbol is
/// `Error(InvalidOperator)`.
pub fn apply_operator(x: Value, symbol: &str, y: Value) -> Value {
    let (left, right) = match (x, y) {
        (Value::Error(_), _) => return x,
        (_, Value::Error(_)) => return y,
        (Value::Number(left), Value::Number(right)) => (left, right),
    };
    match symbol {
        "+" => Value::Number(left.wrapping_add(right)),
        "-" => Value::Number(left.wrapping_sub(right)),
        "*" => Value::Number(left.wrapping_mul(right)),
        "/" | ":" => {
            if right == 0 {
                Value::Error(ErrorKind::DivisionByZero)
            } else {
                // Use wrapping_div to handle i64::MIN / -1 case
                Value::Number(left.wrapping_div(right))
            }
        }
        "%" => {
            if right == 0 {
                Value::Error(ErrorKind::DivisionByZero)
            } else {
                Value::Number(left.wrapping_rem(right))
            }
        }
        "^" => Value::Number(pow(left, right)),
        _ => Value::Error(ErrorKind::InvalidOperator),
    }
}

/// Apply a named function to two already-evaluated values.
///
/// Same absorption discipline as [`apply_operator`]; an unknown name is
/// `Error(InvalidFunction)`.
pub fn apply_function(x: Value, name: &str, y: Value) -> Value {
    let (left, right) = match (x, y) {
        (Value::Error(_), _) => return x,
        (_, Value::Error(_)) => return y,
        (Value::Number(left), Value::Number(right)) => (left, right),
    };
    match name {
        "min" => Value::Number(left.min(right)),
        "max" => Value::Number(left.max(right)),
        _ => Value::Error(ErrorKind::InvalidFunction),
    }
}

/// Integer exponentiation, total over all of `i64` x `i64`.
fn pow(base: i64, exponent: i64) -> i64 {
    if exponent < 0 {
        // The real result truncates toward zero, so only unit bases survive.
        return match base {
            1 => 1,
            -1 if exponent % 2 == 0 => 1,
            -1 => -1,
            _ => 0,
        };
    }
    if exponent > u32::MAX as i64 {
        // Exponent too large for wrapping_pow; only repeated squaring of
        // wrapped values remains, which is not a meaningful answer.
        return 0;
    }
    base.wrapping_pow(exponent as u32)
}
