//! Tree-walking evaluator for Polish-notation syntax trees.
//!
//! The evaluator maps a [`SyntaxNode`] tree to a single [`Value`] and never
//! fails: arithmetic problems (zero divisors, unknown operators or
//! functions, out-of-range literals, malformed tree shapes) come back as
//! [`Value::Error`] variants that absorb through every enclosing form.
//!
//! ## Example
//!
//! ```
//! use polca_core::{evaluator, parser, values::Value};
//!
//! let tree = parser::parse("+ 2 3").unwrap();
//! assert_eq!(evaluator::evaluate(&tree), Value::Number(5));
//! ```

mod eval;
mod operators;

#[cfg(test)]
mod eval_test;

pub use operators::{apply_function, apply_operator};

use crate::parser::SyntaxNode;
use crate::values::Value;

/// Evaluate a parsed syntax tree to a single value.
pub fn evaluate(node: &SyntaxNode) -> Value {
    eval::eval_node(node)
}
