//! Parsing and evaluation for polca, a Polish-notation integer calculator.
//!
//! The pipeline is `parser::parse` (text to [`parser::SyntaxNode`]) followed
//! by `evaluator::evaluate` (tree to [`values::Value`]). Arithmetic errors
//! are values, not `Err`s: they absorb through every enclosing form and
//! print as `Error: ...` lines.

pub mod evaluator;
pub mod parser;
pub mod values;
