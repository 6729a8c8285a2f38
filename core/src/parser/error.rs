use pest::error::{ErrorVariant, InputLocation};
use thiserror::Error;

use crate::parser::parser::Rule;
use crate::parser::syntax::Span;

/// A parse failure and the byte range it covers.
///
/// This is the only `Err` the crate produces; everything past the parser is
/// expressed as error *values* (see [`crate::values::Value`]).
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input stopped matching the grammar at some position.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },

    /// Anything pest reports without a more specific mapping.
    #[error("{message}")]
    Other { message: String },
}

/// Convert a pest error into a [`ParseError`] with human-readable wording.
pub(crate) fn convert_pest_error(error: pest::error::Error<Rule>) -> ParseError {
    let span = match error.location {
        InputLocation::Pos(pos) => Span::new(pos, pos),
        InputLocation::Span((start, end)) => Span::new(start, end),
    };
    let kind = match error.variant {
        ErrorVariant::ParsingError {
            positives,
            negatives,
        } => ParseErrorKind::UnexpectedToken {
            expected: format_expected_rules(&positives),
            found: format_found_rules(&negatives),
        },
        ErrorVariant::CustomError { message } => ParseErrorKind::Other { message },
    };
    ParseError::new(kind, span)
}

/// Map grammar rules to the concepts a user typed, deduplicated and joined.
fn format_expected_rules(rules: &[Rule]) -> String {
    let mut concepts: Vec<&str> = Vec::new();
    for rule in rules {
        let concept = match rule {
            Rule::number => "a number",
            Rule::operator => "an operator",
            Rule::function => "a function name",
            Rule::expr => "an expression",
            Rule::program => "a program",
            Rule::EOI => "end of input",
            Rule::WHITESPACE => "whitespace",
        };
        if !concepts.contains(&concept) {
            concepts.push(concept);
        }
    }
    match concepts.as_slice() {
        [] => "valid syntax".to_string(),
        [only] => (*only).to_string(),
        [a, b] => format!("{a} or {b}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}

fn format_found_rules(rules: &[Rule]) -> String {
    if rules.is_empty() {
        "unexpected token".to_string()
    } else {
        format_expected_rules(rules)
    }
}
