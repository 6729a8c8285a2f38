use pest::{Parser, iterators::Pair};
use pest_derive::Parser;
use tracing::trace;

use crate::parser::error::{ParseError, ParseErrorKind, convert_pest_error};
use crate::parser::syntax::{Span, SyntaxNode};

/// Pest parser generated from the Polish-notation grammar.
#[derive(Parser)]
#[grammar = "parser/grammar.pest"]
pub struct PolishParser;

/// Parse one input line into a syntax tree.
pub fn parse(source: &str) -> Result<SyntaxNode, ParseError> {
    let mut pairs = PolishParser::parse(Rule::program, source).map_err(convert_pest_error)?;
    let Some(program) = pairs.next() else {
        return Err(ParseError::new(
            ParseErrorKind::Other {
                message: "grammar produced no program".to_string(),
            },
            Span::new(0, source.len()),
        ));
    };
    let tree = lower(program)?;
    trace!(nodes = tree.node_count(), "parsed program");
    Ok(tree)
}

/// Lower a pest pair into a [`SyntaxNode`].
fn lower(pair: Pair<Rule>) -> Result<SyntaxNode, ParseError> {
    match pair.as_rule() {
        Rule::number => Ok(SyntaxNode::Number {
            literal: pair.as_str().to_string(),
        }),
        Rule::operator => Ok(SyntaxNode::Operator {
            symbol: pair.as_str().to_string(),
        }),
        Rule::function => Ok(SyntaxNode::Function {
            name: pair.as_str().to_string(),
        }),
        Rule::expr => {
            let mut children = pair
                .into_inner()
                .map(lower)
                .collect::<Result<Vec<_>, _>>()?;
            // Parentheses are anonymous and produce no pairs, so an expr
            // wrapping a bare number folds to the leaf itself.
            if children.len() == 1 && matches!(children[0], SyntaxNode::Number { .. }) {
                return Ok(children.swap_remove(0));
            }
            Ok(SyntaxNode::Expr { children })
        }
        Rule::program => {
            let children = pair
                .into_inner()
                .filter(|inner| inner.as_rule() != Rule::EOI)
                .map(lower)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(SyntaxNode::Program { children })
        }
        rule => Err(ParseError::new(
            ParseErrorKind::Other {
                message: format!("unhandled rule: {rule:?}"),
            },
            pair.as_span().into(),
        )),
    }
}
