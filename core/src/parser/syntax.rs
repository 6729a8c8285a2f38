// Syntax structures shared by the parser and the evaluator.

use std::ops::Range;

/// A span of bytes in the source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span(start..end)
    }
}

impl From<pest::Span<'_>> for Span {
    fn from(span: pest::Span) -> Self {
        Span(span.start()..span.end())
    }
}

/// A node of the lowered syntax tree.
///
/// Leaves keep their source text: numeric validity and operator/function
/// dispatch are decided at evaluation time, so an out-of-range literal or an
/// unknown name becomes an error *value* rather than a parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    /// Signed decimal integer literal.
    Number { literal: String },
    /// Operator symbol at the head of a form.
    Operator { symbol: String },
    /// Function name at the head of a form.
    Function { name: String },
    /// Parenthesized form: a head followed by its operands.
    Expr { children: Vec<SyntaxNode> },
    /// A whole input line: the same shape as [`SyntaxNode::Expr`] without
    /// the parentheses.
    Program { children: Vec<SyntaxNode> },
}

impl SyntaxNode {
    /// Number of nodes in this subtree, the receiver included.
    pub fn node_count(&self) -> usize {
        match self {
            SyntaxNode::Number { .. }
            | SyntaxNode::Operator { .. }
            | SyntaxNode::Function { .. } => 1,
            SyntaxNode::Expr { children } | SyntaxNode::Program { children } => {
                1 + children.iter().map(SyntaxNode::node_count).sum::<usize>()
            }
        }
    }
}
