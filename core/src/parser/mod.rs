pub mod parser;
mod syntax;
pub mod error;

// Re-export the parser and rule enum for external use
pub use parser::PolishParser;
pub use parser::Rule;
pub use parser::parse;

pub use syntax::{Span, SyntaxNode};
pub use error::{ParseError, ParseErrorKind};
