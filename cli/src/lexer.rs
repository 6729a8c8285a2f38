use logos::Logos;

/// Token classes for prompt highlighting.
///
/// This lexer is independent of the real grammar and never rejects a line;
/// it only classifies spans for color. Unknown characters surface as lexing
/// errors and are styled as such.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t]+")]
pub enum Token {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    // A leading sign binds to the digits, matching the grammar's numbers.
    #[regex(r"-?[0-9]+")]
    Number,

    #[regex(r"[+\-*/^%:]")]
    Operator,

    // Function names, the exit command, and any other bare word.
    #[regex(r"[A-Za-z][A-Za-z0-9_]*")]
    Word,
}
