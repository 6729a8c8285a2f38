use logos::Logos;
use nu_ansi_term::{Color, Style};
use reedline::{Highlighter, StyledText};

use crate::lexer::Token;

/// Live syntax highlighting for the prompt, driven by the [`Token`] lexer.
pub struct PolishHighlighter;

fn token_style(token: Result<Token, ()>, text: &str) -> Style {
    match token {
        Ok(Token::Number) => Style::new().fg(Color::Cyan),
        Ok(Token::LParen) | Ok(Token::RParen) => Style::new().fg(Color::DarkGray),
        Ok(Token::Operator) => Style::new().fg(Color::White),
        Ok(Token::Word) => match text {
            "min" | "max" => Style::new().fg(Color::Blue),
            "exit" => Style::new().fg(Color::Magenta),
            _ => Style::new().fg(Color::Red),
        },
        // Characters outside the language.
        Err(()) => Style::new().fg(Color::Red),
    }
}

impl Highlighter for PolishHighlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut styled = StyledText::new();
        let mut last_end = 0;

        for (token, span) in Token::lexer(line).spanned() {
            // Skipped whitespace leaves gaps between token spans.
            if span.start > last_end {
                styled.push((Style::new(), line[last_end..span.start].to_string()));
            }
            let text = &line[span.clone()];
            styled.push((token_style(token, text), text.to_string()));
            last_end = span.end;
        }
        if last_end < line.len() {
            styled.push((Style::new(), line[last_end..].to_string()));
        }

        styled
    }
}
