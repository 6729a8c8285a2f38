//! Parse error rendering using ariadne
//!
//! Renders parse failures with the offending source line and a span label,
//! so a stray character in the middle of a program is easy to spot.

use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use polca_core::parser::ParseError;
use std::io::Write;

/// Render a parse error with source context to stderr
pub fn render_parse_error(source: &str, error: &ParseError) {
    render_error_to_writer(source, error, &mut std::io::stderr(), true).ok();
}

/// Render a parse error to a String without color codes (useful for tests)
#[cfg(test)]
pub fn render_error_to_string_no_color(source: &str, error: &ParseError) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    source: &str,
    error: &ParseError,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let message = error.kind.to_string();
    let color = colors.next();

    Report::build(ReportKind::Error, ("<stdin>", error.span.0.clone()))
        .with_message(&message)
        .with_config(ariadne::Config::default().with_color(use_color))
        .with_label(
            Label::new(("<stdin>", error.span.0.clone()))
                .with_message(&message)
                .with_color(color),
        )
        .finish()
        .write(("<stdin>", Source::from(source)), writer)
}
