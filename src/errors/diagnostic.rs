//! Pretty error reporting using ariadne
//!
//! Provides colorful, user-friendly error messages with source context.

use crate::errors::PseudocError;
use ariadne::{Color, Label, Report, ReportKind, Source};

fn error_parts(error: &PseudocError) -> (String, Option<crate::errors::SourceSpan>, &'static str) {
    match error {
        PseudocError::Lexer { message, span } => (message.clone(), Some(*span), "Lexer error"),
        PseudocError::Parser { message, span } => (message.clone(), Some(*span), "Parser error"),
        PseudocError::CodeGen { message, span } => {
            (message.clone(), *span, "Code generation error")
        }
        PseudocError::Execution { message } => (message.clone(), None, "Execution error"),
        PseudocError::Json(e) => (e.to_string(), None, "JSON error"),
        PseudocError::Io(e) => (e.to_string(), None, "IO error"),
    }
}

/// Print an error with source context
pub fn print_error(source: &str, error: &PseudocError) {
    let (message, span, kind) = error_parts(error);

    let span_range = span.map(|s| s.start..s.end).unwrap_or(0..0);

    let mut report = Report::build(ReportKind::Error, span_range).with_message(kind);

    if let Some(s) = span {
        report = report.with_label(
            Label::new(s.start..s.end)
                .with_message(&message)
                .with_color(Color::Red),
        );
    } else {
        report = report.with_note(&message);
    }

    report
        .finish()
        .print(Source::from(source))
        .expect("failed to print error report");
}

/// Format an error as a string (for testing)
pub fn format_error(source: &str, error: &PseudocError) -> String {
    let (message, span, kind) = error_parts(error);

    let mut output = Vec::new();
    let span_range = span.map(|s| s.start..s.end).unwrap_or(0..0);

    let mut report = Report::build(ReportKind::Error, span_range).with_message(kind);

    if let Some(s) = span {
        report = report.with_label(
            Label::new(s.start..s.end)
                .with_message(&message)
                .with_color(Color::Red),
        );
    } else {
        report = report.with_note(&message);
    }

    report
        .finish()
        .write(Source::from(source), &mut output)
        .expect("failed to write error report");

    String::from_utf8(output).expect("error report should be valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SourceSpan;

    #[test]
    fn test_format_lexer_error() {
        let source = "lista = [1, 2\n";
        let err = PseudocError::lexer("list opened at line 1 is never closed", SourceSpan::new(8, 14));
        let report = format_error(source, &err);
        assert!(report.contains("Lexer error"));
        assert!(report.contains("never closed"));
    }

    #[test]
    fn test_format_spanless_error() {
        let err = PseudocError::execution("variable 'x' is not defined");
        let report = format_error("", &err);
        assert!(report.contains("Execution error"));
    }
}
