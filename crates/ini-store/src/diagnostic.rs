//! Diagnostic rendering for load errors.

use ariadne::{Color, Label, Report, ReportKind, Source};
use ini_parse::{ParseError, ParseErrorKind};

use crate::Error;

impl Error {
    /// Render this error with ariadne.
    ///
    /// Syntax errors point into `source`; I/O errors render as one line.
    pub fn render(&self, filename: &str, source: &str) -> String {
        match self {
            Error::Syntax(e) => {
                let mut output = Vec::new();
                write_report(e, filename, source, &mut output);
                String::from_utf8(output).unwrap_or_else(|_| format!("{}", e))
            }
            Error::Io(e) => format!("error: {}: {}", filename, e),
        }
    }
}

/// Write the report for a syntax error to a writer.
pub(crate) fn write_report<W: std::io::Write>(
    error: &ParseError,
    filename: &str,
    source: &str,
    writer: W,
) {
    let report = build_report(error, filename);
    let _ = report
        .finish()
        .write((filename, Source::from(source)), writer);
}

fn build_report<'a>(
    error: &ParseError,
    filename: &'a str,
) -> ariadne::ReportBuilder<'static, (&'a str, std::ops::Range<usize>)> {
    let range: std::ops::Range<usize> = error.span.into();
    let message = error.kind.message();

    match error.kind {
        ParseErrorKind::UnterminatedSection => Report::build(ReportKind::Error, (filename, range.clone()))
            .with_message(message)
            .with_label(
                Label::new((filename, range))
                    .with_message("line ends before `]`")
                    .with_color(Color::Red),
            )
            .with_help("close the section header with `]` on the same line"),

        ParseErrorKind::UnexpectedEofInKey => Report::build(ReportKind::Error, (filename, range.clone()))
            .with_message(message)
            .with_label(
                Label::new((filename, range))
                    .with_message("input ends here")
                    .with_color(Color::Red),
            )
            .with_help("entries are written as `key=value`"),

        ParseErrorKind::QuotedStringInKey => Report::build(ReportKind::Error, (filename, range.clone()))
            .with_message(message)
            .with_label(
                Label::new((filename, range))
                    .with_message("quoted string")
                    .with_color(Color::Red),
            )
            .with_help("only values can be quoted"),
    }
}
