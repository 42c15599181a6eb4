//! Error adapter for converting YardError and layout warnings to miette
//! diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Request parse
//! errors are rendered with a snippet of the offending TOML; layout warnings
//! are rendered with their code and help text.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, Severity, SourceSpan};

use yardplan::{YardError, diagnostic::Diagnostic, request::ParseError};

/// Adapter for a request parse error with its source text.
pub struct DiagnosticAdapter<'a> {
    err: &'a ParseError,
    /// Source code for displaying snippets
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    pub fn new(err: &'a ParseError, src: &'a str) -> Self {
        Self { err, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err.message().trim_end())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("yardplan::parse"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "a yard request needs `plot_length`, `plot_width` and `num_containers`",
        ))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.err.span()?;
        let label = LabeledSpan::new_primary_with_span(Some("here".to_string()), span_to_miette(span));
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for non-diagnostic [`YardError`] variants.
///
/// This adapter handles errors that don't carry source locations, such as
/// I/O errors, invalid dimensions, capacity failures and export errors.
pub struct ErrorAdapter<'a>(pub &'a YardError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            YardError::Io(_) => "yardplan::io",
            YardError::Parse { .. } => "yardplan::parse",
            YardError::InvalidSpec(_) => "yardplan::invalid_spec",
            YardError::InsufficientCapacity(_) => "yardplan::insufficient_capacity",
            YardError::Export(_) => "yardplan::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            YardError::InvalidSpec(_) => "every dimension must be a positive number of meters",
            YardError::InsufficientCapacity(_) => {
                "use a longer plot, shorter containers or smaller margins"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }
}

/// Adapter for a non-fatal layout [`Diagnostic`].
pub struct WarningAdapter<'a>(pub &'a Diagnostic);

impl fmt::Debug for WarningAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for WarningAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.message())
    }
}

impl std::error::Error for WarningAdapter<'_> {}

impl MietteDiagnostic for WarningAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.0
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<Severity> {
        Some(Severity::Warning)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.0
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }
}

/// A reportable error or warning that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A parse error with source location information.
    Diagnostic(DiagnosticAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
    /// A layout warning.
    Warning(WarningAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
            Reportable::Warning(w) => fmt::Display::fmt(w, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Error(e) => e.source(),
            Reportable::Diagnostic(_) | Reportable::Warning(_) => None,
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
            Reportable::Warning(w) => w.code(),
        }
    }

    fn severity(&self) -> Option<Severity> {
        match self {
            Reportable::Warning(w) => w.severity(),
            _ => Some(Severity::Error),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
            Reportable::Warning(w) => w.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            _ => None,
        }
    }
}

/// Convert a byte range of the request into a miette [`SourceSpan`].
fn span_to_miette(span: std::ops::Range<usize>) -> SourceSpan {
    SourceSpan::new(span.start.into(), span.len())
}

/// Convert a [`YardError`] into a list of reportable errors.
///
/// [`YardError::Parse`] keeps its source so the offending TOML can be shown;
/// every other variant is reported without a snippet.
pub fn to_reportables(err: &YardError) -> Vec<Reportable<'_>> {
    match err {
        YardError::Parse {
            err: parse_err,
            src,
        } => vec![Reportable::Diagnostic(DiagnosticAdapter::new(parse_err, src))],
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

/// Convert layout warnings into reportables, one per warning.
pub fn warning_reportables(warnings: &[Diagnostic]) -> Vec<Reportable<'_>> {
    warnings
        .iter()
        .map(|w| Reportable::Warning(WarningAdapter(w)))
        .collect()
}
