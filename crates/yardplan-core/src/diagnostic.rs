//! Diagnostics attached to a computed layout.
//!
//! A [`Diagnostic`] records a condition the engine noticed while laying out
//! a yard but that did not stop it from producing a result, such as rows
//! running past the plot edge or a wash station that had to be left out.
//! Fatal conditions are reported as errors by the engine instead.

use std::fmt;

/// Codes for categorizing layout diagnostics.
///
/// - `W0xx` - Non-fatal layout warnings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// Insufficient space for all rows.
    ///
    /// The rows needed for the requested containers extend past the plot.
    W001,

    /// Wash station conflict.
    ///
    /// A wash station does not fit above the margin or would overlap the driveway.
    W002,
}

impl DiagnosticCode {
    /// Returns the string representation of this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::W001 => "W001",
            DiagnosticCode::W002 => "W002",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            DiagnosticCode::W001 => "insufficient space for all rows",
            DiagnosticCode::W002 => "wash station conflict",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A diagnostic message about a computed layout.
///
/// # Example
///
/// ```
/// # use yardplan_core::diagnostic::{Diagnostic, DiagnosticCode};
/// let diag = Diagnostic::warning("not enough vertical space for all rows")
///     .with_code(DiagnosticCode::W001)
///     .with_help("reduce the number of containers or enlarge the plot");
///
/// assert_eq!(
///     diag.to_string(),
///     "warning[W001]: not enough vertical space for all rows"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    code: Option<DiagnosticCode>,
    message: String,
    help: Option<String>,
}

impl Diagnostic {
    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            help: None,
        }
    }

    /// Get the diagnostic code, if any.
    pub fn code(&self) -> Option<DiagnosticCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the diagnostic code.
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // "warning[W001]: message" or "warning: message"
        write!(f, "warning")?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}
