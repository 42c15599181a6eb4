//! Error types for Yardplan operations.
//!
//! This module provides the main error type [`YardError`] which wraps the
//! conditions that stop a yard request from producing a layout. Non-fatal
//! findings are not errors; they travel with the layout as
//! [`Diagnostic`](yardplan_core::diagnostic::Diagnostic)s.

use std::io;

use thiserror::Error;

use yardplan_core::spec::SpecError;

use crate::request::ParseError;

/// The main error type for Yardplan operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the request source next to the error so the
/// offending span can be shown to the user.
#[derive(Debug, Error)]
pub enum YardError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Invalid yard specification: {0}")]
    InvalidSpec(#[from] SpecError),

    #[error("Insufficient capacity: {0}")]
    InsufficientCapacity(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for YardError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl YardError {
    /// Create a new `Parse` error with the associated request source.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
