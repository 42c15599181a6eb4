//! Export functionality for yard layouts.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! writing computed layouts to output formats. It is the final stage in the
//! processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Yard request (TOML)
//!     ↓ parse
//! YardSpec
//!     ↓ layout
//! YardLayout
//!     ↓ export (this module)
//! Output File
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] — SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`YardError::Export`] at the crate
//! boundary.
//!
//! [`YardError::Export`]: crate::YardError::Export

/// SVG export backend.
pub mod svg;

use yardplan_core::yard::YardLayout;

/// Abstraction for layout export backends.
pub trait Exporter {
    /// Exports a computed yard layout to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the layout cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_layout(&mut self, layout: &YardLayout) -> Result<(), Error>;
}

/// Errors that can occur during layout export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
