//! CLI logic for the Yardplan yard layout tool.
//!
//! This module reads a yard request, plans the yard and writes the SVG.
//! Warnings raised while planning are handed back to the caller for
//! reporting.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{debug, info};

use yardplan::{YardBuilder, YardError, diagnostic::Diagnostic};

/// Run the Yardplan CLI application
///
/// This function processes the request file through the Yardplan pipeline
/// and writes the resulting SVG to the output file.
///
/// Returns the non-fatal warnings raised while planning. The SVG is written
/// even when warnings are present.
///
/// # Errors
///
/// Returns `YardError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Request parsing errors
/// - Invalid dimensions or insufficient capacity
/// - Rendering errors
pub fn run(args: &Args) -> Result<Vec<Diagnostic>, YardError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing yard request"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = YardBuilder::new(app_config);
    let spec = builder.parse(&source)?;
    let layout = builder.plan(&spec)?;

    debug!(warnings = layout.warnings().len(); "Yard planned");

    builder.export_svg(&layout, &args.output)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(layout.warnings().to_vec())
}
