//! Yardplan - A layout engine for container storage yards.
//!
//! Given the dimensions of a rectangular plot and a demand for containers,
//! Yardplan computes where every container, washing station, road zone and
//! the entry go, and renders the result as SVG.
//!
//! # Pipeline
//!
//! ```text
//! Yard request (TOML)
//!     ↓ parse        (request)
//! YardSpec
//!     ↓ plan         (layout)
//! YardLayout + warnings
//!     ↓ render       (export)
//! SVG
//! ```

pub mod color;
pub mod config;
pub mod layout;
pub mod request;

mod error;
mod export;

pub use yardplan_core::{diagnostic, element, geometry, spec, yard};

pub use error::YardError;

use log::{debug, info, trace};

use config::AppConfig;
use export::Exporter;
use spec::YardSpec;
use yard::YardLayout;

/// Builder for parsing, planning and rendering container yards.
///
/// # Examples
///
/// ```rust
/// use yardplan::{YardBuilder, config::AppConfig, element::ElementKind};
///
/// let source = "plot_length = 80.0\nplot_width = 38.0\nnum_containers = 50\n";
///
/// let builder = YardBuilder::new(AppConfig::default());
/// let spec = builder.parse(source).expect("Failed to parse");
/// let layout = builder.plan(&spec).expect("Failed to plan");
/// assert_eq!(layout.count(ElementKind::Container), 50);
///
/// let svg = builder.render_svg(&layout).expect("Failed to render");
/// assert!(svg.starts_with("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct YardBuilder {
    config: AppConfig,
}

impl YardBuilder {
    /// Create a new yard builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Default yard dimensions and rendering style
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a TOML yard request into a [`YardSpec`].
    ///
    /// Fields the request leaves out are taken from the `[layout]` section
    /// of the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`YardError::Parse`] for malformed requests. Numeric values
    /// are not checked here; see [`plan`](Self::plan).
    pub fn parse(&self, source: &str) -> Result<YardSpec, YardError> {
        info!("Parsing yard request");

        let spec = request::parse(source, self.config.layout())
            .map_err(|err| YardError::new_parse_error(err, source))?;

        debug!("Yard request parsed successfully");
        trace!(spec:?; "Parsed yard spec");

        Ok(spec)
    }

    /// Compute the layout for a yard.
    ///
    /// # Errors
    ///
    /// Returns [`YardError::InvalidSpec`] or
    /// [`YardError::InsufficientCapacity`]. Non-fatal findings are returned
    /// inside the layout as warnings.
    pub fn plan(&self, spec: &YardSpec) -> Result<YardLayout, YardError> {
        layout::compute(spec)
    }

    /// Render a layout to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`YardError::Export`] if the configured style is invalid.
    pub fn render_svg(&self, layout: &YardLayout) -> Result<String, YardError> {
        let svg = export::svg::SvgBuilder::new()
            .with_style(self.config.style())
            .build()?;

        let svg_string = svg.render_layout(layout).to_string();
        info!(bytes = svg_string.len(); "SVG rendered successfully");

        Ok(svg_string)
    }

    /// Render a layout and write it to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`YardError::Export`] for an invalid style or a failed write.
    pub fn export_svg(&self, layout: &YardLayout, path: &str) -> Result<(), YardError> {
        let mut svg = export::svg::SvgBuilder::new()
            .with_file_name(path)
            .with_style(self.config.style())
            .build()?;

        svg.export_layout(layout)?;
        info!(path; "SVG exported");

        Ok(())
    }
}
