//! Configuration types for Yardplan layout and rendering.
//!
//! This module provides configuration structures that control the default
//! yard dimensions and the visual style of rendered layouts. All types
//! implement [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining layout and style settings.
//! - [`LayoutConfig`] - Default dimensions applied to requests that leave them out.
//! - [`StyleConfig`] - Controls visual styling options such as background color and scale.
//!
//! # Example
//!
//! ```
//! # use yardplan::config::AppConfig;
//! let config: AppConfig = toml::from_str(r#"
//!     [layout]
//!     access_road_width = 5.0
//!
//!     [style]
//!     background_color = "white"
//! "#).unwrap();
//!
//! assert_eq!(config.layout().access_road_width(), 5.0);
//! assert_eq!(config.layout().margin(), 1.0);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use yardplan_core::spec::{EntrySide, OrientationPolicy, defaults};

use crate::color::Color;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    ///
    /// # Arguments
    ///
    /// * `layout` - Default yard dimensions.
    /// * `style` - Visual styling options.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Default yard dimensions.
///
/// Every field a yard request may leave out is resolved against this
/// section. Unset fields fall back to the constants in
/// [`yardplan_core::spec::defaults`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    container_length: f32,
    container_width: f32,
    margin: f32,
    access_road_width: f32,
    num_wash_stations: usize,
    wash_length: f32,
    wash_width: f32,
    wash_gap: f32,
    entry_side: EntrySide,
    entry_width: f32,
    orientation: OrientationPolicy,
    /// Crossroad width; `None` disables the crossroad by default.
    middle_crossroad_width: Option<f32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            container_length: defaults::CONTAINER_LENGTH,
            container_width: defaults::CONTAINER_WIDTH,
            margin: defaults::MARGIN,
            access_road_width: defaults::ACCESS_ROAD_WIDTH,
            num_wash_stations: defaults::NUM_WASH_STATIONS,
            wash_length: defaults::WASH_LENGTH,
            wash_width: defaults::WASH_WIDTH,
            wash_gap: defaults::WASH_GAP,
            entry_side: EntrySide::default(),
            entry_width: defaults::ENTRY_WIDTH,
            orientation: OrientationPolicy::default(),
            middle_crossroad_width: None,
        }
    }
}

impl LayoutConfig {
    pub fn container_length(&self) -> f32 {
        self.container_length
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn access_road_width(&self) -> f32 {
        self.access_road_width
    }

    pub fn num_wash_stations(&self) -> usize {
        self.num_wash_stations
    }

    pub fn wash_length(&self) -> f32 {
        self.wash_length
    }

    pub fn wash_width(&self) -> f32 {
        self.wash_width
    }

    pub fn wash_gap(&self) -> f32 {
        self.wash_gap
    }

    pub fn entry_side(&self) -> EntrySide {
        self.entry_side
    }

    pub fn entry_width(&self) -> f32 {
        self.entry_width
    }

    pub fn orientation(&self) -> OrientationPolicy {
        self.orientation
    }

    pub fn middle_crossroad_width(&self) -> Option<f32> {
        self.middle_crossroad_width
    }

    /// Returns a copy with the crossroad enabled at the given width.
    pub fn with_middle_crossroad(mut self, width: Option<f32>) -> Self {
        self.middle_crossroad_width = width;
        self
    }

    /// Returns a copy with a different default orientation policy.
    pub fn with_orientation(mut self, orientation: OrientationPolicy) -> Self {
        self.orientation = orientation;
        self
    }
}

/// Visual styling configuration for rendered layouts.
///
/// Fields that are not set fall back to renderer defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Background [`Color`] for the document, as a color string.
    background_color: Option<String>,

    /// Pixels per meter in the rendered output.
    scale: f32,

    /// Whether a legend is drawn below the plot.
    show_legend: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            scale: 10.0,
            show_legend: true,
        }
    }
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the rendering scale in pixels per meter.
    ///
    /// # Errors
    ///
    /// Returns an error if the scale is not a positive finite number.
    pub fn scale(&self) -> Result<f32, String> {
        if self.scale.is_finite() && self.scale > 0.0 {
            Ok(self.scale)
        } else {
            Err(format!("Invalid scale in config: {}", self.scale))
        }
    }

    pub fn show_legend(&self) -> bool {
        self.show_legend
    }
}
