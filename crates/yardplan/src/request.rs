//! Yard request parsing.
//!
//! A yard request is a small TOML document naming the plot and the demand,
//! optionally overriding any of the default dimensions:
//!
//! ```toml
//! plot_length = 80.0
//! plot_width = 38.0
//! num_containers = 50
//! num_wash_stations = 2
//! entry_side = "long"
//! ```
//!
//! Fields left out are taken from the [`LayoutConfig`] the request is
//! resolved against. Parsing only checks the document shape; numeric
//! invariants are enforced later by [`YardSpec::validate`].

use std::{fmt, ops::Range};

use log::{debug, trace};
use serde::Deserialize;

use yardplan_core::spec::{EntrySide, OrientationPolicy, YardSpec, defaults};

use crate::config::LayoutConfig;

/// A malformed yard request.
///
/// Carries the byte range of the offending TOML when one is known.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    message: String,
    span: Option<Range<usize>>,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: Option<Range<usize>>) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte range of the offending input, if known.
    pub fn span(&self) -> Option<Range<usize>> {
        self.span.clone()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid yard request: {}", self.message.trim_end())
    }
}

impl std::error::Error for ParseError {}

impl From<toml::de::Error> for ParseError {
    fn from(err: toml::de::Error) -> Self {
        Self::new(err.message(), err.span())
    }
}

/// Raw request document as written by the user.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct YardRequest {
    plot_length: f32,
    plot_width: f32,
    num_containers: usize,
    container_length: Option<f32>,
    container_width: Option<f32>,
    margin: Option<f32>,
    access_road_width: Option<f32>,
    num_wash_stations: Option<usize>,
    wash_length: Option<f32>,
    wash_width: Option<f32>,
    wash_gap: Option<f32>,
    entry_side: Option<EntrySide>,
    entry_width: Option<f32>,
    orientation: Option<OrientationPolicy>,
    /// Explicit crossroad toggle; overrides the configured default.
    crossroad: Option<bool>,
    middle_crossroad_width: Option<f32>,
}

impl YardRequest {
    fn into_spec(self, defaults: &LayoutConfig) -> YardSpec {
        let crossroad_width = match self.crossroad {
            Some(false) => None,
            Some(true) => Some(
                self.middle_crossroad_width
                    .or(defaults.middle_crossroad_width())
                    .unwrap_or(defaults::MIDDLE_CROSSROAD_WIDTH),
            ),
            None => self
                .middle_crossroad_width
                .or(defaults.middle_crossroad_width()),
        };

        YardSpec::new(self.plot_length, self.plot_width, self.num_containers)
            .with_container_size(
                self.container_length
                    .unwrap_or(defaults.container_length()),
                self.container_width.unwrap_or(defaults.container_width()),
            )
            .with_margin(self.margin.unwrap_or(defaults.margin()))
            .with_access_road_width(
                self.access_road_width
                    .unwrap_or(defaults.access_road_width()),
            )
            .with_num_wash_stations(
                self.num_wash_stations
                    .unwrap_or(defaults.num_wash_stations()),
            )
            .with_wash_size(
                self.wash_length.unwrap_or(defaults.wash_length()),
                self.wash_width.unwrap_or(defaults.wash_width()),
            )
            .with_wash_gap(self.wash_gap.unwrap_or(defaults.wash_gap()))
            .with_entry_side(self.entry_side.unwrap_or(defaults.entry_side()))
            .with_entry_width(self.entry_width.unwrap_or(defaults.entry_width()))
            .with_orientation(self.orientation.unwrap_or(defaults.orientation()))
            .with_middle_crossroad(crossroad_width)
    }
}

/// Parse a yard request, resolving omitted fields against `defaults`.
///
/// # Errors
///
/// Returns [`ParseError`] for malformed TOML, missing required keys, unknown
/// keys, or values of the wrong type.
pub fn parse(source: &str, defaults: &LayoutConfig) -> Result<YardSpec, ParseError> {
    let request: YardRequest = toml::from_str(source)?;
    trace!(request:?; "Parsed yard request");

    let spec = request.into_spec(defaults);
    debug!(
        plot_length = spec.plot_length(),
        plot_width = spec.plot_width(),
        num_containers = spec.num_containers();
        "Yard request resolved"
    );

    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_request_uses_defaults() {
        let spec = parse(
            "plot_length = 80.0\nplot_width = 38.0\nnum_containers = 50\n",
            &LayoutConfig::default(),
        )
        .unwrap();

        assert_eq!(spec, YardSpec::new(80.0, 38.0, 50));
    }

    #[test]
    fn test_integer_lengths_accepted() {
        let spec = parse(
            "plot_length = 80\nplot_width = 38\nnum_containers = 50\n",
            &LayoutConfig::default(),
        )
        .unwrap();

        assert_eq!(spec.plot_length(), 80.0);
        assert_eq!(spec.plot_width(), 38.0);
    }

    #[test]
    fn test_request_overrides() {
        let source = r#"
            plot_length = 60.0
            plot_width = 30.0
            num_containers = 12
            num_wash_stations = 0
            entry_side = "long"
            orientation = "horizontal"
            margin = 2.0
        "#;
        let spec = parse(source, &LayoutConfig::default()).unwrap();

        assert_eq!(spec.num_wash_stations(), 0);
        assert_eq!(spec.entry_side(), EntrySide::Long);
        assert_eq!(spec.orientation(), OrientationPolicy::Horizontal);
        assert_eq!(spec.margin(), 2.0);
        assert_eq!(spec.container_length(), 6.0);
    }

    #[test]
    fn test_config_defaults_apply() {
        let defaults = LayoutConfig::default()
            .with_middle_crossroad(Some(5.0))
            .with_orientation(OrientationPolicy::Vertical);
        let spec = parse(
            "plot_length = 80.0\nplot_width = 38.0\nnum_containers = 50\n",
            &defaults,
        )
        .unwrap();

        assert_eq!(spec.middle_crossroad_width(), Some(5.0));
        assert_eq!(spec.orientation(), OrientationPolicy::Vertical);
    }

    #[test]
    fn test_crossroad_toggle() {
        let base = "plot_length = 80.0\nplot_width = 38.0\nnum_containers = 50\n";

        let enabled = parse(&format!("{base}crossroad = true\n"), &LayoutConfig::default())
            .unwrap();
        assert_eq!(
            enabled.middle_crossroad_width(),
            Some(defaults::MIDDLE_CROSSROAD_WIDTH)
        );

        let disabled = parse(
            &format!("{base}crossroad = false\n"),
            &LayoutConfig::default().with_middle_crossroad(Some(4.0)),
        )
        .unwrap();
        assert_eq!(disabled.middle_crossroad_width(), None);

        let widened = parse(
            &format!("{base}middle_crossroad_width = 6.0\n"),
            &LayoutConfig::default(),
        )
        .unwrap();
        assert_eq!(widened.middle_crossroad_width(), Some(6.0));
    }

    #[test]
    fn test_missing_required_field() {
        let err = parse("plot_length = 80.0\nplot_width = 38.0\n", &LayoutConfig::default())
            .unwrap_err();
        assert!(err.message().contains("num_containers"));
    }

    #[test]
    fn test_unknown_field_has_span() {
        let source = "plot_length = 80.0\nplot_width = 38.0\nnum_containers = 5\ncolour = 1\n";
        let err = parse(source, &LayoutConfig::default()).unwrap_err();

        let span = err.span().expect("unknown key should carry a span");
        assert!(source[span].contains("colour"));
    }

    #[test]
    fn test_bad_entry_side() {
        let source = "plot_length = 80.0\nplot_width = 38.0\nnum_containers = 5\nentry_side = \"north\"\n";
        assert!(parse(source, &LayoutConfig::default()).is_err());
    }

    #[test]
    fn test_negative_count_rejected() {
        let source = "plot_length = 80.0\nplot_width = 38.0\nnum_containers = -5\n";
        assert!(parse(source, &LayoutConfig::default()).is_err());
    }

    #[test]
    fn test_display() {
        let err = ParseError::new("missing field `plot_width`\n", None);
        assert_eq!(
            err.to_string(),
            "invalid yard request: missing field `plot_width`"
        );
    }
}
