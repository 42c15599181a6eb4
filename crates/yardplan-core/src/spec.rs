//! Yard specification: the immutable input of a layout computation.
//!
//! A [`YardSpec`] describes the plot, the fixed dimensions of containers,
//! roads and wash stations, the demand counts, and where vehicles enter the
//! yard. It is built once per request and handed to the layout engine by
//! reference; nothing in the engine mutates it.
//!
//! Construction is infallible. [`YardSpec::validate`] checks the numeric
//! invariants and is called by the engine before any placement happens.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default dimensions used when a request does not override them.
///
/// These are the constants of a standard 20ft container yard.
pub mod defaults {
    pub const CONTAINER_LENGTH: f32 = 6.0;
    pub const CONTAINER_WIDTH: f32 = 2.4;
    pub const MARGIN: f32 = 1.0;
    pub const ACCESS_ROAD_WIDTH: f32 = 4.0;
    pub const NUM_WASH_STATIONS: usize = 2;
    pub const WASH_LENGTH: f32 = 4.88;
    pub const WASH_WIDTH: f32 = 2.44;
    pub const WASH_GAP: f32 = 2.0;
    pub const ENTRY_WIDTH: f32 = 6.0;
    pub const MIDDLE_CROSSROAD_WIDTH: f32 = 4.0;
}

/// The side of the plot through which vehicles enter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntrySide {
    /// Entry on a short side (default)
    #[default]
    Short,
    /// Entry on a long side
    Long,
}

impl FromStr for EntrySide {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(Self::Short),
            "long" => Ok(Self::Long),
            _ => Err("Unsupported entry side"),
        }
    }
}

impl From<EntrySide> for &'static str {
    fn from(val: EntrySide) -> Self {
        match val {
            EntrySide::Short => "short",
            EntrySide::Long => "long",
        }
    }
}

impl Display for EntrySide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Direction in which container rows run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Rows run along the plot length (x axis) and stack along the width.
    Horizontal,
    /// Rows (columns) run along the plot width (y axis) and stack along the length.
    Vertical,
}

impl Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// How the row [`Orientation`] is chosen for a yard.
///
/// # Variants
///
/// - `FollowEntrySide` - Short-side entry lays rows horizontally, long-side
///   entry lays them vertically (default)
/// - `Horizontal` - Always horizontal rows, regardless of the entry side
/// - `Vertical` - Always vertical rows, regardless of the entry side
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrientationPolicy {
    #[default]
    FollowEntrySide,
    Horizontal,
    Vertical,
}

impl FromStr for OrientationPolicy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "follow_entry_side" => Ok(Self::FollowEntrySide),
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            _ => Err("Unsupported orientation policy"),
        }
    }
}

impl From<OrientationPolicy> for &'static str {
    fn from(val: OrientationPolicy) -> Self {
        match val {
            OrientationPolicy::FollowEntrySide => "follow_entry_side",
            OrientationPolicy::Horizontal => "horizontal",
            OrientationPolicy::Vertical => "vertical",
        }
    }
}

impl Display for OrientationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Validation failures for a [`YardSpec`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecError {
    #[error("`{field}` must be a positive finite length, got {value}")]
    NonPositiveLength { field: &'static str, value: f32 },

    #[error("`num_containers` must be at least 1")]
    NoContainers,
}

impl SpecError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            SpecError::NonPositiveLength { field, .. } => field,
            SpecError::NoContainers => "num_containers",
        }
    }
}

/// Immutable description of a yard to lay out.
///
/// # Examples
///
/// ```
/// # use yardplan_core::spec::{EntrySide, YardSpec};
/// let spec = YardSpec::new(80.0, 38.0, 50)
///     .with_num_wash_stations(2)
///     .with_entry_side(EntrySide::Long);
///
/// assert_eq!(spec.container_length(), 6.0);
/// assert!(spec.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct YardSpec {
    plot_length: f32,
    plot_width: f32,
    container_length: f32,
    container_width: f32,
    margin: f32,
    access_road_width: f32,
    num_containers: usize,
    num_wash_stations: usize,
    wash_length: f32,
    wash_width: f32,
    wash_gap: f32,
    entry_side: EntrySide,
    entry_width: f32,
    orientation: OrientationPolicy,
    middle_crossroad_width: Option<f32>,
}

impl YardSpec {
    /// Creates a spec for the given plot and demand, with every other field
    /// set to its [default](defaults) and no crossroad.
    pub fn new(plot_length: f32, plot_width: f32, num_containers: usize) -> Self {
        Self {
            plot_length,
            plot_width,
            container_length: defaults::CONTAINER_LENGTH,
            container_width: defaults::CONTAINER_WIDTH,
            margin: defaults::MARGIN,
            access_road_width: defaults::ACCESS_ROAD_WIDTH,
            num_containers,
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

    pub fn with_container_size(mut self, length: f32, width: f32) -> Self {
        self.container_length = length;
        self.container_width = width;
        self
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_access_road_width(mut self, width: f32) -> Self {
        self.access_road_width = width;
        self
    }

    pub fn with_num_wash_stations(mut self, count: usize) -> Self {
        self.num_wash_stations = count;
        self
    }

    /// Set the footprint of a single wash station.
    pub fn with_wash_size(mut self, length: f32, width: f32) -> Self {
        self.wash_length = length;
        self.wash_width = width;
        self
    }

    pub fn with_wash_gap(mut self, gap: f32) -> Self {
        self.wash_gap = gap;
        self
    }

    pub fn with_entry_side(mut self, side: EntrySide) -> Self {
        self.entry_side = side;
        self
    }

    pub fn with_entry_width(mut self, width: f32) -> Self {
        self.entry_width = width;
        self
    }

    pub fn with_orientation(mut self, orientation: OrientationPolicy) -> Self {
        self.orientation = orientation;
        self
    }

    /// Enable (`Some`) or disable (`None`) the middle crossroad.
    pub fn with_middle_crossroad(mut self, width: Option<f32>) -> Self {
        self.middle_crossroad_width = width;
        self
    }

    pub fn plot_length(&self) -> f32 {
        self.plot_length
    }

    pub fn plot_width(&self) -> f32 {
        self.plot_width
    }

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

    pub fn num_containers(&self) -> usize {
        self.num_containers
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

    /// Width of the middle crossroad, or `None` when the yard has none.
    pub fn middle_crossroad_width(&self) -> Option<f32> {
        self.middle_crossroad_width
    }

    /// Checks every length is positive and finite and at least one
    /// container is requested.
    ///
    /// # Errors
    ///
    /// Returns the first [`SpecError`] found, in field declaration order.
    pub fn validate(&self) -> Result<(), SpecError> {
        let lengths = [
            ("plot_length", self.plot_length),
            ("plot_width", self.plot_width),
            ("container_length", self.container_length),
            ("container_width", self.container_width),
            ("margin", self.margin),
            ("access_road_width", self.access_road_width),
            ("wash_length", self.wash_length),
            ("wash_width", self.wash_width),
            ("wash_gap", self.wash_gap),
            ("entry_width", self.entry_width),
        ];

        for (field, value) in lengths {
            check_length(field, value)?;
        }

        if let Some(width) = self.middle_crossroad_width {
            check_length("middle_crossroad_width", width)?;
        }

        if self.num_containers == 0 {
            return Err(SpecError::NoContainers);
        }

        Ok(())
    }
}

fn check_length(field: &'static str, value: f32) -> Result<(), SpecError> {
    // NaN fails the comparison as well
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SpecError::NonPositiveLength { field, value })
    }
}
