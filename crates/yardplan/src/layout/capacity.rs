//! Row and column capacity.
//!
//! The capacity of a yard is decided along two axes: the *row span*, along
//! which containers are laid end to end, and the *cross span*, along which
//! rows are stacked with an access road between each pair.

use yardplan_core::spec::{Orientation, YardSpec};

use crate::error::YardError;

/// Largest demand the sweep will place.
///
/// Rows past the plot are not clamped, so a larger demand would only grow
/// the layout off the plot until memory runs out.
pub const MAX_CONTAINERS: usize = 1_000_000;

/// Number of containers that fit end to end in one row.
///
/// `floor((span - 2·margin) / container_length)`, or zero when the margins
/// alone consume the span.
pub fn containers_per_row(span: f32, container_length: f32, margin: f32) -> usize {
    let usable = span - 2.0 * margin;
    if usable <= 0.0 {
        return 0;
    }
    (usable / container_length).floor() as usize
}

/// Number of full or partial rows needed for `num_containers`.
///
/// Returns zero when `containers_per_row` is zero; callers reject that case
/// before sweeping.
pub fn num_rows(num_containers: usize, containers_per_row: usize) -> usize {
    if containers_per_row == 0 {
        return 0;
    }
    num_containers.div_ceil(containers_per_row)
}

/// Extent needed across the rows: each row plus the road between
/// consecutive rows plus both margins.
pub fn required_extent(rows: usize, container_width: f32, access_road_width: f32, margin: f32) -> f32 {
    let gaps = rows.saturating_sub(1);
    rows as f32 * container_width + gaps as f32 * access_road_width + 2.0 * margin
}

/// Capacity figures of a yard for a resolved orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capacity {
    pub containers_per_row: usize,
    pub num_rows: usize,
}

impl Capacity {
    /// Compute capacity, rejecting yards where not a single container fits in a row.
    ///
    /// # Errors
    ///
    /// Returns [`YardError::InsufficientCapacity`] when `containers_per_row` is
    /// zero or the demand exceeds [`MAX_CONTAINERS`].
    pub fn compute(spec: &YardSpec, orientation: Orientation) -> Result<Self, YardError> {
        if spec.num_containers() > MAX_CONTAINERS {
            return Err(YardError::InsufficientCapacity(format!(
                "{} containers requested, at most {MAX_CONTAINERS} can be planned",
                spec.num_containers()
            )));
        }

        let row_span = match orientation {
            Orientation::Horizontal => spec.plot_length(),
            Orientation::Vertical => spec.plot_width(),
        };

        let per_row = containers_per_row(row_span, spec.container_length(), spec.margin());
        if per_row == 0 {
            return Err(YardError::InsufficientCapacity(format!(
                "a {orientation} row offers {:.2} m between margins but one container needs {:.2} m",
                row_span - 2.0 * spec.margin(),
                spec.container_length()
            )));
        }

        Ok(Self {
            containers_per_row: per_row,
            num_rows: num_rows(spec.num_containers(), per_row),
        })
    }
}
