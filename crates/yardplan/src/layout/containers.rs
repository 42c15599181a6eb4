//! Container sweep.
//!
//! Rows are filled one slot at a time starting from the corner furthest
//! from the driveway's origin: horizontal rows start below the top margin
//! and advance downwards, vertical columns start right of the left margin
//! and advance rightwards.
//!
//! Positions are stepped from their neighbour rather than computed from an
//! index. A slot's far edge is the same float sum as the next slot's origin,
//! and each row is placed so its far edge stays at or below the edge it
//! must clear, which keeps neighbours from overlapping by a rounding error.

use log::{debug, trace};

use yardplan_core::{
    element::{ElementKind, Rect},
    geometry::{Bounds, Point, Size},
    spec::{Orientation, YardSpec},
};

use super::capacity::Capacity;
use crate::error::YardError;

/// Outcome of the container sweep.
#[derive(Debug)]
pub struct Sweep {
    pub containers: Vec<Rect>,
    /// Rows advanced through, including rows left empty by the driveway.
    pub rows: usize,
    /// Extra offset applied to the rows beyond the crossroad, zero if none.
    pub crossroad_shift: f32,
}

/// Largest origin whose far edge `origin + size` does not pass `limit`.
fn origin_below(limit: f32, size: f32) -> f32 {
    let mut origin = limit - size;
    while origin + size > limit {
        origin = origin.next_down();
    }
    origin
}

/// Pushes a row off the crossroad band, at most once per sweep.
struct CrossroadAvoidance {
    band: Option<Bounds>,
    shift: f32,
}

impl CrossroadAvoidance {
    fn new(band: Option<Bounds>) -> Self {
        Self { band, shift: 0.0 }
    }

    /// Returns the origin coordinate across the rows for a row whose
    /// footprint is `row`.
    ///
    /// The first row that overlaps the band moves by the band width plus one
    /// container width. Later rows step from it, so they stay past the band.
    fn clear(&mut self, row: Bounds, container_width: f32, across: Orientation) -> f32 {
        let origin = match across {
            Orientation::Horizontal => row.min_y(),
            Orientation::Vertical => row.min_x(),
        };
        if self.shift > 0.0 {
            return origin;
        }
        let Some(band) = self.band else {
            return origin;
        };
        if !row.overlaps(&band) {
            return origin;
        }

        let cleared = match across {
            Orientation::Horizontal => (origin - band.height() - container_width)
                .min(origin_below(band.min_y(), container_width)),
            Orientation::Vertical => {
                (origin + band.width() + container_width).max(band.max_x())
            }
        };
        self.shift = (cleared - origin).abs();
        debug!(shift = self.shift; "Shifting rows past crossroad");
        cleared
    }
}

/// Place exactly `spec.num_containers()` containers.
///
/// Slots whose x coordinate falls inside the driveway are consumed without
/// placing anything, and the sweep adds rows until the demand is met.
/// Rows are not clamped to the plot; overflow is reported separately.
///
/// # Errors
///
/// Returns [`YardError::InsufficientCapacity`] when every slot of a
/// horizontal row lies inside the driveway, since no number of rows could
/// then place a container.
pub fn sweep(
    spec: &YardSpec,
    orientation: Orientation,
    capacity: &Capacity,
    crossroad: Option<Bounds>,
) -> Result<Sweep, YardError> {
    match orientation {
        Orientation::Horizontal => sweep_horizontal(spec, capacity, crossroad),
        Orientation::Vertical => Ok(sweep_vertical(spec, capacity, crossroad)),
    }
}

fn sweep_horizontal(
    spec: &YardSpec,
    capacity: &Capacity,
    crossroad: Option<Bounds>,
) -> Result<Sweep, YardError> {
    let n = spec.num_containers();
    let cl = spec.container_length();
    let cw = spec.container_width();
    let road = spec.access_road_width();
    let margin = spec.margin();
    let per_row = capacity.containers_per_row;

    // Slots left of the driveway edge are skipped in every row.
    let mut skipped = if road > margin {
        (((road - margin) / cl).ceil() as usize).min(per_row)
    } else {
        0
    };
    let mut first_x = margin + skipped as f32 * cl;
    while skipped < per_row && first_x < road {
        first_x += cl;
        skipped += 1;
    }
    let usable = per_row - skipped;
    if usable == 0 {
        return Err(YardError::InsufficientCapacity(format!(
            "all {per_row} slots of a row lie inside the {road:.2} m driveway"
        )));
    }

    let row_length = per_row as f32 * cl;

    let mut avoidance = CrossroadAvoidance::new(crossroad);
    let mut containers = Vec::new();
    let mut rows = 0;
    let mut y = origin_below(spec.plot_width() - margin, cw);

    while containers.len() < n {
        let footprint =
            Bounds::new_from_corner(Point::new(margin, y), Size::new(row_length, cw));
        y = avoidance.clear(footprint, cw, Orientation::Horizontal);
        trace!(row = rows, y; "Filling row");

        let mut x = first_x;
        for _ in 0..usable.min(n - containers.len()) {
            containers.push(Rect::new(
                ElementKind::Container,
                Point::new(x, y),
                Size::new(cl, cw),
            ));
            x += cl;
        }
        rows += 1;
        y = origin_below(y - road, cw);
    }

    Ok(Sweep {
        containers,
        rows,
        crossroad_shift: avoidance.shift,
    })
}

fn sweep_vertical(spec: &YardSpec, capacity: &Capacity, crossroad: Option<Bounds>) -> Sweep {
    let n = spec.num_containers();
    let cl = spec.container_length();
    let cw = spec.container_width();
    let road = spec.access_road_width();
    let margin = spec.margin();
    let per_column = capacity.containers_per_row;

    let top = spec.plot_width() - margin;
    let column_length = per_column as f32 * cl;

    let mut avoidance = CrossroadAvoidance::new(crossroad);
    let mut containers = Vec::new();
    let mut columns = 0;
    let mut x = margin;

    while containers.len() < n {
        let footprint = Bounds::new_from_corner(
            Point::new(x, top - column_length),
            Size::new(cw, column_length),
        );
        x = avoidance.clear(footprint, cw, Orientation::Vertical);

        if x < road {
            trace!(column = columns, x; "Column inside driveway, skipped");
        } else {
            trace!(column = columns, x; "Filling column");
            let mut edge = top;
            for _ in 0..per_column.min(n - containers.len()) {
                let y = origin_below(edge, cl);
                containers.push(Rect::new(
                    ElementKind::Container,
                    Point::new(x, y),
                    Size::new(cw, cl),
                ));
                edge = y;
            }
        }
        columns += 1;
        x += cw + road;
    }

    Sweep {
        containers,
        rows: columns,
        crossroad_shift: avoidance.shift,
    }
}
