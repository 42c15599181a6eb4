//! Post-placement checks.

use log::debug;

use yardplan_core::{
    diagnostic::{Diagnostic, DiagnosticCode},
    spec::{Orientation, YardSpec},
};

use super::capacity::required_extent;

/// Report rows that run past the plot.
///
/// The required extent counts every row the sweep advanced through plus any
/// crossroad shift, and is compared against the plot width for horizontal
/// rows or the plot length for vertical columns.
pub fn check_overflow(
    spec: &YardSpec,
    orientation: Orientation,
    rows: usize,
    crossroad_shift: f32,
) -> Option<Diagnostic> {
    let required = required_extent(
        rows,
        spec.container_width(),
        spec.access_road_width(),
        spec.margin(),
    ) + crossroad_shift;

    let (available, axis) = match orientation {
        Orientation::Horizontal => (spec.plot_width(), "vertical"),
        Orientation::Vertical => (spec.plot_length(), "horizontal"),
    };

    if required <= available {
        return None;
    }

    debug!(required, available, rows; "Rows exceed the plot");
    Some(
        Diagnostic::warning(format!(
            "not enough {axis} space for all {rows} rows: {required:.2} m required, {available:.2} m available"
        ))
        .with_code(DiagnosticCode::W001)
        .with_help("enlarge the plot or request fewer containers"),
    )
}
