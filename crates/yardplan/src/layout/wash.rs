//! Wash station placement.
//!
//! Stations stack upwards along the right edge of the plot, one margin in
//! from the border. A station that would cross the top margin or land in the
//! driveway is left out and reported instead.

use log::debug;

use yardplan_core::{
    diagnostic::{Diagnostic, DiagnosticCode},
    element::{ElementKind, Rect},
    geometry::{Point, Size},
    spec::YardSpec,
};

/// Why a wash station could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conflict {
    PastTopMargin,
    InsideDriveway,
}

/// Placed stations plus one diagnostic per omitted station.
#[derive(Debug, Default)]
pub struct WashPlacement {
    pub stations: Vec<Rect>,
    pub conflicts: Vec<Diagnostic>,
}

/// Shared x coordinate of every station.
pub fn wash_x(spec: &YardSpec) -> f32 {
    spec.plot_length() - spec.wash_length() - spec.margin()
}

/// y coordinate of station `index`.
pub fn wash_y(spec: &YardSpec, index: usize) -> f32 {
    spec.margin() + index as f32 * (spec.wash_width() + spec.wash_gap())
}

fn conflict(spec: &YardSpec, x: f32, y: f32) -> Option<Conflict> {
    if y + spec.wash_width() > spec.plot_width() - spec.margin() {
        Some(Conflict::PastTopMargin)
    } else if x < spec.access_road_width() {
        Some(Conflict::InsideDriveway)
    } else {
        None
    }
}

pub fn place(spec: &YardSpec) -> WashPlacement {
    let x = wash_x(spec);
    let size = Size::new(spec.wash_length(), spec.wash_width());
    let mut placement = WashPlacement::default();

    for index in 0..spec.num_wash_stations() {
        let y = wash_y(spec, index);
        let number = index + 1;

        match conflict(spec, x, y) {
            None => placement.stations.push(
                Rect::new(ElementKind::WashStation, Point::new(x, y), size)
                    .with_label(format!("WASH {number}")),
            ),
            Some(reason) => {
                let (message, help) = match reason {
                    Conflict::PastTopMargin => (
                        format!("wash station {number} does not fit below the top margin and was omitted"),
                        "reduce the number of wash stations or the gap between them",
                    ),
                    Conflict::InsideDriveway => (
                        format!("wash station {number} would sit inside the driveway and was omitted"),
                        "use a longer plot or shorter wash stations",
                    ),
                };
                debug!(station = number, x, y; "Wash station omitted");
                placement.conflicts.push(
                    Diagnostic::warning(message)
                        .with_code(DiagnosticCode::W002)
                        .with_help(help),
                );
            }
        }
    }

    placement
}
