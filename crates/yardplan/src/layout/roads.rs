//! Fixed zones: plot border, driveway, crossroad and entry marker.
//!
//! These depend only on the request and the resolved orientation, so the
//! container sweep can read the crossroad band before the zone itself is
//! emitted.

use yardplan_core::{
    element::{ElementKind, Rect},
    geometry::{Bounds, Point, Size},
    spec::{EntrySide, Orientation, YardSpec},
};

/// Depth of the entry marker across the plot edge.
pub const ENTRY_DEPTH: f32 = 1.0;

/// The plot outline.
pub fn border(spec: &YardSpec) -> Rect {
    Rect::new(
        ElementKind::Border,
        Point::default(),
        Size::new(spec.plot_length(), spec.plot_width()),
    )
}

/// The access lane along the `x = 0` edge, spanning the full plot width.
pub fn driveway(spec: &YardSpec) -> Rect {
    Rect::new(
        ElementKind::Driveway,
        Point::default(),
        Size::new(spec.access_road_width(), spec.plot_width()),
    )
    .with_label("DRIVEWAY")
}

/// Origin and size of the crossroad, if one is requested.
///
/// Horizontal rows get a band across the plot at half width; vertical
/// columns get a band along the plot at half length.
fn crossroad_footprint(spec: &YardSpec, orientation: Orientation) -> Option<(Point, Size)> {
    let width = spec.middle_crossroad_width()?;
    Some(match orientation {
        Orientation::Horizontal => (
            Point::new(0.0, spec.plot_width() / 2.0 - width / 2.0),
            Size::new(spec.plot_length(), width),
        ),
        Orientation::Vertical => (
            Point::new(spec.plot_length() / 2.0 - width / 2.0, 0.0),
            Size::new(width, spec.plot_width()),
        ),
    })
}

/// Band occupied by the crossroad, identical to the bounds of [`crossroad`].
pub fn crossroad_band(spec: &YardSpec, orientation: Orientation) -> Option<Bounds> {
    crossroad_footprint(spec, orientation).map(|(origin, size)| Bounds::new_from_corner(origin, size))
}

pub fn crossroad(spec: &YardSpec, orientation: Orientation) -> Option<Rect> {
    crossroad_footprint(spec, orientation).map(|(origin, size)| {
        Rect::new(ElementKind::Crossroad, origin, size).with_label("ACCESS CROSSROAD")
    })
}

/// The entry marker, centred on the chosen plot edge.
///
/// A short-side entry sits on the bottom edge inside the plot. A long-side
/// entry sits just outside the right edge, so it never overlaps the
/// wash station column.
pub fn entry(spec: &YardSpec) -> Rect {
    let length = spec.plot_length();
    let width = spec.plot_width();
    let entry_width = spec.entry_width();

    let (origin, size) = match spec.entry_side() {
        EntrySide::Short => (
            Point::new((length - entry_width) / 2.0, 0.0),
            Size::new(entry_width, ENTRY_DEPTH),
        ),
        EntrySide::Long => (
            Point::new(length, (width - entry_width) / 2.0),
            Size::new(ENTRY_DEPTH, entry_width),
        ),
    };

    Rect::new(ElementKind::Entry, origin, size).with_label("ENTRY")
}
