//! Placed layout elements.
//!
//! Every piece of geometry the engine produces is a [`Rect`]: an
//! axis-aligned rectangle tagged with an [`ElementKind`] and an optional
//! label. Rects are values; once created they are never modified.

use std::fmt::{self, Display};

use crate::geometry::{Bounds, Point, Size};

/// Semantic tag of a placed rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    /// The plot outline
    Border,
    /// The access lane along the `x = 0` edge
    Driveway,
    /// A road cutting across the yard interior
    Crossroad,
    /// A single container slot
    Container,
    /// A single washing station
    WashStation,
    /// The entry marker on the plot border
    Entry,
}

impl ElementKind {
    /// Human readable name, as used in legends.
    pub fn display_name(self) -> &'static str {
        match self {
            ElementKind::Border => "Plot Border",
            ElementKind::Driveway => "Driveway",
            ElementKind::Crossroad => "Crossroad",
            ElementKind::Container => "Container",
            ElementKind::WashStation => "Washing Station",
            ElementKind::Entry => "Entry",
        }
    }
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ElementKind::Border => "border",
            ElementKind::Driveway => "driveway",
            ElementKind::Crossroad => "crossroad",
            ElementKind::Container => "container",
            ElementKind::WashStation => "wash_station",
            ElementKind::Entry => "entry",
        };
        write!(f, "{s}")
    }
}

/// An axis-aligned rectangle placed in the yard.
///
/// A rect keeps the origin and size it was built with; [`bounds`](Rect::bounds)
/// derives the far edges from them.
///
/// # Examples
///
/// ```
/// # use yardplan_core::element::{ElementKind, Rect};
/// # use yardplan_core::geometry::{Point, Size};
/// let wash = Rect::new(
///     ElementKind::WashStation,
///     Point::new(74.12, 1.0),
///     Size::new(4.88, 2.44),
/// )
/// .with_label("WASH 1");
///
/// assert_eq!(wash.kind(), ElementKind::WashStation);
/// assert_eq!(wash.label(), Some("WASH 1"));
/// assert_eq!(wash.origin().y(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    kind: ElementKind,
    origin: Point,
    size: Size,
    label: Option<String>,
}

impl Rect {
    /// Create an unlabelled rectangle with its minimum corner at `origin`.
    pub fn new(kind: ElementKind, origin: Point, size: Size) -> Self {
        Self {
            kind,
            origin,
            size,
            label: None,
        }
    }

    /// Attach a label (builder style).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The minimum corner of the rectangle.
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.width()
    }

    pub fn height(&self) -> f32 {
        self.size.height()
    }

    /// Plan-space bounds, with `max = origin + size`.
    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_corner(self.origin, self.size)
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_geometry() {
        let rect = Rect::new(
            ElementKind::Container,
            Point::new(7.0, 34.5),
            Size::new(6.0, 2.5),
        );

        assert_eq!(rect.origin(), Point::new(7.0, 34.5));
        assert_eq!(rect.width(), 6.0);
        assert_eq!(rect.height(), 2.5);
        assert_eq!(rect.bounds().max_x(), 13.0);
        assert_eq!(rect.label(), None);
    }

    #[test]
    fn test_rect_keeps_size_off_grid() {
        // 61.7 + 2.4 is not exact in f32; width must still read back as built.
        let rect = Rect::new(
            ElementKind::Container,
            Point::new(61.7, 13.3),
            Size::new(2.4, 6.058),
        );

        assert_eq!(rect.width(), 2.4);
        assert_eq!(rect.height(), 6.058);
        assert_eq!(rect.size(), Size::new(2.4, 6.058));
        assert_eq!(rect.bounds().max_x(), 61.7 + 2.4);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ElementKind::WashStation.to_string(), "wash_station");
        assert_eq!(ElementKind::WashStation.display_name(), "Washing Station");
        assert_eq!(ElementKind::Entry.to_string(), "entry");
    }

    #[test]
    fn test_kind_order_follows_drawing_order() {
        let mut kinds = vec![
            ElementKind::Entry,
            ElementKind::Container,
            ElementKind::Border,
            ElementKind::WashStation,
            ElementKind::Crossroad,
            ElementKind::Driveway,
        ];
        kinds.sort();
        assert_eq!(
            kinds,
            vec![
                ElementKind::Border,
                ElementKind::Driveway,
                ElementKind::Crossroad,
                ElementKind::Container,
                ElementKind::WashStation,
                ElementKind::Entry,
            ]
        );
    }
}
