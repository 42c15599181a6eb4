//! Geometric primitives for yard layout and positioning.
//!
//! This module provides the fundamental geometric types used throughout
//! Yardplan for describing plot extents, container slots, road bands and
//! other placed elements.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in plan space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned rectangle defined by minimum and maximum coordinates
//! - [`Insets`] - Padding values for four sides
//!
//! # Coordinate System
//!
//! Yardplan uses the engineering-plan convention, all values in meters:
//!
//! ```text
//!    +Y
//!     ▲
//!     │
//!     │
//!   (0,0) ────────► +X
//! ```
//!
//! - **Origin**: The plot corner at `(0, 0)`
//! - **X-axis**: Runs along the plot length
//! - **Y-axis**: Runs along the plot width, increasing upward
//!
//! Renderers targeting screen coordinates (such as SVG) flip the Y axis.
//!
//! # Examples
//!
//! ```
//! # use yardplan_core::geometry::{Bounds, Point, Size};
//! let plot = Bounds::new_from_corner(Point::new(0.0, 0.0), Size::new(80.0, 38.0));
//! let driveway = Bounds::new_from_corner(Point::new(0.0, 0.0), Size::new(4.0, 38.0));
//! let slot = Bounds::new_from_corner(Point::new(4.0, 34.6), Size::new(6.0, 2.4));
//!
//! // Rectangles sharing an edge do not overlap.
//! assert!(!driveway.overlaps(&slot));
//!
//! let row_below = Bounds::new_from_corner(Point::new(4.0, -2.0), Size::new(6.0, 2.4));
//! let extent = plot.merge(&row_below);
//! assert_eq!(extent.min_y(), -2.0);
//! assert_eq!(extent.max_y(), 38.0);
//! ```

/// A 2D point in plan coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new Size with padding added to both width and height
    pub fn add_padding(self, insets: Insets) -> Self {
        Self {
            width: self.width + insets.horizontal_sum(),
            height: self.height + insets.top + insets.bottom,
        }
    }

    /// Multiplies both dimension by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }

}

/// An axis-aligned rectangle with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from its minimum corner and a size.
    ///
    /// # Examples
    ///
    /// ```
    /// # use yardplan_core::geometry::{Bounds, Point, Size};
    /// let slot = Bounds::new_from_corner(Point::new(1.0, 34.6), Size::new(6.0, 2.4));
    /// assert_eq!(slot.min_x(), 1.0);
    /// assert_eq!(slot.max_x(), 7.0);
    /// assert_eq!(slot.width(), 6.0);
    /// ```
    pub fn new_from_corner(corner: Point, size: Size) -> Self {
        Self {
            min_x: corner.x,
            min_y: corner.y,
            max_x: corner.x + size.width,
            max_y: corner.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the minimum corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Merges two bounds into the smallest bounds containing both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use yardplan_core::geometry::{Bounds, Point, Size};
    /// let plot = Bounds::new_from_corner(Point::new(0.0, 0.0), Size::new(80.0, 38.0));
    /// let entry = Bounds::new_from_corner(Point::new(80.0, 16.0), Size::new(1.0, 6.0));
    ///
    /// let combined = plot.merge(&entry);
    /// assert_eq!(combined.width(), 81.0);
    /// assert_eq!(combined.height(), 38.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Returns true if the interiors of the two bounds overlap.
    ///
    /// Bounds that only share an edge or a corner do not overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// # use yardplan_core::geometry::{Bounds, Point, Size};
    /// let a = Bounds::new_from_corner(Point::new(1.0, 0.0), Size::new(6.0, 2.4));
    /// let b = Bounds::new_from_corner(Point::new(7.0, 0.0), Size::new(6.0, 2.4));
    /// let c = Bounds::new_from_corner(Point::new(5.0, 1.0), Size::new(6.0, 2.4));
    ///
    /// assert!(!a.overlaps(&b));
    /// assert!(a.overlaps(&c));
    /// ```
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }

}

/// Padding values for the four sides of a rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with explicit values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn top(self) -> f32 {
        self.top
    }

    pub fn left(self) -> f32 {
        self.left
    }

    /// Sum of the left and right insets
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.0, 4.0);
        assert_eq!(point.x(), 3.0);
        assert_eq!(point.y(), 4.0);
    }

    #[test]
    fn test_size_add_padding() {
        let size = Size::new(80.0, 38.0).add_padding(Insets::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(size.width(), 86.0);
        assert_eq!(size.height(), 42.0);
    }

    #[test]
    fn test_size_scale() {
        let size = Size::new(6.0, 2.5).scale(10.0);
        assert_eq!(size, Size::new(60.0, 25.0));
    }

    #[test]
    fn test_bounds_new_from_corner() {
        let bounds = Bounds::new_from_corner(Point::new(4.0, 0.0), Size::new(76.0, 38.0));
        assert_eq!(bounds.min_x(), 4.0);
        assert_eq!(bounds.min_y(), 0.0);
        assert_eq!(bounds.max_x(), 80.0);
        assert_eq!(bounds.max_y(), 38.0);
        assert_eq!(bounds.min_point(), Point::new(4.0, 0.0));
        assert_eq!(bounds.to_size(), Size::new(76.0, 38.0));
        assert_eq!(bounds.center(), Point::new(42.0, 19.0));
    }

    #[test]
    fn test_bounds_overlaps_shared_edge() {
        let left = Bounds::new_from_corner(Point::new(0.0, 0.0), Size::new(4.0, 38.0));
        let right = Bounds::new_from_corner(Point::new(4.0, 0.0), Size::new(6.0, 2.4));
        assert!(!left.overlaps(&right));
        assert!(!right.overlaps(&left));
    }

    #[test]
    fn test_bounds_overlaps_partial() {
        let road = Bounds::new_from_corner(Point::new(0.0, 17.0), Size::new(80.0, 4.0));
        let row = Bounds::new_from_corner(Point::new(7.0, 20.0), Size::new(6.0, 2.4));
        assert!(road.overlaps(&row));
        assert!(row.overlaps(&road));
    }

    #[test]
    fn test_insets() {
        let insets = Insets::new(10.0, 5.0, 5.0, 2.0);
        assert_eq!(insets.top(), 10.0);
        assert_eq!(insets.left(), 2.0);
        assert_eq!(insets.horizontal_sum(), 7.0);
    }
}
