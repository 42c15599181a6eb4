//! The computed yard layout.
//!
//! [`YardLayout`] is the output of the layout engine: the placed [`Rect`]s
//! in drawing order together with the diagnostics raised while placing them.
//! Renderers consume it read-only.

use crate::{
    diagnostic::Diagnostic,
    element::{ElementKind, Rect},
    geometry::Bounds,
    spec::Orientation,
};

/// Summary of how the container sweep used the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSummary {
    orientation: Orientation,
    containers_per_row: usize,
    rows: usize,
}

impl RowSummary {
    pub fn new(orientation: Orientation, containers_per_row: usize, rows: usize) -> Self {
        Self {
            orientation,
            containers_per_row,
            rows,
        }
    }

    /// Direction in which rows were laid.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of slots per row, including slots skipped for the driveway.
    pub fn containers_per_row(&self) -> usize {
        self.containers_per_row
    }

    /// Number of rows the sweep advanced through.
    pub fn rows(&self) -> usize {
        self.rows
    }
}

/// An ordered collection of placed elements plus diagnostics.
///
/// Element order is the drawing (z) order: border, road zones, containers,
/// wash stations, entry. Labels are meant to be drawn after every rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct YardLayout {
    plot: Bounds,
    summary: RowSummary,
    elements: Vec<Rect>,
    warnings: Vec<Diagnostic>,
}

impl YardLayout {
    /// Assemble a layout from already ordered elements and diagnostics.
    pub fn new(
        plot: Bounds,
        summary: RowSummary,
        elements: Vec<Rect>,
        warnings: Vec<Diagnostic>,
    ) -> Self {
        Self {
            plot,
            summary,
            elements,
            warnings,
        }
    }

    /// The plot outline.
    pub fn plot(&self) -> Bounds {
        self.plot
    }

    pub fn summary(&self) -> RowSummary {
        self.summary
    }

    /// All elements in drawing order.
    pub fn elements(&self) -> &[Rect] {
        &self.elements
    }

    /// Diagnostics raised while computing the layout.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Iterate over the elements of one kind, in drawing order.
    pub fn elements_of(&self, kind: ElementKind) -> impl Iterator<Item = &Rect> {
        self.elements.iter().filter(move |rect| rect.kind() == kind)
    }

    /// Number of elements of the given kind.
    pub fn count(&self, kind: ElementKind) -> usize {
        self.elements_of(kind).count()
    }

    /// Bounds covering the plot and every placed element.
    ///
    /// Unclamped rows and an outside entry marker can make this larger than
    /// [`plot`](Self::plot).
    pub fn extent(&self) -> Bounds {
        self.elements
            .iter()
            .fold(self.plot, |acc, rect| acc.merge(&rect.bounds()))
    }
}
