//! SVG export backend.
//!
//! Layouts are drawn in plan coordinates scaled by [`StyleConfig::scale`]
//! pixels per meter, with the y axis flipped so the plot's `y = 0` edge ends
//! up at the bottom of the image. Rectangles are drawn in layout order and
//! every label is drawn afterwards, so no rectangle hides a label.

mod legend;
mod palette;

use std::{fs::File, io::Write};

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use yardplan_core::{
    element::Rect,
    geometry::{Bounds, Insets, Point, Size},
    yard::YardLayout,
};

use crate::{color::Color, config::StyleConfig, export};

use legend::{LEGEND_HEIGHT, LEGEND_ITEM_WIDTH, legend_kinds};
use palette::Palette;

const FONT_FAMILY: &str = "Arial";
const PADDING: f32 = 20.0;
const TITLE: &str = "Container Yard Layout";
const TITLE_HEIGHT: f32 = 30.0;
const WARNING_LINE_HEIGHT: f32 = 18.0;
const LABEL_FONT_SIZE: f32 = 10.0;

/// Builder for [`Svg`] exporters.
#[derive(Debug, Default)]
pub struct SvgBuilder<'a> {
    file_name: Option<String>,
    style: Option<&'a StyleConfig>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output path used by [`export::Exporter::export_layout`].
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Validate the style and build the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] for an invalid background color or
    /// scale.
    pub fn build(self) -> Result<Svg, export::Error> {
        let default_style = StyleConfig::default();
        let style = self.style.unwrap_or(&default_style);

        let background_color = style.background_color().map_err(export::Error::Render)?;
        let scale = style.scale().map_err(export::Error::Render)?;
        let palette = Palette::new().map_err(export::Error::Render)?;

        Ok(Svg {
            file_name: self.file_name,
            scale,
            background_color,
            show_legend: style.show_legend(),
            palette,
        })
    }
}

/// SVG exporter for yard layouts.
#[derive(Debug)]
pub struct Svg {
    file_name: Option<String>,
    scale: f32,
    background_color: Option<Color>,
    show_legend: bool,
    palette: Palette,
}

/// Maps plan coordinates (meters, y up) onto document pixels (y down).
#[derive(Debug, Clone, Copy)]
struct Viewport {
    extent: Bounds,
    scale: f32,
    insets: Insets,
}

impl Viewport {
    fn to_document(self, point: Point) -> Point {
        Point::new(
            self.insets.left() + (point.x() - self.extent.min_x()) * self.scale,
            self.insets.top() + (self.extent.max_y() - point.y()) * self.scale,
        )
    }

    /// Pixel bounds of a plan rectangle.
    fn rect(self, bounds: Bounds) -> Bounds {
        let top_left = self.to_document(Point::new(bounds.min_x(), bounds.max_y()));
        Bounds::new_from_corner(top_left, bounds.to_size().scale(self.scale))
    }
}

impl Svg {
    /// Calculate document insets around the scaled plot.
    ///
    /// The title and one line per warning sit above the plot, the legend
    /// below it.
    fn calculate_insets(&self, layout: &YardLayout) -> Insets {
        let warnings_height = layout.warnings().len() as f32 * WARNING_LINE_HEIGHT;
        let legend_height = if self.show_legend { LEGEND_HEIGHT } else { 0.0 };

        Insets::new(
            PADDING + TITLE_HEIGHT + warnings_height,
            PADDING,
            PADDING + legend_height,
            PADDING,
        )
    }

    /// Calculate the document size for the given content, widening it to fit
    /// the legend row if needed.
    fn calculate_svg_dimensions(&self, layout: &YardLayout, content_size: Size, insets: Insets) -> Size {
        let size = content_size.add_padding(insets);
        let legend_width = if self.show_legend {
            legend_kinds(layout).len() as f32 * LEGEND_ITEM_WIDTH + insets.horizontal_sum()
        } else {
            0.0
        };
        let width = size.width().max(legend_width);

        debug!(width, height = size.height(); "Final SVG dimensions");
        Size::new(width, size.height())
    }

    /// Renders a layout into an SVG document.
    pub fn render_layout(&self, layout: &YardLayout) -> Document {
        let extent = layout.extent();
        let insets = self.calculate_insets(layout);
        let content_size = extent.to_size().scale(self.scale);
        let svg_size = self.calculate_svg_dimensions(layout, content_size, insets);
        let viewport = Viewport {
            extent,
            scale: self.scale,
            insets,
        };

        let mut doc = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", svg_size.width(), svg_size.height()),
            )
            .set("width", svg_size.width())
            .set("height", svg_size.height());

        if let Some(color) = &self.background_color {
            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", svg_size.width())
                    .set("height", svg_size.height())
                    .set("fill", color),
            );
        }

        doc = doc.add(
            svg_element::Text::new(TITLE)
                .set("x", svg_size.width() / 2.0)
                .set("y", PADDING + TITLE_HEIGHT / 2.0)
                .set("text-anchor", "middle")
                .set("dominant-baseline", "middle")
                .set("font-family", FONT_FAMILY)
                .set("font-size", 16),
        );
        doc = doc.add(self.render_warnings(layout));

        let mut shapes = svg_element::Group::new().set("class", "elements");
        for rect in layout.elements() {
            shapes = shapes.add(self.render_rect(rect, viewport));
        }

        let mut labels = svg_element::Group::new().set("class", "labels");
        for rect in layout.elements() {
            if let Some(label) = self.render_label(rect, viewport) {
                labels = labels.add(label);
            }
        }

        doc = doc.add(shapes).add(labels);

        if self.show_legend {
            let legend_y = svg_size.height() - PADDING - LEGEND_HEIGHT;
            doc = doc.add(self.render_legend(layout, PADDING, legend_y));
        }

        doc
    }

    fn render_rect(&self, rect: &Rect, viewport: Viewport) -> svg_element::Rectangle {
        let bounds = viewport.rect(rect.bounds());
        let paint = self.palette.paint(rect.kind());

        let mut node = svg_element::Rectangle::new()
            .set("class", rect.kind().to_string())
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height());

        node = match &paint.fill {
            Some(fill) => node.set("fill", fill).set("fill-opacity", fill.alpha()),
            None => node.set("fill", "none"),
        };
        if let Some(stroke) = &paint.stroke {
            node = node
                .set("stroke", stroke)
                .set("stroke-width", paint.stroke_width);
        }

        node
    }

    /// Centred label, rotated for rectangles taller than wide.
    fn render_label(&self, rect: &Rect, viewport: Viewport) -> Option<svg_element::Text> {
        let label = rect.label()?;
        let center = viewport.rect(rect.bounds()).center();
        let paint = self.palette.paint(rect.kind());

        let mut text = svg_element::Text::new(label)
            .set("x", center.x())
            .set("y", center.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .set("font-family", FONT_FAMILY)
            .set("font-size", LABEL_FONT_SIZE)
            .set("fill", &paint.text);

        if rect.height() > rect.width() {
            text = text.set(
                "transform",
                format!("rotate(-90, {}, {})", center.x(), center.y()),
            );
        }

        Some(text)
    }

    fn render_warnings(&self, layout: &YardLayout) -> svg_element::Group {
        let mut group = svg_element::Group::new().set("class", "warnings");
        let top = PADDING + TITLE_HEIGHT;

        for (index, warning) in layout.warnings().iter().enumerate() {
            group = group.add(
                svg_element::Text::new(format!("⚠ {warning}"))
                    .set("x", PADDING)
                    .set("y", top + (index as f32 + 0.5) * WARNING_LINE_HEIGHT)
                    .set("dominant-baseline", "middle")
                    .set("font-family", FONT_FAMILY)
                    .set("font-size", 12)
                    .set("fill", &self.palette.warning()),
            );
        }

        group
    }

    /// Writes an SVG document to the configured file.
    pub fn write_document(&self, doc: &Document) -> Result<(), export::Error> {
        let Some(file_name) = &self.file_name else {
            return Err(export::Error::Render(
                "no output file configured for SVG export".to_string(),
            ));
        };

        info!(file_name; "Creating SVG file");
        let mut f = match File::create(file_name) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name, err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = write!(f, "{doc}") {
            error!(file_name, err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }
}

impl export::Exporter for Svg {
    fn export_layout(&mut self, layout: &YardLayout) -> Result<(), export::Error> {
        let doc = self.render_layout(layout);
        debug!("SVG document rendered");

        self.write_document(&doc)
    }
}
