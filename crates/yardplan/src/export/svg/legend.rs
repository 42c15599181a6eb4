//! Legend rendering.

use svg::node::element as svg_element;

use yardplan_core::{element::ElementKind, yard::YardLayout};

use super::{FONT_FAMILY, Svg};

/// Height reserved below the plot for the legend, in pixels.
pub const LEGEND_HEIGHT: f32 = 30.0;

/// Horizontal space taken by one legend entry, in pixels.
pub const LEGEND_ITEM_WIDTH: f32 = 150.0;

const SWATCH_SIZE: f32 = 14.0;

/// Kinds listed in the legend, in legend order. The border is not listed.
const LEGEND_KINDS: [ElementKind; 5] = [
    ElementKind::Container,
    ElementKind::WashStation,
    ElementKind::Driveway,
    ElementKind::Crossroad,
    ElementKind::Entry,
];

/// Kinds present in the layout that get a legend entry.
pub fn legend_kinds(layout: &YardLayout) -> Vec<ElementKind> {
    LEGEND_KINDS
        .into_iter()
        .filter(|&kind| layout.count(kind) > 0)
        .collect()
}

impl Svg {
    /// Renders one swatch and name per present kind, starting at `(x, y)`.
    pub(super) fn render_legend(&self, layout: &YardLayout, x: f32, y: f32) -> svg_element::Group {
        let mut group = svg_element::Group::new().set("class", "legend");

        for (index, kind) in legend_kinds(layout).into_iter().enumerate() {
            let item_x = x + index as f32 * LEGEND_ITEM_WIDTH;
            let paint = self.palette.paint(kind);

            let mut swatch = svg_element::Rectangle::new()
                .set("class", "legend-swatch")
                .set("x", item_x)
                .set("y", y + (LEGEND_HEIGHT - SWATCH_SIZE) / 2.0)
                .set("width", SWATCH_SIZE)
                .set("height", SWATCH_SIZE);
            if let Some(fill) = &paint.fill {
                swatch = swatch.set("fill", fill).set("fill-opacity", fill.alpha());
            }
            if let Some(stroke) = &paint.stroke {
                swatch = swatch.set("stroke", stroke).set("stroke-width", 1.0);
            }

            let name = svg_element::Text::new(kind.display_name())
                .set("x", item_x + SWATCH_SIZE + 6.0)
                .set("y", y + LEGEND_HEIGHT / 2.0)
                .set("dominant-baseline", "middle")
                .set("font-family", FONT_FAMILY)
                .set("font-size", 12);

            group = group.add(swatch).add(name);
        }

        group
    }
}
