//! Fill and stroke colors per element kind.

use yardplan_core::element::ElementKind;

use crate::color::Color;

/// Paint applied to one element kind.
#[derive(Debug, Clone, Copy)]
pub struct Paint {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f32,
    pub text: Color,
}

/// Paints for every element kind, parsed once per exporter.
#[derive(Debug, Clone)]
pub struct Palette {
    border: Paint,
    driveway: Paint,
    crossroad: Paint,
    container: Paint,
    wash_station: Paint,
    entry: Paint,
    warning: Color,
}

impl Palette {
    /// Build the standard yard palette.
    ///
    /// # Errors
    ///
    /// Returns the color parse error if any palette entry is not a valid CSS
    /// color.
    pub fn new() -> Result<Self, String> {
        let black = Color::new("black")?;
        let road = Color::new("lightgray")?;

        Ok(Self {
            border: Paint {
                fill: None,
                stroke: Some(black),
                stroke_width: 2.0,
                text: black,
            },
            driveway: Paint {
                fill: Some(road.with_alpha(0.5)),
                stroke: None,
                stroke_width: 0.0,
                text: black,
            },
            crossroad: Paint {
                fill: Some(road.with_alpha(0.4)),
                stroke: None,
                stroke_width: 0.0,
                text: black,
            },
            container: Paint {
                fill: Some(Color::new("lightblue")?),
                stroke: Some(Color::new("blue")?),
                stroke_width: 1.0,
                text: black,
            },
            wash_station: Paint {
                fill: Some(Color::new("lightgreen")?),
                stroke: Some(Color::new("green")?),
                stroke_width: 2.0,
                text: Color::new("darkgreen")?,
            },
            entry: Paint {
                fill: Some(Color::new("orange")?),
                stroke: None,
                stroke_width: 0.0,
                text: black,
            },
            warning: Color::new("red")?,
        })
    }

    pub fn paint(&self, kind: ElementKind) -> &Paint {
        match kind {
            ElementKind::Border => &self.border,
            ElementKind::Driveway => &self.driveway,
            ElementKind::Crossroad => &self.crossroad,
            ElementKind::Container => &self.container,
            ElementKind::WashStation => &self.wash_station,
            ElementKind::Entry => &self.entry,
        }
    }

    /// Text color for diagnostics.
    pub fn warning(&self) -> Color {
        self.warning
    }
}
