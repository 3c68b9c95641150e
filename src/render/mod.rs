//! View models for the drawing surface and the palette strip.

use crate::canvas::Point;
use crate::geometry::Color;
use crate::palette::{DotColor, Swatch};

pub const DOT_RADIUS: f64 = 5.0;
pub const DOT_SIZE: f64 = DOT_RADIUS * 2.0;

pub const SWATCH_SIZE: i32 = 30;
const SWATCH_BORDER: Color = Color::new(0xcc, 0xcc, 0xcc);
const SWATCH_BORDER_WIDTH: u8 = 2;
const SWATCH_ACTIVE_BORDER: Color = Color::new(0, 0, 0);
const SWATCH_ACTIVE_BORDER_WIDTH: u8 = 3;

/// Circular dot marker, absolutely positioned by its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotMarker {
    pub left: f64,
    pub top: f64,
    pub size: f64,
    pub color: DotColor,
}

impl DotMarker {
    pub fn center(&self) -> (f64, f64) {
        let radius = self.size / 2.0;
        (self.left + radius, self.top + radius)
    }
}

pub fn render_markers(points: &[Point]) -> Vec<DotMarker> {
    points
        .iter()
        .map(|point| DotMarker {
            left: point.x - DOT_RADIUS,
            top: point.y - DOT_RADIUS,
            size: DOT_SIZE,
            color: point.color,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchView {
    pub swatch: Swatch,
    pub fill: Color,
    pub border: Color,
    pub border_width: u8,
    pub label: Option<&'static str>,
    pub active: bool,
}

pub fn swatch_views(swatches: &[Swatch], active_color: DotColor) -> Vec<SwatchView> {
    swatches
        .iter()
        .map(|&swatch| {
            let active = swatch.is_active(active_color);
            let (border, border_width) = if active {
                (SWATCH_ACTIVE_BORDER, SWATCH_ACTIVE_BORDER_WIDTH)
            } else {
                (SWATCH_BORDER, SWATCH_BORDER_WIDTH)
            };
            SwatchView {
                swatch,
                fill: swatch.color().rgb(),
                border,
                border_width,
                label: swatch.label(),
                active,
            }
        })
        .collect()
}
