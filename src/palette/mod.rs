//! Fixed drawing palette: four paint swatches and the eraser.

use serde::{Deserialize, Serialize};

use crate::geometry::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DotColor {
    #[default]
    Black,
    Red,
    Blue,
    Green,
    White,
}

impl DotColor {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::White => "white",
        }
    }

    /// CSS named-color values.
    pub const fn rgb(self) -> Color {
        match self {
            Self::Black => Color::new(0, 0, 0),
            Self::Red => Color::new(255, 0, 0),
            Self::Blue => Color::new(0, 0, 255),
            Self::Green => Color::new(0, 128, 0),
            Self::White => Color::new(255, 255, 255),
        }
    }
}

impl std::fmt::Display for DotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Canvas background; the eraser paints with it.
pub const ERASER_COLOR: DotColor = DotColor::White;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swatch {
    Paint(DotColor),
    Eraser,
}

impl Swatch {
    pub const fn color(self) -> DotColor {
        match self {
            Self::Paint(color) => color,
            Self::Eraser => ERASER_COLOR,
        }
    }

    pub const fn label(self) -> Option<&'static str> {
        match self {
            Self::Paint(_) => None,
            Self::Eraser => Some("E"),
        }
    }

    pub fn tooltip(self) -> String {
        match self {
            Self::Paint(color) => format!("Draw in {color}"),
            Self::Eraser => "Eraser".to_string(),
        }
    }

    /// The eraser counts as active whenever the active color is white.
    pub fn is_active(self, active: DotColor) -> bool {
        self.color() == active
    }
}

pub const SWATCHES: [Swatch; 5] = [
    Swatch::Paint(DotColor::Black),
    Swatch::Paint(DotColor::Red),
    Swatch::Paint(DotColor::Blue),
    Swatch::Paint(DotColor::Green),
    Swatch::Eraser,
];

pub fn swatches() -> &'static [Swatch] {
    &SWATCHES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_lists_four_paints_then_eraser() {
        let colors = swatches()
            .iter()
            .map(|swatch| swatch.color())
            .collect::<Vec<_>>();
        assert_eq!(
            colors,
            vec![
                DotColor::Black,
                DotColor::Red,
                DotColor::Blue,
                DotColor::Green,
                DotColor::White
            ]
        );
        assert_eq!(swatches().last(), Some(&Swatch::Eraser));
    }

    #[test]
    fn exactly_one_swatch_is_active_for_each_palette_color() {
        for swatch in swatches() {
            let active = swatches()
                .iter()
                .filter(|candidate| candidate.is_active(swatch.color()))
                .count();
            assert_eq!(active, 1, "{swatch:?}");
        }
    }

    #[test]
    fn dot_color_deserializes_from_lowercase_name() {
        let color: DotColor = serde_json::from_str("\"green\"").expect("color should parse");
        assert_eq!(color, DotColor::Green);
        assert_eq!(color.to_string(), "green");
    }
}
