//! Drawing canvas model: captured points and the active color.

mod gesture;

use serde::{Deserialize, Serialize};

pub use gesture::{GestureEvent, GesturePhase, GestureTracker};

use crate::palette::{DotColor, Swatch};

/// One captured sample. The color is fixed at capture time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub color: DotColor,
}

impl Point {
    pub const fn new(x: f64, y: f64, color: DotColor) -> Self {
        Self { x, y, color }
    }
}

/// What happens to existing points when the active color changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorChangePolicy {
    #[default]
    Persist,
    ClearOnChange,
}

#[derive(Debug)]
pub struct DrawingCanvas {
    points: Vec<Point>,
    active_color: DotColor,
    policy: ColorChangePolicy,
    gesture: GestureTracker,
}

impl Default for DrawingCanvas {
    fn default() -> Self {
        Self::new(DotColor::default(), ColorChangePolicy::default())
    }
}

impl DrawingCanvas {
    pub const fn new(active_color: DotColor, policy: ColorChangePolicy) -> Self {
        Self {
            points: Vec::new(),
            active_color,
            policy,
            gesture: GestureTracker::new(),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn active_color(&self) -> DotColor {
        self.active_color
    }

    pub fn gesture_phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    /// Gestures are always accepted.
    pub fn begin_gesture(&mut self) -> bool {
        self.gesture.apply(GestureEvent::Begin);
        true
    }

    /// Appends one point at `(x, y)` tagged with the color active right now.
    pub fn move_to(&mut self, x: f64, y: f64) -> &Point {
        self.gesture.apply(GestureEvent::Move);
        let point = Point::new(x, y, self.active_color);
        self.points.push(point);
        tracing::trace!(x, y, color = %point.color, count = self.points.len(), "captured point");
        &self.points[self.points.len() - 1]
    }

    pub fn end_gesture(&mut self) {
        self.gesture.apply(GestureEvent::End);
    }

    /// Returns whether the active color changed.
    pub fn select_color(&mut self, color: DotColor) -> bool {
        if color == self.active_color {
            return false;
        }

        let previous = self.active_color;
        self.active_color = color;
        if self.policy == ColorChangePolicy::ClearOnChange {
            let cleared = self.points.len();
            self.clear();
            tracing::debug!(%previous, %color, cleared, "active color changed; cleared points");
        } else {
            tracing::debug!(%previous, %color, "active color changed");
        }
        true
    }

    pub fn select_swatch(&mut self, swatch: Swatch) -> bool {
        self.select_color(swatch.color())
    }

    fn clear(&mut self) {
        self.points.clear();
    }

    /// Owned copy of the current points, detached from later gestures.
    pub fn snapshot(&self) -> Vec<Point> {
        self.points.clone()
    }
}
