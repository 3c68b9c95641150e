//! Drawing controller wiring the canvas model to the palette, renderer and exporter.

#[cfg(feature = "gui")]
mod window;

#[cfg(feature = "gui")]
pub use window::run_window;

use crate::canvas::DrawingCanvas;
use crate::config::AppConfig;
use crate::error::AppResult;
use crate::export::{export_points, ExportSettings, ExportedImage};
use crate::notification::Notifier;
use crate::palette::{swatches, Swatch};
use crate::render::{self, DotMarker, SwatchView};

#[derive(Debug)]
pub struct DrawingApp<N> {
    canvas: DrawingCanvas,
    export_settings: ExportSettings,
    notifier: N,
}

impl<N: Notifier> DrawingApp<N> {
    pub fn new(config: &AppConfig, notifier: N) -> Self {
        tracing::info!(
            policy = ?config.color_change_policy,
            initial_color = %config.initial_color,
            export_enabled = config.export.enabled,
            export_mode = ?config.export.mode,
            "drawing session ready"
        );
        Self {
            canvas: DrawingCanvas::new(config.initial_color, config.color_change_policy),
            export_settings: config.export,
            notifier,
        }
    }

    pub fn canvas(&self) -> &DrawingCanvas {
        &self.canvas
    }

    pub fn on_gesture_start(&mut self) -> bool {
        self.canvas.begin_gesture()
    }

    pub fn on_gesture_move(&mut self, x: f64, y: f64) {
        self.canvas.move_to(x, y);
    }

    pub fn on_gesture_end(&mut self) {
        self.canvas.end_gesture();
    }

    pub fn on_swatch_pressed(&mut self, swatch: Swatch) -> bool {
        self.canvas.select_swatch(swatch)
    }

    pub fn markers(&self) -> Vec<DotMarker> {
        render::render_markers(self.canvas.points())
    }

    pub fn swatch_views(&self) -> Vec<SwatchView> {
        render::swatch_views(swatches(), self.canvas.active_color())
    }

    pub fn export_enabled(&self) -> bool {
        self.export_settings.enabled
    }

    /// Exports the points present at call time and acknowledges completion.
    pub fn export(&self) -> AppResult<ExportedImage> {
        let snapshot = self.canvas.snapshot();
        let exported = export_points(&snapshot, &self.export_settings)?;
        self.notifier.notify(exported.summary());
        Ok(exported)
    }
}
