//! Offscreen rasterization of the drawing and PNG data URI encoding.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{ImageFormat, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::canvas::Point;
use crate::geometry::{CanvasSize, Color};
use crate::render::DOT_RADIUS;

pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";
pub const DEFAULT_EXPORT_SIZE: CanvasSize = CanvasSize::new(300, 500);
pub const MAX_EXPORT_SIDE: u32 = 8192;
pub const CORRUPTION_TRIM_CHARS: usize = 100;
pub const CORRUPTION_MARKER: &str = "GARBAGE==";
const LOG_PREVIEW_CHARS: usize = 100;
const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export is disabled in configuration")]
    Disabled,
    #[error("png encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

pub type ExportResult<T> = std::result::Result<T, ExportError>;

/// `Corrupt` truncates the base64 payload and appends [`CORRUPTION_MARKER`],
/// producing an undecodable image. It exists for fault-injection tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExportMode {
    #[default]
    Intact,
    Corrupt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub enabled: bool,
    pub mode: ExportMode,
    pub width: u32,
    pub height: u32,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: ExportMode::Intact,
            width: DEFAULT_EXPORT_SIZE.width,
            height: DEFAULT_EXPORT_SIZE.height,
        }
    }
}

impl ExportSettings {
    /// Configured size, or the default canvas when either side exceeds [`MAX_EXPORT_SIDE`].
    pub fn size(&self) -> CanvasSize {
        if self.width > MAX_EXPORT_SIDE || self.height > MAX_EXPORT_SIDE {
            tracing::warn!(
                width = self.width,
                height = self.height,
                max = MAX_EXPORT_SIDE,
                "export size out of range; using default canvas size"
            );
            return DEFAULT_EXPORT_SIZE;
        }
        CanvasSize::new(self.width.max(1), self.height.max(1))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedImage {
    pub data_uri: String,
    pub mode: ExportMode,
    pub point_count: usize,
}

impl ExportedImage {
    pub fn payload(&self) -> &str {
        self.data_uri
            .strip_prefix(PNG_DATA_URI_PREFIX)
            .unwrap_or(&self.data_uri)
    }

    pub fn summary(&self) -> &'static str {
        match self.mode {
            ExportMode::Intact => "Drawing exported as PNG.",
            ExportMode::Corrupt => "Drawing exported as (corrupt) PNG.",
        }
    }
}

pub fn rasterize(points: &[Point], size: CanvasSize) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(size.width, size.height, BACKGROUND);
    for point in points {
        fill_circle(&mut image, point.x, point.y, DOT_RADIUS, point.color.rgb());
    }
    image
}

fn fill_circle(image: &mut RgbaImage, cx: f64, cy: f64, radius: f64, color: Color) {
    if !cx.is_finite() || !cy.is_finite() {
        return;
    }

    let (width, height) = image.dimensions();
    let min_x = (cx - radius).floor().max(0.0);
    let max_x = (cx + radius).ceil().min(f64::from(width));
    let min_y = (cy - radius).floor().max(0.0);
    let max_y = (cy + radius).ceil().min(f64::from(height));
    if min_x >= max_x || min_y >= max_y {
        return;
    }

    let (r, g, b) = color.rgb();
    let radius_sq = radius * radius;
    for py in (min_y as u32)..(max_y as u32) {
        let dy = f64::from(py) + 0.5 - cy;
        for px in (min_x as u32)..(max_x as u32) {
            let dx = f64::from(px) + 0.5 - cx;
            if dx * dx + dy * dy <= radius_sq {
                image.put_pixel(px, py, Rgba([r, g, b, 255]));
            }
        }
    }
}

pub fn encode_png(image: &RgbaImage) -> ExportResult<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    image.write_to(&mut cursor, ImageFormat::Png)?;
    Ok(cursor.into_inner())
}

pub fn png_data_uri(png: &[u8]) -> String {
    format!("{PNG_DATA_URI_PREFIX}{}", STANDARD.encode(png))
}

pub fn corrupt_payload(payload: &str) -> String {
    let keep = payload.len().saturating_sub(CORRUPTION_TRIM_CHARS);
    let mut corrupted = String::with_capacity(keep + CORRUPTION_MARKER.len());
    corrupted.push_str(&payload[..keep]);
    corrupted.push_str(CORRUPTION_MARKER);
    corrupted
}

/// Rasterizes `points`, encodes them and applies the configured mode.
pub fn export_points(points: &[Point], settings: &ExportSettings) -> ExportResult<ExportedImage> {
    if !settings.enabled {
        return Err(ExportError::Disabled);
    }

    let png = encode_png(&rasterize(points, settings.size()))?;
    let intact = png_data_uri(&png);
    let data_uri = match settings.mode {
        ExportMode::Intact => intact,
        ExportMode::Corrupt => {
            let payload = &intact[PNG_DATA_URI_PREFIX.len()..];
            format!("{PNG_DATA_URI_PREFIX}{}", corrupt_payload(payload))
        }
    };

    let exported = ExportedImage {
        data_uri,
        mode: settings.mode,
        point_count: points.len(),
    };
    let payload = exported.payload();
    tracing::info!(
        points = exported.point_count,
        mode = ?exported.mode,
        png_bytes = png.len(),
        payload_len = payload.len(),
        preview = &payload[..payload.len().min(LOG_PREVIEW_CHARS)],
        "drawing exported"
    );
    Ok(exported)
}
