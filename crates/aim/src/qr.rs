//! QR symbol rendering for floor deep links.
//!
//! Fixed presentation, matching the printed signage: error-correction level
//! H, PSU navy modules on white, 8 px per module, 4-module quiet zone. The
//! encoder only ever sees payloads built from the floor directory, never
//! arbitrary user text.

use anyhow::{Context, Result};
use eframe::egui;
use qrcode::{EcLevel, QrCode};

/// Pixels per module when rasterizing.
pub const MODULE_PX: u32 = 8;
/// Quiet-zone width in modules on every side.
pub const QUIET_ZONE: u32 = 4;

const DARK: [u8; 3] = [0x04, 0x1E, 0x42];
const LIGHT: [u8; 3] = [0xFF, 0xFF, 0xFF];

/// An encoded symbol, kept as a plain module matrix so it can be rasterized
/// for egui and for PNG export alike.
#[derive(Debug, Clone)]
pub struct QrMatrix {
    width: usize,
    modules: Vec<bool>,
}

impl QrMatrix {
    pub fn encode(payload: &str) -> Result<Self> {
        let code = QrCode::with_error_correction_level(payload, EcLevel::H)
            .with_context(|| format!("failed to encode QR payload {payload:?}"))?;
        let width = code.width();
        let modules = code
            .to_colors()
            .into_iter()
            .map(|c| c == qrcode::Color::Dark)
            .collect();
        Ok(Self { width, modules })
    }

    /// Module count per side, without the quiet zone.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rasterized side length in pixels, quiet zone included.
    pub fn pixel_side(&self) -> u32 {
        (self.width as u32 + 2 * QUIET_ZONE) * MODULE_PX
    }

    fn is_dark(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.width as i64 {
            return false; // quiet zone
        }
        self.modules[y as usize * self.width + x as usize]
    }

    fn rgb_at(&self, px: u32, py: u32) -> [u8; 3] {
        let mx = (px / MODULE_PX) as i64 - QUIET_ZONE as i64;
        let my = (py / MODULE_PX) as i64 - QUIET_ZONE as i64;
        if self.is_dark(mx, my) { DARK } else { LIGHT }
    }

    /// Rasterize into an egui image for on-screen display.
    pub fn color_image(&self) -> egui::ColorImage {
        let side = self.pixel_side() as usize;
        let mut rgb = Vec::with_capacity(side * side * 3);
        for py in 0..side {
            for px in 0..side {
                rgb.extend_from_slice(&self.rgb_at(px as u32, py as u32));
            }
        }
        egui::ColorImage::from_rgb([side, side], &rgb)
    }

    /// Rasterize into an image-crate buffer for PNG export.
    pub fn rgb_image(&self) -> image::RgbImage {
        let side = self.pixel_side();
        image::RgbImage::from_fn(side, side, |px, py| image::Rgb(self.rgb_at(px, py)))
    }
}

/// Session-lifetime texture cache for rendered QR codes, keyed by payload.
/// Encoding failures are cached so they do not retry every frame.
#[derive(Default)]
pub struct QrTextureCache {
    cache: std::collections::HashMap<String, Option<egui::TextureHandle>>,
}

impl QrTextureCache {
    pub fn get(&mut self, ctx: &egui::Context, payload: &str) -> Option<egui::TextureHandle> {
        if let Some(entry) = self.cache.get(payload) {
            return entry.clone();
        }
        let texture = match QrMatrix::encode(payload) {
            Ok(matrix) => Some(ctx.load_texture(
                format!("qr:{payload}"),
                matrix.color_image(),
                // Modules must stay crisp when scaled.
                egui::TextureOptions::NEAREST,
            )),
            Err(e) => {
                tracing::warn!(payload, error = %e, "QR encoding failed");
                None
            }
        };
        self.cache.insert(payload.to_string(), texture.clone());
        texture
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_yields_a_square_symbol_of_at_least_version_one() {
        let matrix = QrMatrix::encode("https://example.org/map?floor=woodland-1st")
            .expect("payload encodes");
        assert!(matrix.width() >= 21);
        assert_eq!(matrix.modules.len(), matrix.width() * matrix.width());
    }

    #[test]
    fn raster_side_includes_the_quiet_zone() {
        let matrix = QrMatrix::encode("x").expect("short payload encodes");
        let expected = (matrix.width() as u32 + 2 * QUIET_ZONE) * MODULE_PX;
        assert_eq!(matrix.pixel_side(), expected);

        let img = matrix.rgb_image();
        assert_eq!(img.width(), expected);
        assert_eq!(img.height(), expected);
    }

    #[test]
    fn quiet_zone_pixels_are_light() {
        let matrix = QrMatrix::encode("x").expect("short payload encodes");
        assert_eq!(matrix.rgb_at(0, 0), LIGHT);
        let last = matrix.pixel_side() - 1;
        assert_eq!(matrix.rgb_at(last, last), LIGHT);
    }

    #[test]
    fn finder_pattern_corner_is_dark() {
        let matrix = QrMatrix::encode("x").expect("short payload encodes");
        // First in-symbol module is part of the top-left finder pattern.
        let first = QUIET_ZONE * MODULE_PX;
        assert_eq!(matrix.rgb_at(first, first), DARK);
    }
}
