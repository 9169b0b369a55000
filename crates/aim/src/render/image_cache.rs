//! Texture cache for catalog images.
//!
//! Images are decoded once per path and kept as GPU textures for the rest of
//! the session. Decode failures are cached as misses so a broken path does
//! not retry every frame; callers render the placeholder instead.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use eframe::egui;

pub struct ImageCache {
    base_path: PathBuf,
    cache: RefCell<HashMap<String, Option<egui::TextureHandle>>>,
}

impl ImageCache {
    pub fn new(base_path: PathBuf) -> Self {
        Self {
            base_path,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Texture for a catalog image path, loading it on first use.
    /// `None` means the file is missing or undecodable.
    pub fn get_or_load(&self, ui: &egui::Ui, path: &str) -> Option<egui::TextureHandle> {
        if let Some(entry) = self.cache.borrow().get(path) {
            return entry.clone();
        }

        let loaded = self.load(ui.ctx(), path);
        self.cache
            .borrow_mut()
            .insert(path.to_string(), loaded.clone());
        loaded
    }

    fn load(&self, ctx: &egui::Context, path: &str) -> Option<egui::TextureHandle> {
        let full = self.base_path.join(path.trim_start_matches('/'));
        match image::open(&full) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                let size = [rgba.width() as usize, rgba.height() as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
                Some(ctx.load_texture(path.to_string(), color_image, egui::TextureOptions::LINEAR))
            }
            Err(e) => {
                tracing::debug!(path = %full.display(), error = %e, "image unavailable");
                None
            }
        }
    }
}
