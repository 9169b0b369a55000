pub mod image_cache;

use eframe::egui;

use crate::theme::Theme;
use image_cache::ImageCache;

/// Draw an image scaled to fit inside `max_size`, centered horizontally.
/// Falls back to the "no images yet" placeholder when the texture is
/// unavailable. Returns the rect actually used.
pub fn image_or_placeholder(
    ui: &mut egui::Ui,
    cache: &ImageCache,
    theme: &Theme,
    path: &str,
    alt: &str,
    max_size: egui::Vec2,
) -> egui::Rect {
    if let Some(texture) = cache.get_or_load(ui, path) {
        let tex_size = texture.size_vec2();
        let scale = (max_size.x / tex_size.x)
            .min(max_size.y / tex_size.y)
            .min(1.0);
        let draw_size = tex_size * scale;

        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(max_size.x, draw_size.y),
            egui::Sense::hover(),
        );
        let draw_rect = egui::Rect::from_center_size(rect.center(), draw_size);
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        ui.painter()
            .image(texture.id(), draw_rect, uv, egui::Color32::WHITE);
        rect
    } else {
        placeholder(ui, theme, alt, max_size)
    }
}

/// The fallback frame shown wherever an image is absent or failed to load.
pub fn placeholder(
    ui: &mut egui::Ui,
    theme: &Theme,
    label: &str,
    max_size: egui::Vec2,
) -> egui::Rect {
    let size = egui::vec2(max_size.x, (max_size.y * 0.6).max(120.0));
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());

    ui.painter()
        .rect_filled(rect, egui::CornerRadius::same(6), theme.panel);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        if label.is_empty() { "No images yet." } else { label },
        egui::FontId::proportional(theme.body_size),
        theme.muted,
    );
    rect
}
