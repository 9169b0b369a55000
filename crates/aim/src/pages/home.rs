//! Landing page: one QR code per floor, each linking the map to that floor.

use eframe::egui;

use crate::config::Config;
use crate::directory::FLOOR_DIRECTORY;
use crate::link;
use crate::qr::QrTextureCache;
use crate::theme::Theme;

const CARD_WIDTH: f32 = 240.0;
const QR_DISPLAY_SIZE: f32 = 200.0;

pub fn show(
    ui: &mut egui::Ui,
    theme: &Theme,
    config: &Config,
    qr_cache: &mut QrTextureCache,
) -> Option<String> {
    let mut nav = None;

    ui.vertical_centered(|ui| {
        ui.heading(
            egui::RichText::new("PSU Campus Navigator")
                .size(theme.h1_size)
                .color(theme.heading_color),
        );
        ui.label(
            egui::RichText::new(
                "Below are QR codes for each floor. Scan one, or use the button \
                 under a code for more details.",
            )
            .size(theme.body_size)
            .color(theme.muted),
        );
    });
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button("Campus Map").clicked() {
            nav = Some("/map".to_string());
        }
        if ui.button("All Floors").clicked() {
            nav = Some("/floors".to_string());
        }
        if ui.button("FAQ").clicked() {
            nav = Some("/faq".to_string());
        }
    });
    ui.separator();

    let columns = ((ui.available_width() / CARD_WIDTH).floor() as usize).max(1);

    egui::ScrollArea::vertical().show(ui, |ui| {
        for row in FLOOR_DIRECTORY.chunks(columns) {
            ui.horizontal(|ui| {
                for entry in row {
                    ui.vertical(|ui| {
                        ui.set_width(CARD_WIDTH);
                        ui.label(
                            egui::RichText::new(entry.label)
                                .size(theme.h2_size)
                                .color(theme.heading_color),
                        );
                        let payload = link::map_link(config.origin(), entry.id);
                        qr_image(ui, qr_cache, &payload);
                        if ui.button(format!("View {}", entry.label)).clicked() {
                            nav = Some(format!("/floors/{}", entry.id));
                        }
                    });
                }
            });
            ui.add_space(16.0);
        }

        ui.separator();
        ui.label(egui::RichText::new("Can't scan a QR code?").color(theme.muted));
        if ui.button("Go to PSU Abington Map").clicked() {
            nav = Some("/map".to_string());
        }
    });

    nav
}

/// Draw a QR code scaled for display, or an inline error if encoding failed.
pub fn qr_image(ui: &mut egui::Ui, qr_cache: &mut QrTextureCache, payload: &str) {
    match qr_cache.get(ui.ctx(), payload) {
        Some(texture) => {
            ui.add(
                egui::Image::new(&texture)
                    .fit_to_exact_size(egui::vec2(QR_DISPLAY_SIZE, QR_DISPLAY_SIZE)),
            );
        }
        None => {
            ui.label("QR code unavailable");
        }
    }
}
