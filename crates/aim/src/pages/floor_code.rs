//! `/floors/:floorId`: one floor's QR code, plus a shortcut into the browser.

use eframe::egui;

use crate::config::Config;
use crate::directory;
use crate::link;
use crate::pages::home::qr_image;
use crate::qr::QrTextureCache;
use crate::theme::Theme;

pub fn show(
    ui: &mut egui::Ui,
    theme: &Theme,
    config: &Config,
    qr_cache: &mut QrTextureCache,
    floor_id: &str,
) -> Option<String> {
    let mut nav = None;
    let label = directory::floor_label(floor_id);

    ui.horizontal(|ui| {
        ui.heading(
            egui::RichText::new(format!("{label} QR Code"))
                .size(theme.h1_size)
                .color(theme.heading_color),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Back to All Floors").clicked() {
                nav = Some("/floors".to_string());
            }
        });
    });
    ui.separator();

    ui.vertical_centered(|ui| {
        // Scanned by a phone camera: opens the map focused on this floor.
        let payload = link::map_link(config.origin(), floor_id);
        qr_image(ui, qr_cache, &payload);

        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(format!("Scan this code to open the Map focused on {label}."))
                .size(theme.body_size)
                .color(theme.muted),
        );
        ui.add_space(12.0);

        if ui
            .button(format!("Go to StreetView for {label}"))
            .clicked()
        {
            // Translate the slug into explicit browser parameters so the
            // image browser lands on the right building and floor.
            nav = Some(match directory::entry(floor_id) {
                Some(entry) => format!(
                    "/streetview?building={}&floor={}",
                    entry.building, entry.floor
                ),
                None => "/streetview".to_string(),
            });
        }
    });

    nav
}
