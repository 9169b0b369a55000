//! `/floors`: pick a floor to see its QR code page.

use eframe::egui;

use crate::directory::FLOOR_DIRECTORY;
use crate::theme::Theme;

pub fn show(ui: &mut egui::Ui, theme: &Theme) -> Option<String> {
    let mut nav = None;

    ui.horizontal(|ui| {
        ui.heading(
            egui::RichText::new("Select a Floor for QR Code")
                .size(theme.h1_size)
                .color(theme.heading_color),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Return Home").clicked() {
                nav = Some("/".to_string());
            }
        });
    });
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        for entry in &FLOOR_DIRECTORY {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(entry.label).size(theme.body_size));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("View QR Code").clicked() {
                        nav = Some(format!("/floors/{}", entry.id));
                    }
                });
            });
            ui.separator();
        }
    });

    nav
}
