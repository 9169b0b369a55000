//! Static FAQ content.

use eframe::egui;

use crate::theme::Theme;

const ENTRIES: [(&str, &str); 5] = [
    (
        "How do I scan a QR code?",
        "Open your phone's camera or a QR scanner app and point it at the QR code. \
         It should open the map for that floor automatically.",
    ),
    (
        "Where is Rydal Executive Plaza?",
        "The Rydal building and Rydal Executive Plaza are commonly mistaken for one \
         another. Rydal Executive Plaza is located at 1000 Old York Rd, by the train \
         station. The Rydal building is located on the PSU Abington campus near the \
         Woodland building.",
    ),
    (
        "What is this app for?",
        "This app allows students and visitors to navigate campus buildings using QR \
         codes that link to interactive floor maps.",
    ),
    (
        "Which buildings are included?",
        "Woodland, Sutherland, and Rydal buildings are currently supported, each with \
         multiple floor views.",
    ),
    (
        "About Abington Interactive Map",
        "Abington Interactive Map (AIM) is an interactive map application designed to \
         assist new students at Penn State Abington in navigating the campus, \
         specifically for classrooms and faculty offices.",
    ),
];

pub fn show(ui: &mut egui::Ui, theme: &Theme) -> Option<String> {
    let mut nav = None;

    ui.vertical_centered(|ui| {
        ui.heading(
            egui::RichText::new("Frequently Asked Questions")
                .size(theme.h1_size)
                .color(theme.heading_color),
        );
        ui.label(
            egui::RichText::new("Helpful information for navigating the PSU Abington Campus")
                .color(theme.muted),
        );
        if ui.button("Back to Home").clicked() {
            nav = Some("/".to_string());
        }
    });
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        for (question, answer) in ENTRIES {
            ui.label(
                egui::RichText::new(question)
                    .size(theme.h2_size)
                    .color(theme.heading_color),
            );
            ui.label(egui::RichText::new(answer).size(theme.body_size));
            ui.add_space(14.0);
        }
    });

    nav
}
