//! The image browser: building/floor/category selectors over the catalog.

use std::time::Instant;

use eframe::egui;

use crate::browser::{BrowserEvent, Category, ViewContent, ViewSelection};
use crate::catalog::Catalog;
use crate::link::QueryParams;
use crate::render::{self, image_cache::ImageCache};
use crate::theme::Theme;

const LOADING_SECS: f32 = 0.4;

/// Cosmetic overlay shown briefly after every building/floor change and
/// prev/next step. Gates only the dimming layer; state transitions never
/// wait on it.
#[derive(Default)]
pub struct LoadingOverlay {
    started: Option<Instant>,
}

impl LoadingOverlay {
    fn trigger(&mut self) {
        self.started = Some(Instant::now());
    }

    fn active(&self) -> bool {
        self.started
            .is_some_and(|t| t.elapsed().as_secs_f32() < LOADING_SECS)
    }
}

/// Page state, created on entry and dropped when the user navigates away.
pub struct StreetViewPage {
    pub selection: ViewSelection,
    loading: LoadingOverlay,
}

impl StreetViewPage {
    /// One-shot deep-link adoption happens here, on page entry.
    pub fn enter(catalog: &Catalog, params: &QueryParams) -> Self {
        let selection = ViewSelection::from_params(catalog, params);
        tracing::debug!(
            building = %selection.building,
            floor = %selection.floor,
            "entering street view"
        );
        let mut loading = LoadingOverlay::default();
        loading.trigger();
        Self { selection, loading }
    }

    fn dispatch(&mut self, catalog: &Catalog, event: BrowserEvent) {
        let next = self.selection.apply(catalog, &event);
        if next != self.selection {
            if !matches!(event, BrowserEvent::SelectCategory(_)) {
                self.loading.trigger();
            }
            self.selection = next;
        }
    }
}

/// Render the page. Returns a route string when the user navigates away.
pub fn show(
    ui: &mut egui::Ui,
    theme: &Theme,
    catalog: &Catalog,
    images: &ImageCache,
    page: &mut StreetViewPage,
) -> Option<String> {
    let mut nav = None;

    ui.horizontal(|ui| {
        ui.heading(
            egui::RichText::new(format!(
                "{} – Floor {}",
                page.selection.building, page.selection.floor
            ))
            .size(theme.h1_size)
            .color(theme.heading_color),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Back to Home").clicked() {
                nav = Some("/".to_string());
            }
            if ui.button("Return to Campus Map").clicked() {
                nav = Some("/map".to_string());
            }
        });
    });
    ui.separator();

    selectors(ui, theme, catalog, page);
    ui.add_space(8.0);

    let content_rect = content(ui, theme, catalog, images, page);
    loading_overlay(ui, theme, page, content_rect);

    ui.add_space(12.0);
    ui.label(
        egui::RichText::new("PSU Abington Campus Navigator")
            .size(theme.caption_size)
            .color(theme.muted),
    );

    nav
}

fn selectors(ui: &mut egui::Ui, theme: &Theme, catalog: &Catalog, page: &mut StreetViewPage) {
    let mut events: Vec<BrowserEvent> = Vec::new();

    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new("Building:").color(theme.muted));
        for building in catalog.buildings() {
            let active = page.selection.building == building.name;
            if ui
                .add(egui::SelectableLabel::new(active, &building.name))
                .clicked()
            {
                events.push(BrowserEvent::SelectBuilding(building.name.clone()));
            }
        }
    });

    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new("Floor:").color(theme.muted));
        let building = catalog.resolve_building(Some(&page.selection.building));
        for floor in building.floors() {
            let active = page.selection.floor == floor.id;
            if ui
                .add(egui::SelectableLabel::new(active, &floor.id))
                .clicked()
            {
                events.push(BrowserEvent::SelectFloor(floor.id.clone()));
            }
        }
    });

    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new("View:").color(theme.muted));
        for category in Category::ALL {
            let active = page.selection.category == category;
            let enabled = page.selection.category_enabled(catalog, category);
            // Categories with nothing to show render disabled, not hidden.
            if ui
                .add_enabled(enabled, egui::SelectableLabel::new(active, category.label()))
                .clicked()
            {
                events.push(BrowserEvent::SelectCategory(category));
            }
        }
    });

    for event in events {
        page.dispatch(catalog, event);
    }
}

fn content(
    ui: &mut egui::Ui,
    theme: &Theme,
    catalog: &Catalog,
    images: &ImageCache,
    page: &mut StreetViewPage,
) -> egui::Rect {
    let top = ui.cursor().top();
    let width = ui.available_width();
    let height = (ui.available_height() - 60.0).max(200.0);
    let max_image = egui::vec2(width, height * 0.8);

    match page.selection.resolve(catalog) {
        ViewContent::Missing { caption } => {
            render::placeholder(ui, theme, "No images yet.", max_image);
            caption_label(ui, theme, &caption);
        }
        ViewContent::Single { image, caption } => {
            render::image_or_placeholder(ui, images, theme, image, "No images yet.", max_image);
            caption_label(ui, theme, &caption);
        }
        ViewContent::Gallery { images: paths, caption } => {
            caption_label(ui, theme, &caption);
            // Exterior sequences show every image at once, no prev/next.
            let paths: Vec<String> = paths.to_vec();
            egui::ScrollArea::vertical()
                .max_height(height)
                .show(ui, |ui| {
                    for path in &paths {
                        render::image_or_placeholder(
                            ui,
                            images,
                            theme,
                            path,
                            "No images yet.",
                            egui::vec2(width, height * 0.7),
                        );
                        ui.add_space(10.0);
                    }
                });
        }
        ViewContent::Hallways { entries, index } => {
            let entries = entries.to_vec();
            if entries.len() > 1 {
                let mut step = None;
                ui.horizontal(|ui| {
                    if ui.button("❮ Prev").clicked() {
                        step = Some(BrowserEvent::NavPrev);
                    }
                    ui.label(
                        egui::RichText::new(format!("{} / {}", index + 1, entries.len()))
                            .color(theme.muted),
                    );
                    if ui.button("Next ❯").clicked() {
                        step = Some(BrowserEvent::NavNext);
                    }
                });
                if let Some(event) = step {
                    page.dispatch(catalog, event);
                }
            }
            egui::ScrollArea::vertical()
                .max_height(height)
                .show(ui, |ui| {
                    for (i, entry) in entries.iter().enumerate() {
                        let rect = render::image_or_placeholder(
                            ui,
                            images,
                            theme,
                            &entry.image,
                            &entry.caption,
                            egui::vec2(width, height * 0.6),
                        );
                        if i == index {
                            ui.painter().rect_stroke(
                                rect.expand(2.0),
                                egui::CornerRadius::same(4),
                                egui::Stroke::new(2.0, theme.accent),
                                egui::StrokeKind::Outside,
                            );
                        }
                        caption_label(ui, theme, &entry.caption);
                        ui.add_space(10.0);
                    }
                });
        }
    }

    let bottom = ui.cursor().top();
    egui::Rect::from_min_max(
        egui::pos2(ui.max_rect().left(), top),
        egui::pos2(ui.max_rect().right(), bottom),
    )
}

fn caption_label(ui: &mut egui::Ui, theme: &Theme, caption: &str) {
    if caption.is_empty() {
        return;
    }
    ui.label(
        egui::RichText::new(caption)
            .size(theme.body_size)
            .color(theme.foreground),
    );
}

fn loading_overlay(ui: &egui::Ui, theme: &Theme, page: &StreetViewPage, rect: egui::Rect) {
    if !page.loading.active() {
        return;
    }
    let painter = ui.painter();
    painter.rect_filled(
        rect,
        egui::CornerRadius::ZERO,
        Theme::with_opacity(theme.background, 0.6),
    );
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "Loading view...",
        egui::FontId::proportional(theme.h2_size),
        theme.muted,
    );
    // Keep repainting until the overlay times out.
    ui.ctx().request_repaint();
}
