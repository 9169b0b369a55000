//! Interactive campus map: pan/zoom canvas, POI markers from the geographic
//! dataset, and walking routes from the user's position to a marker.

use std::sync::mpsc;

use eframe::egui;

use crate::config::Config;
use crate::dataset::{self, DatasetSource, PointOfInterest};
use crate::directory;
use crate::geo::{self, CAMPUS_CENTER, Point};
use crate::link::QueryParams;
use crate::theme::Theme;

/// Stand-in position when no override is configured: the main campus
/// entrance on Woodland Road.
const SIMULATED_POSITION: Point = Point {
    lng: -75.1661,
    lat: 40.1419,
};

/// Initial viewport width in meters.
const INITIAL_SPAN_M: f32 = 700.0;
const MIN_SCALE: f32 = 0.2; // points per meter
const MAX_SCALE: f32 = 20.0;
const MARKER_HIT_RADIUS: f32 = 12.0;

enum Dataset {
    Loading(mpsc::Receiver<Result<Vec<PointOfInterest>, String>>),
    Loaded(Vec<PointOfInterest>),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Permission {
    NotAsked,
    Granted,
    Denied,
}

/// What the user asked for when the permission prompt appeared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PositionRequest {
    LocateMe,
    RouteTo(usize),
}

struct WalkRoute {
    from: Point,
    to: Point,
    target: String,
    distance_m: f64,
    minutes: u32,
}

pub struct MapPage {
    dataset: Dataset,
    /// Floor slug from a scanned QR deep link, shown as the focus banner.
    focus_label: Option<&'static str>,
    selected: Option<usize>,
    permission: Permission,
    pending: Option<PositionRequest>,
    position: Option<Point>,
    position_error: Option<String>,
    walk: Option<WalkRoute>,
    /// Camera: world offset from the campus center (meters) and scale
    /// (screen points per meter).
    pan: egui::Vec2,
    scale: f32,
}

impl MapPage {
    /// Page entry: start the one-shot dataset load and adopt the deep-link
    /// floor parameter, if any.
    pub fn enter(config: &Config, params: &QueryParams) -> Self {
        let source = DatasetSource::from_config(&config.dataset());
        tracing::debug!(?source, "entering map page");
        let focus_label = params
            .floor
            .as_deref()
            .and_then(directory::entry)
            .map(|e| e.label);

        Self {
            dataset: Dataset::Loading(dataset::spawn_load(source)),
            focus_label,
            selected: None,
            permission: Permission::NotAsked,
            pending: None,
            position: None,
            position_error: None,
            walk: None,
            pan: egui::Vec2::ZERO,
            scale: 0.0, // derived from the canvas size on first frame
        }
    }

    fn poll_dataset(&mut self) {
        if let Dataset::Loading(rx) = &self.dataset {
            match rx.try_recv() {
                Ok(Ok(pois)) => self.dataset = Dataset::Loaded(pois),
                Ok(Err(message)) => self.dataset = Dataset::Failed(message),
                Err(mpsc::TryRecvError::Empty) => {}
                Err(mpsc::TryRecvError::Disconnected) => {
                    self.dataset = Dataset::Failed("dataset loader stopped".to_string());
                }
            }
        }
    }

    /// Ask for the user's position, prompting for permission on first use.
    fn request_position(&mut self, config: &Config, request: PositionRequest) {
        match self.permission {
            Permission::NotAsked => self.pending = Some(request),
            Permission::Granted => self.fulfil(config, request),
            Permission::Denied => {
                self.position_error = Some(
                    "Location access was denied. Allow location access to get walking directions."
                        .to_string(),
                );
            }
        }
    }

    /// Single-shot current-position request. Overrides stand in for the
    /// platform position service on desktop.
    fn fulfil(&mut self, config: &Config, request: PositionRequest) {
        let position = match config.position_override() {
            Some(Ok(p)) => p,
            Some(Err(message)) => {
                tracing::warn!(%message, "position unavailable");
                self.position_error = Some(format!("Your position is unavailable: {message}"));
                return;
            }
            None => SIMULATED_POSITION,
        };
        self.position = Some(position);

        if let PositionRequest::RouteTo(index) = request {
            if let Dataset::Loaded(pois) = &self.dataset {
                if let Some(poi) = pois.get(index) {
                    let distance_m = geo::haversine_m(position, poi.point);
                    self.walk = Some(WalkRoute {
                        from: position,
                        to: poi.point,
                        target: poi.name.clone(),
                        distance_m,
                        minutes: geo::walk_minutes(distance_m),
                    });
                    tracing::info!(target = %poi.name, distance_m, "walking route computed");
                }
            }
        }
    }
}

pub fn show(
    ui: &mut egui::Ui,
    theme: &Theme,
    config: &Config,
    page: &mut MapPage,
) -> Option<String> {
    let mut nav = None;
    page.poll_dataset();

    ui.horizontal(|ui| {
        ui.heading(
            egui::RichText::new("PSU Abington Campus Map")
                .size(theme.h1_size)
                .color(theme.heading_color),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Back to Home").clicked() {
                nav = Some("/".to_string());
            }
            if ui.button("View in Street View").clicked() {
                nav = Some("/streetview".to_string());
            }
        });
    });
    if let Some(label) = page.focus_label {
        ui.label(
            egui::RichText::new(format!("Focused on {label}"))
                .size(theme.body_size)
                .color(theme.accent),
        );
    }
    ui.separator();

    toolbar(ui, theme, config, page);
    banners(ui, theme, page);

    canvas(ui, theme, config, page);
    permission_prompt(ui, config, page);
    position_alert(ui, theme, page);

    nav
}

fn toolbar(ui: &mut egui::Ui, theme: &Theme, config: &Config, page: &mut MapPage) {
    ui.horizontal(|ui| {
        if ui.button("＋").on_hover_text("Zoom in").clicked() {
            page.scale = (page.scale * 1.25).min(MAX_SCALE);
        }
        if ui.button("－").on_hover_text("Zoom out").clicked() {
            page.scale = (page.scale / 1.25).max(MIN_SCALE);
        }
        if ui.button("Reset view").clicked() {
            page.pan = egui::Vec2::ZERO;
            page.scale = 0.0;
        }
        if ui.button("Locate me").clicked() {
            page.request_position(config, PositionRequest::LocateMe);
        }
        if let Some(walk) = &page.walk {
            ui.label(
                egui::RichText::new(format!(
                    "Walk to {}: ≈{:.0} m · {} min",
                    walk.target, walk.distance_m, walk.minutes
                ))
                .color(theme.accent),
            );
            if ui.small_button("✕").on_hover_text("Clear route").clicked() {
                page.walk = None;
            }
        }
    });
}

fn banners(ui: &mut egui::Ui, theme: &Theme, page: &MapPage) {
    match &page.dataset {
        Dataset::Loading(_) => {
            ui.label(egui::RichText::new("Loading map data...").color(theme.muted));
            ui.ctx().request_repaint();
        }
        Dataset::Failed(message) => {
            // Page-scoped message; the map itself stays usable.
            ui.colored_label(
                theme.danger,
                format!("Could not load campus locations: {message}"),
            );
        }
        Dataset::Loaded(_) => {}
    }
}

fn canvas(ui: &mut egui::Ui, theme: &Theme, config: &Config, page: &mut MapPage) {
    let size = egui::vec2(ui.available_width(), (ui.available_height() - 8.0).max(240.0));
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());

    if page.scale == 0.0 {
        page.scale = (rect.width() / INITIAL_SPAN_M).clamp(MIN_SCALE, MAX_SCALE);
    }

    // Pan with drag, zoom with scroll over the canvas.
    if response.dragged() {
        page.pan -= response.drag_delta() / page.scale;
    }
    if response.hovered() {
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll != 0.0 {
            let factor = (scroll * 0.002).exp();
            page.scale = (page.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        }
    }

    let (pan, scale) = (page.pan, page.scale);
    let to_screen = move |p: Point| -> egui::Pos2 {
        let (x, y) = geo::to_local_meters(p);
        egui::pos2(
            rect.center().x + (x as f32 - pan.x) * scale,
            rect.center().y - (y as f32 + pan.y) * scale,
        )
    };

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, egui::CornerRadius::same(4), theme.panel);
    grid(&painter, theme, rect, page);

    // Campus marker is always present once the map is up.
    let campus = to_screen(CAMPUS_CENTER);
    painter.circle_filled(campus, 7.0, theme.accent);
    painter.text(
        campus + egui::vec2(10.0, 0.0),
        egui::Align2::LEFT_CENTER,
        "PSU Abington",
        egui::FontId::proportional(theme.body_size),
        theme.heading_color,
    );

    // Walking route under the markers.
    if let Some(walk) = &page.walk {
        let points = [to_screen(walk.from), to_screen(walk.to)];
        let stroke = egui::Stroke::new(2.0, theme.accent);
        painter.extend(egui::Shape::dashed_line(&points, stroke, 8.0, 6.0));
    }

    if let Dataset::Loaded(pois) = &page.dataset {
        let pointer = response.hover_pos();
        let mut clicked_marker = None;

        for (i, poi) in pois.iter().enumerate() {
            let pos = to_screen(poi.point);
            if !rect.contains(pos) {
                continue;
            }
            let selected = page.selected == Some(i);
            let hovered =
                pointer.is_some_and(|p| p.distance(pos) <= MARKER_HIT_RADIUS);

            let radius = if selected || hovered { 7.0 } else { 5.0 };
            painter.circle_filled(pos, radius, theme.danger);
            painter.circle_stroke(pos, radius, egui::Stroke::new(1.5, theme.background));
            painter.text(
                pos + egui::vec2(0.0, -radius - 4.0),
                egui::Align2::CENTER_BOTTOM,
                &poi.name,
                egui::FontId::proportional(theme.caption_size),
                theme.foreground,
            );

            if hovered && response.clicked() {
                clicked_marker = Some(i);
            }
        }

        // A marker click asks for the user's position and routes to it.
        if let Some(i) = clicked_marker {
            page.selected = Some(i);
            page.request_position(config, PositionRequest::RouteTo(i));
        }
    }

    if let Some(position) = page.position {
        let pos = to_screen(position);
        painter.circle_filled(pos, 6.0, egui::Color32::from_rgb(0x2A, 0x6F, 0xDB));
        painter.circle_stroke(pos, 9.0, egui::Stroke::new(1.5, theme.accent));
        painter.text(
            pos + egui::vec2(12.0, 0.0),
            egui::Align2::LEFT_CENTER,
            "You are here",
            egui::FontId::proportional(theme.caption_size),
            theme.muted,
        );
    }
}

fn grid(painter: &egui::Painter, theme: &Theme, rect: egui::Rect, page: &MapPage) {
    // Light 100 m grid to give panning some texture.
    let step = 100.0 * page.scale;
    if step < 12.0 {
        return;
    }
    let stroke = egui::Stroke::new(0.5, Theme::with_opacity(theme.muted, 0.25));

    let mut x = rect.center().x - (page.pan.x * page.scale) % step;
    while x < rect.right() {
        if x >= rect.left() {
            painter.line_segment(
                [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
                stroke,
            );
        }
        x += step;
    }
    x = rect.center().x - (page.pan.x * page.scale) % step - step;
    while x > rect.left() {
        painter.line_segment(
            [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
            stroke,
        );
        x -= step;
    }

    let mut y = rect.center().y + (page.pan.y * page.scale) % step;
    while y < rect.bottom() {
        if y >= rect.top() {
            painter.line_segment(
                [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
                stroke,
            );
        }
        y += step;
    }
    y = rect.center().y + (page.pan.y * page.scale) % step - step;
    while y > rect.top() {
        painter.line_segment(
            [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
            stroke,
        );
        y -= step;
    }
}

/// One-time scoped permission prompt, the desktop analogue of the browser's
/// geolocation consent dialog.
fn permission_prompt(ui: &egui::Ui, config: &Config, page: &mut MapPage) {
    let Some(request) = page.pending else { return };

    egui::Window::new("Location permission")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ui.ctx(), |ui| {
            ui.label("Allow AIM to use your location to compute walking directions?");
            ui.horizontal(|ui| {
                if ui.button("Allow").clicked() {
                    page.permission = Permission::Granted;
                    page.pending = None;
                    page.fulfil(config, request);
                }
                if ui.button("Deny").clicked() {
                    page.permission = Permission::Denied;
                    page.pending = None;
                    tracing::info!("location permission denied");
                }
            });
        });
}

fn position_alert(ui: &egui::Ui, theme: &Theme, page: &mut MapPage) {
    let Some(message) = page.position_error.clone() else {
        return;
    };
    egui::Window::new("Location unavailable")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ui.ctx(), |ui| {
            ui.colored_label(theme.danger, message);
            if ui.button("OK").clicked() {
                page.position_error = None;
            }
        });
}
