//! The application shell: window setup, route state, page dispatch.

use eframe::egui;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::link::{QueryParams, Route};
use crate::pages;
use crate::pages::map::MapPage;
use crate::pages::street_view::StreetViewPage;
use crate::qr::QrTextureCache;
use crate::render::image_cache::ImageCache;
use crate::theme::Theme;

struct NavigatorApp {
    config: Config,
    theme: Theme,
    catalog: &'static Catalog,
    images: ImageCache,
    qr_cache: QrTextureCache,
    route: Route,
    // Per-page state exists only while its page is the current route.
    street_view: Option<StreetViewPage>,
    map: Option<MapPage>,
}

impl NavigatorApp {
    fn new(config: Config, initial: &str) -> Self {
        let images = ImageCache::new(config.assets_dir());
        let theme = Theme::from_name(config.theme());
        let mut app = Self {
            config,
            theme,
            catalog: Catalog::shared(),
            images,
            qr_cache: QrTextureCache::default(),
            route: Route::Home,
            street_view: None,
            map: None,
        };
        app.navigate(initial);
        app
    }

    /// Route-string navigation. Deep-link parameters are adopted exactly
    /// once, here; pages never rewrite the route afterwards.
    fn navigate(&mut self, target: &str) {
        let (route, params) = Route::parse(target);
        tracing::debug!(?route, "navigate");
        self.enter(route, &params);
    }

    fn enter(&mut self, route: Route, params: &QueryParams) {
        // Leaving a page discards its state, including any in-flight
        // dataset read.
        self.street_view = None;
        self.map = None;

        match &route {
            Route::StreetView => {
                self.street_view = Some(StreetViewPage::enter(self.catalog, params));
            }
            Route::Map => {
                self.map = Some(MapPage::enter(&self.config, params));
            }
            Route::Home | Route::Floors | Route::Floor(_) | Route::Faq => {}
        }
        self.route = route;
    }

    fn show_current_page(&mut self, ui: &mut egui::Ui) -> Option<String> {
        let route = self.route.clone();
        match route {
            Route::Home => pages::home::show(ui, &self.theme, &self.config, &mut self.qr_cache),
            Route::Map => match &mut self.map {
                Some(page) => pages::map::show(ui, &self.theme, &self.config, page),
                None => Some("/map".to_string()),
            },
            Route::StreetView => match &mut self.street_view {
                Some(page) => {
                    pages::street_view::show(ui, &self.theme, self.catalog, &self.images, page)
                }
                None => Some("/streetview".to_string()),
            },
            Route::Floors => pages::floors::show(ui, &self.theme),
            Route::Floor(id) => {
                pages::floor_code::show(ui, &self.theme, &self.config, &mut self.qr_cache, &id)
            }
            Route::Faq => pages::faq::show(ui, &self.theme),
        }
    }
}

impl eframe::App for NavigatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let background = self.theme.background;

        let nav = egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(background).inner_margin(16.0))
            .show(ctx, |ui| self.show_current_page(ui))
            .inner;

        if let Some(target) = nav {
            self.navigate(&target);
        }
    }
}

/// Launch the UI. `initial_route` is the deep link from the command line,
/// defaulting to the home page.
pub fn run(config: Config, initial_route: Option<String>, windowed: bool) -> anyhow::Result<()> {
    let route = initial_route.unwrap_or_else(|| "/".to_string());

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([1100.0, 760.0])
        .with_title("Abington Interactive Map");
    if !windowed {
        viewport = viewport.with_maximized(true);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "AIM",
        options,
        Box::new(move |_cc| Ok(Box::new(NavigatorApp::new(config, &route)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start UI: {e}"))
}
