//! App module - contains the main application state and logic

mod events;
mod home;
mod modals;
mod saved;

pub use home::HomeView;
pub use modals::AddQuoteForm;
pub use saved::SavedList;

use crate::api::QuoteApi;
use crate::settings::Settings;
use crate::theme;
use crate::types::{ApiEvent, Route};
use eframe::egui;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::info;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) api: QuoteApi,
    pub(crate) runtime: tokio::runtime::Runtime,
    // Completed API calls land here; the update loop drains it each frame
    pub(crate) events: Arc<Mutex<Vec<ApiEvent>>>,

    pub(crate) route: Route,
    pub(crate) home: HomeView,
    pub(crate) saved: SavedList,
    pub(crate) add_form: AddQuoteForm,
    pub(crate) show_add_modal: bool,

    pub(crate) logo_texture: Option<egui::TextureHandle>,
    pub(crate) initial_fetch_done: bool,

    // Window geometry tracking for saving on exit
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
    pub(crate) api_url_override: Option<String>,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let api = QuoteApi::new(settings.api_url_or_default());
        info!(url = %api.base_url(), "API configuration");

        Self {
            api,
            runtime: tokio::runtime::Runtime::new().unwrap(),
            events: Arc::new(Mutex::new(Vec::new())),
            route: Route::Home,
            home: HomeView::new(),
            saved: SavedList::new(),
            add_form: AddQuoteForm::new(),
            show_add_modal: false,
            logo_texture: None,
            initial_fetch_done: false,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
            api_url_override: settings.api_url,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            api_url: self.api_url_override.clone(),
        };
        settings.save(&self.data_dir);
    }

    /// Whether the saved list is on screen via either access path.
    pub fn saved_list_on_screen(&self) -> bool {
        self.route == Route::Saved || (self.route == Route::Home && self.home.saved_visible)
    }

    /// Show or hide the inline saved list on the home screen. Every show
    /// pulls a fresh collection.
    pub fn toggle_saved_list(&mut self) {
        self.home.saved_visible = !self.home.saved_visible;
        if self.home.saved_visible {
            self.saved.needs_reload = true;
        }
    }

    /// Navigate to the standalone saved screen.
    pub fn open_saved_screen(&mut self) {
        self.route = Route::Saved;
        self.saved.needs_reload = true;
    }

    /// The standalone screen's close action navigates home instead of
    /// toggling visibility.
    pub fn close_saved_screen(&mut self) {
        self.route = Route::Home;
    }
}
