//! App module - contains the main application state and logic

mod fetch;

use crate::config::Config;
use crate::settings::Settings;
use crate::theme;
use crate::types::QuoteState;
use eframe::egui;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) config: Config,
    /// Shared with the background fetch task. `loading` inside is the single
    /// gate that keeps at most one request in flight.
    pub(crate) state: Arc<Mutex<QuoteState>>,
    pub(crate) client: reqwest::Client,
    pub(crate) runtime: tokio::runtime::Runtime,
    // Window chrome
    pub(crate) title_applied: bool,
    pub(crate) needs_center: bool,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: Config,
        data_dir: PathBuf,
    ) -> Result<Self, std::io::Error> {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let runtime = tokio::runtime::Runtime::new()?;

        Ok(Self {
            config,
            state: Arc::new(Mutex::new(QuoteState::default())),
            client: reqwest::Client::new(),
            runtime,
            title_applied: false,
            needs_center: false,
            window_pos: None,
            window_size: None,
            data_dir,
        })
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
        };
        settings.save(&self.data_dir);
    }
}
