#![windows_subsystem = "windows"]
//! Quote Widget - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod config;
mod constants;
mod settings;
mod theme;
mod types;

use app::App;
use config::Config;
use constants::APP_VERSION;
use eframe::egui;
use settings::Settings;
use std::path::PathBuf;
use tracing::info;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "quote-widget.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,quote_widget=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Quote Widget");

    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Quote Widget starting");

    let config = Config::from_env();

    // Load saved window position/size
    let settings = Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(520.0, 420.0)))
        .with_min_inner_size([420.0, 340.0])
        .with_title(config.app_title.clone());

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "quote-widget",
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, config, data_dir)?;
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Re-apply the configured title on the first frame. Idempotent;
        // the viewport builder already set it, this covers platforms that
        // only honor title changes after the window exists.
        if !self.title_applied {
            self.title_applied = true;
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.config.app_title.clone()));
        }

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Snapshot shared state; the background task may mutate it mid-frame
        let (quote, loading, error) = {
            let state = self.state.lock().unwrap();
            (state.quote.clone(), state.loading, state.error.clone())
        };

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(24)),
            )
            .show(ctx, |ui| {
                let panel_rect = ui.max_rect();
                let block_width = (panel_rect.width() - 48.0).min(420.0);

                ui.vertical_centered(|ui| {
                    ui.add_space(28.0);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(&self.config.app_title)
                                .size(26.0)
                                .strong()
                                .color(theme::TEXT_PRIMARY),
                        )
                        .selectable(false),
                    );

                    ui.add_space(28.0);
                    if self.render_fetch_button(ui, loading) {
                        self.request_quote(ctx);
                    }

                    ui.add_space(28.0);
                    if !error.is_empty() {
                        render_error_block(ui, block_width, &error);
                    } else {
                        render_quote_block(ui, block_width, &quote);
                    }
                });

                // Version at the very bottom
                ui.painter().text(
                    egui::pos2(panel_rect.center().x, panel_rect.bottom()),
                    egui::Align2::CENTER_BOTTOM,
                    format!("v{}", APP_VERSION),
                    egui::FontId::proportional(10.0),
                    egui::Color32::from_rgb(0x45, 0x45, 0x4c),
                );
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}

impl App {
    /// Paint the trigger button. Returns true when an enabled click happened.
    /// Disabled exactly while a request is in flight.
    fn render_fetch_button(&self, ui: &mut egui::Ui, loading: bool) -> bool {
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(200.0, 40.0), egui::Sense::click());
        let enabled = !loading;

        let base_fill = if enabled {
            theme::BTN_ACCENT
        } else {
            theme::BTN_DISABLED
        };
        let (fill, draw_rect) = if enabled {
            theme::button_visual(&response, base_fill, rect)
        } else {
            (base_fill, rect)
        };
        ui.painter().rect_filled(draw_rect, 4.0, fill);

        let label = if loading {
            "Loading…".to_string()
        } else {
            format!("{} Get Quote", egui_phosphor::regular::QUOTES)
        };
        let text_color = if enabled {
            theme::BTN_ACCENT_TEXT
        } else {
            theme::TEXT_DIM
        };
        ui.painter().text(
            draw_rect.center(),
            egui::Align2::CENTER_CENTER,
            &label,
            egui::FontId::proportional(15.0),
            text_color,
        );

        if response.hovered() {
            ui.ctx().set_cursor_icon(if enabled {
                egui::CursorIcon::PointingHand
            } else {
                egui::CursorIcon::NotAllowed
            });
        }

        enabled && response.clicked()
    }
}

/// Quote block: accent quotation mark above the wrapped quote text.
fn render_quote_block(ui: &mut egui::Ui, width: f32, quote: &str) {
    theme::section_frame().show(ui, |ui| {
        ui.set_min_width(width);
        ui.set_max_width(width);
        ui.add(
            egui::Label::new(
                egui::RichText::new(egui_phosphor::regular::QUOTES)
                    .size(20.0)
                    .color(theme::ACCENT),
            )
            .selectable(false),
        );
        ui.add_space(4.0);
        ui.add(egui::Label::new(
            egui::RichText::new(quote)
                .size(16.0)
                .italics()
                .color(theme::TEXT_SECONDARY),
        ));
    });
}

/// Error block: replaces the quote block while an error is present.
fn render_error_block(ui: &mut egui::Ui, width: f32, error: &str) {
    theme::error_frame().show(ui, |ui| {
        ui.set_min_width(width);
        ui.set_max_width(width);
        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(egui_phosphor::regular::X_CIRCLE)
                        .size(16.0)
                        .color(theme::STATUS_ERROR),
                )
                .selectable(false),
            );
            ui.add(egui::Label::new(
                egui::RichText::new(error).color(theme::STATUS_ERROR),
            ));
        });
    });
}
