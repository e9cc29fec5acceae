/**
 * Bookstore Admin - Main Entry Point
 *
 * Loads configuration, opens local storage, and runs the egui window that
 * hosts the login, registration and dashboard pages.
 */
use std::time::{Duration, Instant};

use bookstore_admin::egui_app::logging::init_logging;
use bookstore_admin::egui_app::theme::styles;
use bookstore_admin::egui_app::{views, AppState, Config};
use eframe::egui;

/// Frame interval while idle, so timed field errors can expire
const IDLE_REPAINT: Duration = Duration::from_millis(250);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = Config::load().unwrap_or_else(|e| {
        tracing::error!(error = %e, "invalid configuration, using defaults");
        Config::default()
    });
    tracing::info!(server = config.server_url(), "starting bookstore admin");

    let state = AppState::from_config(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Bookstore Admin",
        options,
        Box::new(|cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(BookstoreApp { state }))
        }),
    )?;
    Ok(())
}

/// Main application state
struct BookstoreApp {
    state: AppState,
}

impl eframe::App for BookstoreApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.check_pending_results(Instant::now());

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);
        views::render_alert(ctx, &mut self.state);

        if self.state.has_pending() {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(IDLE_REPAINT);
        }
    }
}
