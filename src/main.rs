//! CRUD Visualizer - a desktop demo of create, read, update and delete.
//!
//! Records live in memory only and are reset to the seed list on every run.
//! Click an item to select it, then use the toolbar buttons to act on it.

// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod core;
mod ui;

use app::CrudApp;
use config::ConfigManager;
use eframe::egui;
use tracing_subscriber::EnvFilter;
use ui::theme::{self, Theme};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = ConfigManager::new().load();
    tracing::debug!("Config file: {}", config.config_file);

    // Fixed-size window sized to the canvas
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.as_str())
            .with_inner_size([config.canvas_width, config.canvas_height])
            .with_resizable(false),
        ..Default::default()
    };

    let app_name = config.window_title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| {
            let theme = Theme::from_palette(&config.palette);
            theme::apply_light_theme(&cc.egui_ctx, &theme);
            Ok(Box::new(CrudApp::new(cc, &config, theme)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to run window: {e}"))
}
