mod app;
mod color;
mod config;
mod data;
mod error;
mod state;
mod ui;

use anyhow::{Context, Result};
use app::PercolationApp;
use config::DashboardConfig;
use data::loader;
use data::metric::MetricRegistry;
use eframe::egui;
use state::Dashboard;

/// Everything that must succeed before a window is shown.
fn startup(config: &DashboardConfig) -> Result<(Dashboard, String)> {
    let registry = MetricRegistry::new().context("validating the metric registry")?;
    let dataset = loader::load_dataset(&config.dataset_path).context("loading the dataset")?;
    let description =
        loader::load_description(&config.description_path).context("loading the description")?;
    let dashboard = Dashboard::new(dataset, registry).context("building the initial plot")?;
    Ok((dashboard, description))
}

fn main() -> Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();
    let (dashboard, description) =
        startup(&config).inspect_err(|e| log::error!("Startup failed: {e:#}"))?;
    log::info!("Starting dashboard: {}", dashboard.view().title);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.as_str())
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        &config.window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(PercolationApp::new(dashboard, description)))),
    )
    .map_err(|e| anyhow::anyhow!("dashboard window failed: {e}"))
}
