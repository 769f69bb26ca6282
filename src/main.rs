//! TWH Dashboard host shell
//!
//! Run with: cargo run --bin twh-dashboard
//!
//! # Configuration
//!
//! Read from the first config file found (see [`Config::load_default`]);
//! `TWH_*` environment variables override file settings and `RUST_LOG`
//! overrides the configured log level.

use anyhow::Context;
use std::sync::Arc;

use twh_dashboard::actions::{ActionRegistry, DASHBOARD_ACTION_TAG};
use twh_dashboard::api::{serve, AppState};
use twh_dashboard::chart::{ChartRenderer, HtmlSurface};
use twh_dashboard::config::Config;
use twh_dashboard::dashboard::DashboardController;
use twh_dashboard::summary::OdooRpcClient;
use twh_dashboard::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    telemetry::init(&config.logging).context("failed to initialize logging")?;

    tracing::info!("Starting TWH dashboard shell v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Summary backend: {}", config.backend.url);

    let provider = OdooRpcClient::new(config.backend.backend_config())
        .context("failed to build summary client")?;

    std::fs::create_dir_all(&config.chart.output_dir)
        .with_context(|| format!("failed to create chart directory {}", config.chart.output_dir))?;
    tracing::info!("Chart output directory: {}", config.chart.output_dir);

    let surface = HtmlSurface::new(&config.chart.output_dir, config.chart.library_url.clone());
    let renderer = ChartRenderer::new(Box::new(surface), config.chart.target.clone())
        .with_style(config.chart.style());

    let controller = DashboardController::new(
        Arc::new(provider),
        renderer,
        config.dashboard.controller_config(),
    );

    let mut registry = ActionRegistry::new();
    registry.register(DASHBOARD_ACTION_TAG, "TWH Dashboard", controller.clone())?;

    // Mount: first load runs while the server comes up.
    tokio::spawn(async move {
        let outcome = controller.start().await;
        if !outcome.is_applied() {
            tracing::warn!("Initial dashboard load did not apply; showing defaults");
        }
    });

    let api_config = config.api.api_config();
    let state = AppState::new(registry, api_config.clone());

    serve(state, &api_config).await?;

    tracing::info!("TWH dashboard shell stopped");
    Ok(())
}
