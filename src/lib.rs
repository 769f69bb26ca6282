//! # TWH Dashboard
//!
//! View-state synchronization for the TWH back-office dashboard: fetches the
//! summary from the backend, keeps a fully-defined view state and renders the
//! monthly sales chart.
//!
//! ## Modules
//!
//! - [`summary`]: Summary types and the JSON-RPC provider
//! - [`dashboard`]: View state and the controller that keeps it in sync
//! - [`chart`]: Sales chart definition, currency formatting and surfaces
//! - [`actions`]: Registry the host shell launches screens from
//! - [`api`]: Host shell HTTP API with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use twh_dashboard::chart::{ChartRenderer, HtmlSurface, DEFAULT_LIBRARY_URL};
//! use twh_dashboard::dashboard::{ControllerConfig, DashboardController};
//! use twh_dashboard::summary::{BackendConfig, OdooRpcClient, PeriodKey};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = Arc::new(OdooRpcClient::new(BackendConfig::default())?);
//!     let surface = HtmlSurface::new("./charts", DEFAULT_LIBRARY_URL);
//!     let renderer = ChartRenderer::new(Box::new(surface), "twh_sales_chart");
//!
//!     let dashboard = DashboardController::new(provider, renderer, ControllerConfig::default());
//!
//!     dashboard.on_period_change(PeriodKey::Year).await;
//!     println!("Revenue: {}", dashboard.state().total_revenue);
//!
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod api;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod summary;
pub mod telemetry;

#[cfg(test)]
pub(crate) mod testing;

// Re-export top-level types for convenience
pub use summary::{
    BackendConfig, OdooRpcClient, PeriodKey, SalesPoint, SummaryError, SummaryProvider,
    SummaryResponse, SummaryResult,
};

pub use dashboard::{
    ControllerConfig, DashboardController, DashboardSnapshot, DashboardViewState, LoadOutcome,
};

pub use chart::{
    ChartOptions, ChartRenderer, ChartStyle, ChartSurface, CurrencyFormat, HtmlSurface,
    RenderError, RenderOutcome,
};

pub use actions::{ActionRegistry, RegisteredAction, DASHBOARD_ACTION_TAG};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig};
