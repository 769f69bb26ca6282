//! Dashboard Component
//!
//! View state and the controller that keeps it in sync with the summary
//! provider.

pub mod controller;
pub mod state;

pub use controller::{ControllerConfig, DashboardController, DashboardSnapshot, LoadOutcome};
pub use state::{DashboardViewState, DEFAULT_AMOUNT, DEFAULT_PERIOD_LABEL};
