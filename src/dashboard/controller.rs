//! Dashboard Controller
//!
//! Keeps a [`DashboardViewState`] in sync with the summary provider:
//!
//! - `load(period)` fetches, replaces the state wholesale, renders the chart
//! - `on_period_change(selected)` is the selector entry point
//! - `refresh()` reloads with the stored period
//!
//! Failures never touch the state; the last good state stays visible.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::state::DashboardViewState;
use crate::chart::{ChartOptions, ChartRenderer, RenderOutcome};
use crate::summary::{PeriodKey, SummaryError, SummaryProvider};

/// Controller behavior settings
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Period used at mount and by `refresh` before any selection
    pub default_period: PeriodKey,
    /// Drop responses that resolve after a newer load was issued
    pub discard_stale_responses: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            default_period: PeriodKey::Month,
            discard_stale_responses: true,
        }
    }
}

/// What happened to a `load` call
#[derive(Debug)]
pub enum LoadOutcome {
    /// New state stored; chart render attempted
    Applied { render: RenderOutcome },
    /// Remote call failed; state unchanged
    Failed { error: SummaryError },
    /// A newer load was issued while this one was in flight; response dropped
    Superseded,
}

impl LoadOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, LoadOutcome::Applied { .. })
    }
}

/// Point-in-time copy of the controller state
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub state: DashboardViewState,
    /// Period that `refresh` will request
    pub period: PeriodKey,
    pub loaded_at: Option<DateTime<Utc>>,
}

struct Inner {
    state: Arc<DashboardViewState>,
    period: PeriodKey,
    /// Ticket of the most recently issued load
    issued: u64,
    loaded_at: Option<DateTime<Utc>>,
}

/// View-state synchronizer for one dashboard instance.
///
/// Cheap to clone; clones share the same state.
#[derive(Clone)]
pub struct DashboardController {
    provider: Arc<dyn SummaryProvider>,
    renderer: Arc<Mutex<ChartRenderer>>,
    inner: Arc<Mutex<Inner>>,
    config: Arc<ControllerConfig>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl DashboardController {
    /// Mount a controller with a default view state
    pub fn new(
        provider: Arc<dyn SummaryProvider>,
        renderer: ChartRenderer,
        config: ControllerConfig,
    ) -> Self {
        let inner = Inner {
            state: Arc::new(DashboardViewState::default()),
            period: config.default_period.clone(),
            issued: 0,
            loaded_at: None,
        };

        Self {
            provider,
            renderer: Arc::new(Mutex::new(renderer)),
            inner: Arc::new(Mutex::new(inner)),
            config: Arc::new(config),
        }
    }

    /// Current view state
    pub fn state(&self) -> Arc<DashboardViewState> {
        Arc::clone(&lock(&self.inner).state)
    }

    /// Period that `refresh` will request
    pub fn period(&self) -> PeriodKey {
        lock(&self.inner).period.clone()
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        let inner = lock(&self.inner);
        DashboardSnapshot {
            state: inner.state.as_ref().clone(),
            period: inner.period.clone(),
            loaded_at: inner.loaded_at,
        }
    }

    /// Last chart definition drawn on the surface
    pub fn last_chart(&self) -> Option<ChartOptions> {
        lock(&self.renderer).last_drawn().cloned()
    }

    /// Initial load with the configured default period
    pub async fn start(&self) -> LoadOutcome {
        self.load(self.config.default_period.clone()).await
    }

    /// Fetch the summary for `period` and replace the view state.
    pub async fn load(&self, period: PeriodKey) -> LoadOutcome {
        let ticket = {
            let mut inner = lock(&self.inner);
            inner.period = period.clone();
            inner.issued += 1;
            inner.issued
        };

        tracing::debug!(period = %period, ticket, "Loading dashboard summary");

        let summary = match self.provider.fetch_summary(&period).await {
            Ok(summary) => summary,
            Err(error) => {
                tracing::error!(period = %period, error = %error, "Failed to load dashboard summary");
                return LoadOutcome::Failed { error };
            }
        };

        let next = Arc::new(DashboardViewState::from(summary));

        let mut inner = lock(&self.inner);
        if self.config.discard_stale_responses && inner.issued != ticket {
            tracing::debug!(
                period = %period,
                ticket,
                latest = inner.issued,
                "Discarding superseded dashboard summary"
            );
            return LoadOutcome::Superseded;
        }

        inner.state = Arc::clone(&next);
        inner.loaded_at = Some(Utc::now());

        if next.revenue_period != period {
            tracing::info!(
                requested = %period,
                reported = %next.revenue_period,
                "Backend reported a different revenue period"
            );
        }

        // Render under the state lock so chart and state cannot diverge.
        let render = lock(&self.renderer).render(&next);
        drop(inner);

        tracing::info!(
            period = %next.revenue_period,
            products = next.total_products,
            customers = next.total_customers,
            unpaid = next.unpaid_invoices,
            "Dashboard summary loaded"
        );

        LoadOutcome::Applied { render }
    }

    /// Period selector changed
    pub async fn on_period_change(&self, selected: PeriodKey) -> LoadOutcome {
        self.load(selected).await
    }

    /// Reload using the stored period
    pub async fn refresh(&self) -> LoadOutcome {
        let period = self.period();
        self.load(period).await
    }
}
