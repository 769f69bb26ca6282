//! Data Transfer Objects
//!
//! Request and response bodies of the host shell API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::actions::ActionInfo;
use crate::chart::RenderOutcome;
use crate::dashboard::{DashboardSnapshot, DashboardViewState, LoadOutcome};
use crate::summary::PeriodKey;

/// GET /api/v1/actions
#[derive(Debug, Serialize)]
pub struct ActionListResponse {
    pub actions: Vec<ActionInfo>,
}

/// Current dashboard state of one action
#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub tag: String,
    /// Period that a refresh will request
    pub period: PeriodKey,
    pub loaded_at: Option<DateTime<Utc>>,
    pub state: DashboardViewState,
}

impl StateResponse {
    pub fn new(tag: &str, snapshot: DashboardSnapshot) -> Self {
        Self {
            tag: tag.to_string(),
            period: snapshot.period,
            loaded_at: snapshot.loaded_at,
            state: snapshot.state,
        }
    }
}

/// POST /api/v1/actions/:tag/period
#[derive(Debug, Deserialize)]
pub struct PeriodChangeRequest {
    pub period: PeriodKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    Applied,
    Failed,
    Superseded,
}

/// How the chart render went after an applied load
#[derive(Debug, Serialize)]
pub struct RenderStatus {
    pub drawn: bool,
    pub points: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<&RenderOutcome> for RenderStatus {
    fn from(outcome: &RenderOutcome) -> Self {
        match outcome {
            RenderOutcome::Drawn { points } => Self {
                drawn: true,
                points: *points,
                reason: None,
            },
            RenderOutcome::Skipped { reason } => Self {
                drawn: false,
                points: 0,
                reason: Some(reason.to_string()),
            },
        }
    }
}

/// Result of a period change or refresh
#[derive(Debug, Serialize)]
pub struct LoadResponse {
    pub status: LoadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render: Option<RenderStatus>,
    /// State after the call; unchanged unless the load was applied
    #[serde(flatten)]
    pub current: StateResponse,
}

impl LoadResponse {
    pub fn new(outcome: &LoadOutcome, current: StateResponse) -> Self {
        let (status, error, render) = match outcome {
            LoadOutcome::Applied { render } => (LoadStatus::Applied, None, Some(render.into())),
            LoadOutcome::Failed { error } => (LoadStatus::Failed, Some(error.to_string()), None),
            LoadOutcome::Superseded => (LoadStatus::Superseded, None, None),
        };

        Self {
            status,
            error,
            render,
            current,
        }
    }
}

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub actions: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
