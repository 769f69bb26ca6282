//! Action Routes
//!
//! Drive registered dashboard actions:
//!
//! - GET /api/v1/actions - List registered actions
//! - GET /api/v1/actions/:tag/state - Current view state
//! - POST /api/v1/actions/:tag/period - Change revenue period
//! - POST /api/v1/actions/:tag/refresh - Reload with the stored period
//! - GET /api/v1/actions/:tag/chart - Last drawn chart definition

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::actions::RegisteredAction;
use crate::api::dto::{ActionListResponse, LoadResponse, PeriodChangeRequest, StateResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::chart::ChartOptions;

fn find_action<'a>(state: &'a AppState, tag: &str) -> ApiResult<&'a RegisteredAction> {
    state
        .registry
        .get(tag)
        .ok_or_else(|| ApiError::NotFound(format!("action '{}'", tag)))
}

/// GET /api/v1/actions
pub async fn list_actions(State(state): State<Arc<AppState>>) -> Json<ActionListResponse> {
    Json(ActionListResponse {
        actions: state.registry.list(),
    })
}

/// GET /api/v1/actions/:tag/state
pub async fn get_state(
    State(state): State<Arc<AppState>>,
    Path(tag): Path<String>,
) -> ApiResult<Json<StateResponse>> {
    let action = find_action(&state, &tag)?;
    Ok(Json(StateResponse::new(&tag, action.controller.snapshot())))
}

/// POST /api/v1/actions/:tag/period
///
/// The key is forwarded as-is; the backend decides what an unknown key means.
pub async fn change_period(
    State(state): State<Arc<AppState>>,
    Path(tag): Path<String>,
    Json(request): Json<PeriodChangeRequest>,
) -> ApiResult<Json<LoadResponse>> {
    let controller = find_action(&state, &tag)?.controller.clone();

    tracing::info!(tag = %tag, period = %request.period, "Period changed");
    let outcome = controller.on_period_change(request.period).await;

    Ok(Json(LoadResponse::new(
        &outcome,
        StateResponse::new(&tag, controller.snapshot()),
    )))
}

/// POST /api/v1/actions/:tag/refresh
pub async fn refresh(
    State(state): State<Arc<AppState>>,
    Path(tag): Path<String>,
) -> ApiResult<Json<LoadResponse>> {
    let controller = find_action(&state, &tag)?.controller.clone();

    let outcome = controller.refresh().await;

    Ok(Json(LoadResponse::new(
        &outcome,
        StateResponse::new(&tag, controller.snapshot()),
    )))
}

/// GET /api/v1/actions/:tag/chart
pub async fn get_chart(
    State(state): State<Arc<AppState>>,
    Path(tag): Path<String>,
) -> ApiResult<Json<ChartOptions>> {
    let action = find_action(&state, &tag)?;
    action
        .controller
        .last_chart()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("no chart rendered for '{}'", tag)))
}
