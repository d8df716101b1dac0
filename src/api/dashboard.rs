//! Completion-rate dashboard endpoint
//!
//! GET /stats/dashboard — authenticated, read-only pass-through of one
//! aggregation query.

use axum::Json;
use axum::extract::State;

use crate::db::tasks::{self, DashboardRow};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn get_dashboard(State(state): State<AppState>) -> ApiResult<Vec<DashboardRow>> {
    let rows = tasks::completion_dashboard(&state.pool).await?;
    Ok(Json(rows))
}
