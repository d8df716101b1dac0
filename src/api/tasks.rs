//! Task endpoints
//!
//! POST /tasks — authenticated. The owner is always the caller: the
//! id is resolved from the token subject on every request (no session
//! cache), and any owner field in the payload is ignored.

use axum::extract::State;
use axum::{Extension, Json};
use serde::Deserialize;
use validator::Validate;

use crate::auth::CurrentEmployee;
use crate::db::{employees, tasks};
use crate::error::{ApiResult, AppError};
use crate::state::AppState;

#[derive(Deserialize, Validate)]
pub struct TaskCreate {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
}

pub async fn create_task(
    State(state): State<AppState>,
    Extension(caller): Extension<CurrentEmployee>,
    Json(req): Json<TaskCreate>,
) -> ApiResult<tasks::Task> {
    req.validate()?;

    // The token is trusted for authentication, but the row may have
    // been deleted since it was issued.
    let owner_id = employees::find_id_by_email(&state.pool, &caller.email)
        .await?
        .ok_or(AppError::NotFound)?;

    let task = tasks::create(
        &state.pool,
        req.title.trim(),
        req.description.as_deref(),
        req.is_completed,
        owner_id,
    )
    .await?;

    tracing::info!(id = task.id, owner_id, "Task created");

    Ok(Json(task))
}
