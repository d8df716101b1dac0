//! Registration endpoint
//!
//! POST /register — validate, hash, insert, then fire the welcome
//! notification off the request path and return the public fields.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use validator::Validate;

use crate::auth::hash_password;
use crate::db::employees::{self, EmployeePublic};
use crate::email;
use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub role: String,
    #[validate(length(min = 1))]
    pub password: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<EmployeePublic> {
    req.validate()?;

    // Email policy: trimmed + lower-cased before any store access, so
    // uniqueness is effectively case-insensitive.
    let email_addr = req.email.trim().to_lowercase();

    let password_hash = hash_password(&req.password)?;

    // Single atomic insert; a duplicate email surfaces as a unique
    // violation and maps to a generic conflict.
    let employee = employees::create(
        &state.pool,
        req.name.trim(),
        &email_addr,
        req.role.trim(),
        &password_hash,
    )
    .await?;

    tracing::info!(id = employee.id, email = %employee.email, "Employee registered");

    // Deferred, best-effort: the response does not wait for delivery.
    email::spawn_welcome_email(email_addr);

    Ok(Json(employee))
}
