//! Login endpoint
//!
//! POST /login — password-grant form (`username` carries the email).
//! A missing employee and a wrong password are indistinguishable to
//! the caller.

use axum::Json;
use axum::extract::{Form, State};
use serde::{Deserialize, Serialize};

use crate::auth::verify_password;
use crate::db::employees;
use crate::error::{ApiResult, AppError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginForm {
    /// Email address (password-grant convention names this `username`)
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> ApiResult<TokenResponse> {
    let email_addr = form.username.trim().to_lowercase();

    let employee = employees::find_by_email(&state.pool, &email_addr)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !verify_password(&form.password, &employee.password_hash) {
        return Err(AppError::InvalidCredentials);
    }

    let access_token = state.tokens.issue(&employee.email)?;

    tracing::info!(id = employee.id, "Employee logged in");

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
    }))
}
