//! API routes for taskboard

pub mod dashboard;
pub mod health;
pub mod login;
pub mod register;
pub mod tasks;

use axum::routing::{get, post};
use axum::{Router, middleware};
use tower_http::trace::TraceLayer;

use crate::auth::auth_middleware;
use crate::state::AppState;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    // Bearer-token protected endpoints
    let protected = Router::new()
        .route("/tasks", post(tasks::create_task))
        .route("/stats/dashboard", get(dashboard::get_dashboard))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Public endpoints (no auth)
    let public = Router::new()
        .route("/register", post(register::register))
        .route("/login", post(login::login));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(public)
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
