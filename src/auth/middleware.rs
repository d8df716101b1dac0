//! Auth gate: bearer-token middleware for protected routes
//!
//! Verifies the token signature and expiry only — no database lookup.
//! The subject is trusted from the signature; handlers that need the
//! employee row resolve it themselves.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;
use crate::state::AppState;

/// Authenticated caller identity, injected into request extensions
#[derive(Debug, Clone)]
pub struct CurrentEmployee {
    pub email: String,
}

/// Middleware that extracts and verifies the bearer token from the
/// `Authorization` header.
///
/// Every rejection is a generic 401: expired, malformed and
/// bad-signature tokens are indistinguishable to the caller. The
/// specific cause is logged at debug level only.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(unauthenticated)?;

    let token =
        crate::auth::TokenService::extract_from_header(auth_header).ok_or_else(unauthenticated)?;

    let claims = state.tokens.verify(token).map_err(|e| {
        tracing::debug!("Token verification failed: {e}");
        unauthenticated()
    })?;

    request.extensions_mut().insert(CurrentEmployee {
        email: claims.sub,
    });

    Ok(next.run(request).await)
}

fn unauthenticated() -> Response {
    AppError::Unauthenticated.into_response()
}
