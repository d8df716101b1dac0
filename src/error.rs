//! Service error taxonomy
//!
//! `AppError` bridges the gap between the DB layer (`sqlx::Error`) and
//! the HTTP response layer. It enables `?` propagation without manual
//! `.map_err(|e| { tracing::error!(...); ... })` boilerplate: store
//! failures are logged at the conversion point and collapse to
//! `Internal`, so no internal detail ever reaches a client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Request-time error taxonomy.
///
/// Messages are what clients see; anything more specific is logged
/// server-side only.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed input shape (field detail is safe to return)
    #[error("{0}")]
    Validation(String),
    /// Missing/invalid/expired bearer token — one generic message for
    /// every cause, never distinguishing expired from malformed from
    /// bad signature
    #[error("Could not validate credentials")]
    Unauthenticated,
    /// Bad login credentials — never reveals which half was wrong
    #[error("Incorrect email or password")]
    InvalidCredentials,
    /// Uniqueness violation — does not name the constraint
    #[error("Resource already exists")]
    Conflict,
    /// Authenticated caller no longer exists
    #[error("Resource not found")]
    NotFound,
    /// Unexpected store failure, detail logged server-side
    #[error("Internal server error")]
    Internal,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::Conflict => StatusCode::CONFLICT,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.is_unique_violation() {
                return AppError::Conflict;
            }
        }
        tracing::error!(error = %e, "Database error");
        AppError::Internal
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let field_errors = e.field_errors();
        let mut fields: Vec<&str> = field_errors.keys().map(|k| k.as_ref()).collect();
        fields.sort_unstable();
        AppError::Validation(format!("Invalid field(s): {}", fields.join(", ")))
    }
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(e: argon2::password_hash::Error) -> Self {
        tracing::error!(error = %e, "Password hash error");
        AppError::Internal
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        tracing::error!(error = %e, "Token generation failed");
        AppError::Internal
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.to_string() });
        (self.status_code(), Json(body)).into_response()
    }
}

/// Convenience alias for JSON handler results
pub type ApiResult<T> = Result<Json<T>, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unauthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::InvalidCredentials.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::Conflict.status_code(), StatusCode::CONFLICT);
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_generic_messages_leak_nothing() {
        // Clients must not be able to tell which half of a login failed,
        // or which constraint a conflict hit.
        assert_eq!(
            AppError::InvalidCredentials.to_string(),
            "Incorrect email or password"
        );
        assert_eq!(AppError::Conflict.to_string(), "Resource already exists");
        assert_eq!(AppError::Internal.to_string(), "Internal server error");
    }

    #[test]
    fn test_validation_detail_lists_fields() {
        use validator::Validate;

        #[derive(Validate)]
        struct Probe {
            #[validate(email)]
            email: String,
            #[validate(length(min = 1))]
            name: String,
        }

        let probe = Probe {
            email: "not-an-email".into(),
            name: String::new(),
        };
        let err: AppError = probe.validate().unwrap_err().into();
        let msg = err.to_string();
        assert!(msg.contains("email"));
        assert!(msg.contains("name"));
    }
}
