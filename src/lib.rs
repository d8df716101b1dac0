//! taskboard — authenticated task-management backend
//!
//! Employees register, log in to obtain a bearer token, create tasks,
//! and view an aggregate completion-rate dashboard. PostgreSQL owns all
//! persistent state; the service holds nothing in memory across
//! requests.
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── config.rs      # Environment configuration, read once at startup
//! ├── state.rs       # Shared AppState (pool + token service)
//! ├── error.rs       # Service error taxonomy → HTTP responses
//! ├── auth/          # Password hashing, JWT issue/verify, auth gate
//! ├── db/            # Raw-SQL access layer, one module per table
//! ├── api/           # HTTP routes and handlers
//! └── email/         # Deferred welcome notification
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod email;
pub mod error;
pub mod state;

pub use auth::{CurrentEmployee, TokenService};
pub use config::Config;
pub use error::{ApiResult, AppError};
pub use state::AppState;
