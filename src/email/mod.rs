//! Deferred welcome notification (simulated transport)
//!
//! Runs on a detached task after registration: it holds no
//! request-scoped resource and its outcome never affects the HTTP
//! response. Delivery failure is logged, never retried.

use std::time::Duration;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Simulated mail transport latency
const SEND_DELAY: Duration = Duration::from_secs(2);

pub async fn send_welcome_email(to: &str) -> Result<(), BoxError> {
    // Stand-in for a real mail provider call
    tokio::time::sleep(SEND_DELAY).await;

    tracing::info!(to = to, "Welcome email sent");
    Ok(())
}

/// Fire-and-forget: spawn delivery off the request path
pub fn spawn_welcome_email(to: String) {
    tokio::spawn(async move {
        if let Err(e) = send_welcome_email(&to).await {
            tracing::warn!(to = %to, error = %e, "Welcome email delivery failed");
        }
    });
}
