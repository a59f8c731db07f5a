//! The outbound alert publishing seam.
//!
//! [`AlertPublisher`] is the narrow interface between the dispatcher and the
//! notification backend. The dispatcher hands over a destination, a message
//! body, and a subject, and receives an opaque [`PublishReceipt`].

use async_trait::async_trait;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for alert publishing failures.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// The destination identifier is empty or otherwise unusable.
    #[error("Invalid publish destination: {0:?}")]
    InvalidDestination(String),

    /// The SNS service rejected or failed the request (network, permission,
    /// throttling, unknown topic, ...).
    #[error("SNS publish failed: {0}")]
    Sns(String),
}

// ---------------------------------------------------------------------------
// PublishReceipt
// ---------------------------------------------------------------------------

/// Delivery acknowledgment returned by a publisher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReceipt {
    /// Backend-assigned message id, when the backend provides one.
    pub message_id: Option<String>,
}

// ---------------------------------------------------------------------------
// AlertPublisher
// ---------------------------------------------------------------------------

/// Publishes alert messages to a notification destination.
///
/// Implementations are built once per process and shared across
/// invocations, so they must be `Send + Sync`.
#[async_trait]
pub trait AlertPublisher: Send + Sync {
    /// Short name used in logs (e.g. `"sns"`).
    fn name(&self) -> &str;

    /// Submit one message to `destination`.
    ///
    /// A single attempt is made; failures are returned, never retried.
    async fn publish(
        &self,
        destination: &str,
        message: &str,
        subject: &str,
    ) -> Result<PublishReceipt, PublishError>;
}

/// Reject blank destinations before reaching the backend.
pub(crate) fn ensure_destination(destination: &str) -> Result<(), PublishError> {
    if destination.trim().is_empty() {
        return Err(PublishError::InvalidDestination(destination.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
