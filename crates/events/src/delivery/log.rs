//! Log-only alert delivery for dry runs.
//!
//! [`LogPublisher`] writes each alert to the tracing output instead of
//! sending it anywhere. Useful for running the worker locally without AWS
//! credentials.

use async_trait::async_trait;

use crate::publisher::{ensure_destination, AlertPublisher, PublishError, PublishReceipt};

#[derive(Debug, Clone, Copy, Default)]
pub struct LogPublisher;

#[async_trait]
impl AlertPublisher for LogPublisher {
    fn name(&self) -> &str {
        "log"
    }

    async fn publish(
        &self,
        destination: &str,
        message: &str,
        subject: &str,
    ) -> Result<PublishReceipt, PublishError> {
        ensure_destination(destination)?;
        tracing::info!(destination, subject, message, "Dry run: alert not sent");
        Ok(PublishReceipt::default())
    }
}
