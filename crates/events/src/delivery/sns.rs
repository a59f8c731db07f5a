//! Alert delivery through Amazon SNS.
//!
//! [`SnsPublisher`] issues a single `Publish` call per alert. The SDK client
//! is constructed once at process start and injected here; no retry is
//! attempted beyond what the SDK itself performs.

use async_trait::async_trait;
use aws_sdk_sns::error::DisplayErrorContext;

use crate::publisher::{ensure_destination, AlertPublisher, PublishError, PublishReceipt};

/// Publishes alerts to SNS topics.
#[derive(Debug, Clone)]
pub struct SnsPublisher {
    client: aws_sdk_sns::Client,
}

impl SnsPublisher {
    /// Wrap an already-configured SNS client.
    pub fn new(client: aws_sdk_sns::Client) -> Self {
        Self { client }
    }

    /// Build a publisher from a loaded AWS SDK configuration.
    pub fn from_sdk_config(config: &aws_config::SdkConfig) -> Self {
        Self::new(aws_sdk_sns::Client::new(config))
    }
}

#[async_trait]
impl AlertPublisher for SnsPublisher {
    fn name(&self) -> &str {
        "sns"
    }

    async fn publish(
        &self,
        destination: &str,
        message: &str,
        subject: &str,
    ) -> Result<PublishReceipt, PublishError> {
        ensure_destination(destination)?;

        let output = self
            .client
            .publish()
            .topic_arn(destination)
            .message(message)
            .subject(subject)
            .send()
            .await
            .map_err(|e| {
                let detail = DisplayErrorContext(&e).to_string();
                tracing::error!(topic_arn = destination, error = %detail, "SNS publish failed");
                PublishError::Sns(detail)
            })?;

        let message_id = output.message_id().map(str::to_string);
        tracing::info!(topic_arn = destination, message_id = ?message_id, "Alert published to SNS");

        Ok(PublishReceipt { message_id })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
