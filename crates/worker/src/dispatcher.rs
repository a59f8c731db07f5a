//! Heart-rate alert dispatcher.
//!
//! [`AlertDispatcher`] handles one event per call: it extracts the reading,
//! applies the threshold, and publishes at most one alert. Every invocation
//! returns the same [`HandlerResult`] on success; any failure is returned to
//! the caller untouched, with no retry and no fallback.

use std::sync::Arc;

use pulsewatch_core::{AlertMessage, CoreError, HandlerResult, HeartRateThreshold, IncomingEvent};
use pulsewatch_events::{AlertPublisher, PublishError};

use crate::config::WorkerConfig;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for a failed invocation.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The event could not be read (missing `detail`, bad reading, ...).
    #[error(transparent)]
    Event(#[from] CoreError),

    /// An alert was due but no destination is configured.
    #[error("No alert destination configured (SNS_TOPIC_ARN is unset)")]
    MissingDestination,

    /// The publisher failed to deliver the alert.
    #[error("Alert publish failed: {0}")]
    Publish(#[from] PublishError),
}

// ---------------------------------------------------------------------------
// AlertDispatcher
// ---------------------------------------------------------------------------

/// Stateless per-event alert dispatcher.
///
/// Built once per process and shared across invocations. Holds only
/// immutable configuration and the injected publisher.
pub struct AlertDispatcher {
    publisher: Arc<dyn AlertPublisher>,
    destination: Option<String>,
    threshold: HeartRateThreshold,
}

impl AlertDispatcher {
    pub fn new(
        publisher: Arc<dyn AlertPublisher>,
        destination: Option<String>,
        threshold: HeartRateThreshold,
    ) -> Self {
        Self {
            publisher,
            destination,
            threshold,
        }
    }

    /// Build a dispatcher from loaded worker configuration.
    pub fn from_config(publisher: Arc<dyn AlertPublisher>, config: &WorkerConfig) -> Self {
        Self::new(publisher, config.topic_arn.clone(), config.threshold)
    }

    pub fn threshold(&self) -> HeartRateThreshold {
        self.threshold
    }

    /// Decide whether `event` warrants an alert, and build it if so.
    ///
    /// Returns `Ok(None)` when the reading is absent, zero, or not strictly
    /// above the threshold.
    pub fn evaluate(&self, event: &IncomingEvent) -> Result<Option<AlertMessage>, CoreError> {
        let Some(reading) = event.heart_rate()? else {
            tracing::debug!("No heart rate reading, nothing to do");
            return Ok(None);
        };

        if !self.threshold.is_exceeded_by(&reading) {
            tracing::debug!(
                heart_rate = %reading,
                threshold = self.threshold.bpm(),
                "Heart rate within threshold"
            );
            return Ok(None);
        }

        Ok(Some(AlertMessage::for_reading(&reading)))
    }

    /// Handle a single event.
    ///
    /// Publishes exactly one alert when the reading exceeds the threshold.
    /// Re-delivering the same event publishes again.
    pub async fn handle(&self, event: &IncomingEvent) -> Result<HandlerResult, DispatchError> {
        let summary = event.summary();
        tracing::debug!(
            event_id = summary.id,
            source = summary.source,
            detail_type = summary.detail_type,
            "Handling event"
        );

        if let Some(alert) = self.evaluate(event)? {
            let Some(destination) = self.destination.as_deref() else {
                tracing::warn!(body = %alert.body, "Alert due but no destination configured");
                return Err(DispatchError::MissingDestination);
            };

            let receipt = self
                .publisher
                .publish(destination, &alert.body, alert.subject)
                .await?;

            tracing::info!(
                publisher = self.publisher.name(),
                destination,
                body = %alert.body,
                message_id = ?receipt.message_id,
                "Abnormal heart rate alert published"
            );
        }

        Ok(HandlerResult::processed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulsewatch_events::LogPublisher;
    use serde_json::json;

    fn dispatcher(threshold: f64) -> AlertDispatcher {
        AlertDispatcher::new(
            Arc::new(LogPublisher),
            None,
            HeartRateThreshold::new(threshold).unwrap(),
        )
    }

    #[test]
    fn evaluate_builds_alert_above_threshold() {
        let alert = dispatcher(100.0)
            .evaluate(&json!({"detail": {"heartRate": 120}}).into())
            .unwrap()
            .expect("alert expected");
        assert_eq!(alert.body, "Alert: Abnormal heart rate detected - 120 bpm.");
    }

    #[test]
    fn evaluate_skips_reading_at_threshold() {
        let result = dispatcher(100.0)
            .evaluate(&json!({"detail": {"heartRate": 100}}).into())
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn evaluate_respects_custom_threshold() {
        let d = dispatcher(130.0);
        assert!(d
            .evaluate(&json!({"detail": {"heartRate": 120}}).into())
            .unwrap()
            .is_none());
        assert!(d
            .evaluate(&json!({"detail": {"heartRate": 131}}).into())
            .unwrap()
            .is_some());
    }

    #[test]
    fn dispatch_error_display() {
        assert_eq!(
            DispatchError::MissingDestination.to_string(),
            "No alert destination configured (SNS_TOPIC_ARN is unset)"
        );
        assert_eq!(
            DispatchError::from(CoreError::MissingDetail).to_string(),
            "Malformed event: missing 'detail'"
        );
    }
}
