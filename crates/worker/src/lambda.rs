//! Adapter between the Lambda runtime and [`AlertDispatcher`].
//!
//! Errors are logged once here and handed back to the runtime, which reports
//! the invocation as failed and applies its own retry policy.

use lambda_runtime::LambdaEvent;
use pulsewatch_core::{HandlerResult, IncomingEvent};
use serde_json::Value;

use crate::dispatcher::AlertDispatcher;

/// Handle one Lambda invocation.
pub async fn handle_invocation(
    dispatcher: &AlertDispatcher,
    event: LambdaEvent<Value>,
) -> Result<HandlerResult, lambda_runtime::Error> {
    let LambdaEvent { payload, context } = event;
    let request_id = context.request_id;

    match dispatcher.handle(&IncomingEvent::new(payload)).await {
        Ok(result) => Ok(result),
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Event handling failed");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use lambda_runtime::Context;
    use pulsewatch_core::HeartRateThreshold;
    use pulsewatch_events::LogPublisher;
    use serde_json::json;

    use super::*;

    fn dispatcher(destination: Option<&str>) -> AlertDispatcher {
        AlertDispatcher::new(
            Arc::new(LogPublisher),
            destination.map(str::to_string),
            HeartRateThreshold::default(),
        )
    }

    #[tokio::test]
    async fn returns_fixed_result_on_success() {
        let event = LambdaEvent::new(json!({"detail": {"heartRate": 80}}), Context::default());
        let result = handle_invocation(&dispatcher(None), event).await.unwrap();
        assert_eq!(result, HandlerResult::processed());
    }

    #[tokio::test]
    async fn surfaces_malformed_event_as_function_error() {
        let event = LambdaEvent::new(json!({"heartRate": 150}), Context::default());
        let err = handle_invocation(&dispatcher(None), event).await.unwrap_err();
        assert_eq!(err.to_string(), "Malformed event: missing 'detail'");
    }

    #[tokio::test]
    async fn surfaces_missing_destination_as_function_error() {
        let event = LambdaEvent::new(json!({"detail": {"heartRate": 150}}), Context::default());
        let err = handle_invocation(&dispatcher(None), event).await.unwrap_err();
        assert!(err.to_string().contains("No alert destination configured"));
    }

    #[tokio::test]
    async fn publishes_through_configured_publisher() {
        let event = LambdaEvent::new(json!({"detail": {"heartRate": 150}}), Context::default());
        let result = handle_invocation(
            &dispatcher(Some("arn:aws:sns:us-east-1:123456789012:hr")),
            event,
        )
        .await
        .unwrap();
        assert_eq!(result.status_code, 200);
    }
}
