//! `pulsewatch-worker` -- heart-rate alert function.
//!
//! Runs under the AWS Lambda runtime. Each invocation carries one event;
//! readings above the threshold are published to an SNS topic.
//!
//! # Environment variables
//!
//! | Variable              | Required | Default | Description                                        |
//! |-----------------------|----------|---------|----------------------------------------------------|
//! | `SNS_TOPIC_ARN`       | no       | --      | Alert topic. Absence fails only when publishing.   |
//! | `ALERT_THRESHOLD_BPM` | no       | `100`   | Alert when the reading is strictly above           |
//! | `ALERT_DRY_RUN`       | no       | `false` | `true`/`1`/`yes`/`on` logs alerts instead          |
//! | `LOG_FORMAT`          | no       | `text`  | `json` for JSON log lines                          |
//! | `RUST_LOG`            | no       | `pulsewatch_worker=info,pulsewatch_events=info` | Tracing filter |

use std::sync::Arc;

use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;

use pulsewatch_events::{AlertPublisher, LogPublisher, SnsPublisher};
use pulsewatch_worker::config::{LogFormat, WorkerConfig};
use pulsewatch_worker::dispatcher::AlertDispatcher;
use pulsewatch_worker::{lambda, telemetry};

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    dotenvy::dotenv().ok();

    telemetry::init_tracing(LogFormat::from_env());

    let config = WorkerConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid worker configuration");
        std::process::exit(1);
    });

    if config.topic_arn.is_none() {
        tracing::warn!("SNS_TOPIC_ARN is not set; alerts will fail when published");
    }

    // --- Publisher ---
    let publisher: Arc<dyn AlertPublisher> = if config.dry_run {
        Arc::new(LogPublisher)
    } else {
        let sdk_config = aws_config::load_from_env().await;
        Arc::new(SnsPublisher::from_sdk_config(&sdk_config))
    };

    tracing::info!(
        publisher = publisher.name(),
        threshold_bpm = config.threshold.bpm(),
        "Starting pulsewatch-worker",
    );

    let dispatcher = Arc::new(AlertDispatcher::from_config(publisher, &config));

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let dispatcher = Arc::clone(&dispatcher);
        async move { lambda::handle_invocation(&dispatcher, event).await }
    }))
    .await
}
