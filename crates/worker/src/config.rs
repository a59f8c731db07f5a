use pulsewatch_core::{CoreError, HeartRateThreshold};

/// Topic that receives alerts.
pub const ENV_TOPIC_ARN: &str = "SNS_TOPIC_ARN";

/// Override for the alert threshold, in bpm.
pub const ENV_THRESHOLD_BPM: &str = "ALERT_THRESHOLD_BPM";

/// When truthy, alerts are logged instead of published.
pub const ENV_DRY_RUN: &str = "ALERT_DRY_RUN";

/// `json` switches log output to JSON lines.
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// Error type for configuration failures detected at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("ALERT_THRESHOLD_BPM must be a number, got {0:?}")]
    ThresholdNotANumber(String),

    #[error("Invalid ALERT_THRESHOLD_BPM: {0}")]
    InvalidThreshold(#[from] CoreError),
}

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }

    pub fn from_env() -> Self {
        Self::parse(std::env::var(ENV_LOG_FORMAT).ok().as_deref())
    }
}

/// Worker configuration loaded once per process.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Destination topic ARN. Not validated here: a missing value only
    /// fails when an alert actually needs publishing.
    pub topic_arn: Option<String>,
    /// Threshold applied to every reading.
    pub threshold: HeartRateThreshold,
    /// Use the log-only publisher instead of SNS.
    pub dry_run: bool,
}

impl WorkerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var               | Default |
    /// |-----------------------|---------|
    /// | `SNS_TOPIC_ARN`       | unset   |
    /// | `ALERT_THRESHOLD_BPM` | `100`   |
    /// | `ALERT_DRY_RUN`       | `false` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let topic_arn = lookup(ENV_TOPIC_ARN)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let threshold = match lookup(ENV_THRESHOLD_BPM) {
            Some(raw) => {
                let bpm: f64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::ThresholdNotANumber(raw.clone()))?;
                HeartRateThreshold::new(bpm)?
            }
            None => HeartRateThreshold::default(),
        };

        let dry_run = lookup(ENV_DRY_RUN).is_some_and(|v| is_truthy(&v));

        Ok(Self {
            topic_arn,
            threshold,
            dry_run,
        })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
