//! Abnormal heart-rate alert message.

use serde::Serialize;

use crate::event::HeartRateReading;

/// Subject line of every heart-rate alert.
pub const ALERT_SUBJECT: &str = "Abnormal Heart Rate Alert";

/// A formatted alert ready to publish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertMessage {
    pub subject: &'static str,
    pub body: String,
}

impl AlertMessage {
    /// Build the alert for a reading that crossed the threshold.
    pub fn for_reading(reading: &HeartRateReading) -> Self {
        Self {
            subject: ALERT_SUBJECT,
            body: format!("Alert: Abnormal heart rate detected - {reading} bpm."),
        }
    }
}
