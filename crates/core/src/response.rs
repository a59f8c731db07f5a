//! Fixed acknowledgment returned to the invoking runtime.

use serde::{Deserialize, Serialize};

/// Status code reported for every successfully handled event.
pub const STATUS_OK: u16 = 200;

/// Body reported for every successfully handled event.
pub const PROCESSED_BODY: &str = "Event processed successfully.";

/// Result of handling one event.
///
/// Identical whether or not an alert was published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResult {
    pub status_code: u16,
    pub body: String,
}

impl HandlerResult {
    pub fn processed() -> Self {
        Self {
            status_code: STATUS_OK,
            body: PROCESSED_BODY.to_string(),
        }
    }
}
