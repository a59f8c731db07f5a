//! Inbound event model and heart-rate extraction.
//!
//! [`IncomingEvent`] wraps the raw JSON record delivered by the event source.
//! Only `detail.heartRate` is consumed; the EventBridge envelope fields
//! (`id`, `source`, `detail-type`) are surfaced for log context when present.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::CoreError;

/// Key of the nested mapping carrying the measurement.
pub const DETAIL_KEY: &str = "detail";

/// Key of the heart-rate attribute inside `detail`.
pub const HEART_RATE_KEY: &str = "heartRate";

// ---------------------------------------------------------------------------
// HeartRateReading
// ---------------------------------------------------------------------------

/// A numeric heart-rate reading in beats per minute.
///
/// Keeps the JSON number as received so that alert text renders it exactly
/// (`120` stays `120`, `120.5` stays `120.5`).
#[derive(Debug, Clone, PartialEq)]
pub struct HeartRateReading {
    raw: Number,
    bpm: f64,
}

impl HeartRateReading {
    /// Build a reading from a JSON number.
    pub fn from_number(raw: Number) -> Result<Self, CoreError> {
        let bpm = raw
            .as_f64()
            .filter(|v| v.is_finite())
            .ok_or_else(|| CoreError::InvalidReading(format!("{raw} is not representable")))?;
        Ok(Self { raw, bpm })
    }

    /// The reading as a float, for comparisons.
    pub fn bpm(&self) -> f64 {
        self.bpm
    }
}

impl fmt::Display for HeartRateReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

// ---------------------------------------------------------------------------
// IncomingEvent
// ---------------------------------------------------------------------------

/// An event record as delivered by the invoking runtime.
///
/// The record is opaque apart from `detail.heartRate`; extra fields are
/// carried along untouched and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncomingEvent(Value);

impl IncomingEvent {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the raw JSON record.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Extract the heart-rate reading from `detail.heartRate`.
    ///
    /// - A missing `detail` key is a [`CoreError::MissingDetail`].
    /// - A `detail` that is not an object is a [`CoreError::MalformedDetail`].
    /// - An absent or `null` `heartRate` yields `Ok(None)`.
    /// - A `heartRate` of exactly zero also yields `Ok(None)`: zero is treated
    ///   as "no reading", indistinguishable from absent.
    /// - Booleans and empty strings, arrays, or objects also yield `Ok(None)`:
    ///   none of them is a reading.
    /// - A non-empty string, array, or object is a [`CoreError::InvalidReading`].
    pub fn heart_rate(&self) -> Result<Option<HeartRateReading>, CoreError> {
        let detail = self
            .0
            .get(DETAIL_KEY)
            .ok_or(CoreError::MissingDetail)?
            .as_object()
            .ok_or(CoreError::MalformedDetail)?;

        match detail.get(HEART_RATE_KEY) {
            None | Some(Value::Null) | Some(Value::Bool(_)) => Ok(None),
            Some(Value::Number(n)) => {
                let reading = HeartRateReading::from_number(n.clone())?;
                if reading.bpm() == 0.0 {
                    Ok(None)
                } else {
                    Ok(Some(reading))
                }
            }
            Some(Value::String(s)) if s.is_empty() => Ok(None),
            Some(Value::Array(a)) if a.is_empty() => Ok(None),
            Some(Value::Object(o)) if o.is_empty() => Ok(None),
            Some(other) => Err(CoreError::InvalidReading(format!(
                "expected a number, got {other}"
            ))),
        }
    }

    /// Envelope fields useful for log context. All optional.
    pub fn summary(&self) -> EventSummary<'_> {
        let field = |key: &str| self.0.get(key).and_then(Value::as_str);
        EventSummary {
            id: field("id"),
            source: field("source"),
            detail_type: field("detail-type"),
        }
    }
}

impl From<Value> for IncomingEvent {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

/// Borrowed view of the envelope fields of an [`IncomingEvent`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventSummary<'a> {
    pub id: Option<&'a str>,
    pub source: Option<&'a str>,
    pub detail_type: Option<&'a str>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
