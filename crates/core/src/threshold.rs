//! Heart-rate alert threshold.
//!
//! Readings strictly above the threshold trigger an alert; a reading equal
//! to the threshold does not.

use crate::error::CoreError;
use crate::event::HeartRateReading;

/// Default alert threshold in beats per minute.
pub const DEFAULT_THRESHOLD_BPM: f64 = 100.0;

/// Threshold applied to incoming readings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeartRateThreshold {
    bpm: f64,
}

impl HeartRateThreshold {
    /// Create a threshold, rejecting negative or non-finite values.
    pub fn new(bpm: f64) -> Result<Self, CoreError> {
        if !bpm.is_finite() || bpm < 0.0 {
            return Err(CoreError::Validation(format!(
                "heart rate threshold must be a finite, non-negative number, got {bpm}"
            )));
        }
        Ok(Self { bpm })
    }

    pub fn bpm(self) -> f64 {
        self.bpm
    }

    /// `true` when `reading` is strictly greater than the threshold.
    pub fn is_exceeded_by(self, reading: &HeartRateReading) -> bool {
        reading.bpm() > self.bpm
    }
}

impl Default for HeartRateThreshold {
    fn default() -> Self {
        Self {
            bpm: DEFAULT_THRESHOLD_BPM,
        }
    }
}
