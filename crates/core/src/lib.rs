//! Domain types for the heart-rate alert dispatcher.
//!
//! Everything here is pure: event parsing, the threshold predicate, alert
//! formatting, and the fixed handler result. Delivery lives in
//! `pulsewatch-events`; orchestration lives in `pulsewatch-worker`.

pub mod alert;
pub mod error;
pub mod event;
pub mod response;
pub mod threshold;

pub use alert::{AlertMessage, ALERT_SUBJECT};
pub use error::CoreError;
pub use event::{EventSummary, HeartRateReading, IncomingEvent};
pub use response::HandlerResult;
pub use threshold::{HeartRateThreshold, DEFAULT_THRESHOLD_BPM};
