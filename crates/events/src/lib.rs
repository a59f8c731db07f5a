//! Outbound alert delivery for the heart-rate dispatcher.
//!
//! - [`AlertPublisher`] — the narrow publish seam the dispatcher depends on.
//! - [`SnsPublisher`] — delivery to an Amazon SNS topic.
//! - [`LogPublisher`] — dry-run delivery to the log.

pub mod delivery;
pub mod publisher;

pub use delivery::log::LogPublisher;
pub use delivery::sns::SnsPublisher;
pub use publisher::{AlertPublisher, PublishError, PublishReceipt};
