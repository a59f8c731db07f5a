//! Concrete alert delivery channels.
//!
//! [`sns`] is the production channel; [`log`] is the dry-run sink.

pub mod log;
pub mod sns;
