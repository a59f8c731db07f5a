//! `pulsewatch-worker` library crate.
//!
//! Re-exports internal modules for integration testing. The binary
//! entrypoint lives in `main.rs`.

pub mod config;
pub mod dispatcher;
pub mod lambda;
pub mod telemetry;

pub use config::{ConfigError, LogFormat, WorkerConfig};
pub use dispatcher::{AlertDispatcher, DispatchError};
