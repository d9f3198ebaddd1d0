//! Process-startup observability bootstrap.
//!
//! Wires three concerns together under one service identity, in a fixed order:
//!
//! 1. A process-wide panic hook that records uncaught panics through the
//!    logging front-end before the default stderr report runs.
//! 2. The `tracing` front-end: an [`EnvFilter`]-gated sink stack containing a
//!    JSON console sink plus any caller-supplied sinks, installed behind a
//!    reload point so a later bootstrap call replaces the stack instead of
//!    accumulating onto it.
//! 3. Optionally, OTLP export pipelines for logs, traces, and metrics, each
//!    bound to the same OpenTelemetry [`Resource`] so every signal reports
//!    under the same identity.
//!
//! [`init()`] is intended to run exactly once, near process start, before any
//! worker threads exist. It returns an [`Observability`] guard that owns the
//! export pipelines; flushing and tearing them down is the caller's explicit
//! choice via [`Observability::shutdown`] (or implicitly on drop).
//!
//! ```no_run
//! # fn main() -> Result<(), observe::ObserveError> {
//! let mut obs = observe::init(observe::ObserveConfig::default())?;
//! tracing::info!("service starting");
//! // ... run the application ...
//! obs.shutdown()?;
//! # Ok(())
//! # }
//! ```
//!
//! [`EnvFilter`]: tracing_subscriber::EnvFilter
//! [`Resource`]: opentelemetry_sdk::Resource

pub mod config;
pub mod error;
pub mod export;
pub mod hook;
pub mod init;
pub mod resource;
pub mod subscriber;

pub use config::{Identity, ObserveConfig};
pub use error::ObserveError;
pub use init::{init, Observability};
pub use subscriber::SinkLayer;
