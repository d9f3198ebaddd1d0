//! The process-wide `tracing` front-end.
//!
//! The global subscriber is installed exactly once, as a [`Registry`] with a
//! single [`reload`] point wrapping the whole sink stack. Reconfiguring does
//! not touch the global subscriber slot again: it swaps the entire stack
//! through the retained reload handle, so a second bootstrap call replaces
//! the first call's sinks instead of accumulating onto them.
//!
//! The stack always starts with a severity filter and ends with one JSON
//! console sink; caller-supplied sinks and the export bridge layers sit in
//! between.

use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{reload, EnvFilter, Layer, Registry};

use crate::error::ObserveError;

/// A boxed sink layer, the unit callers supply extra sinks as.
pub type SinkLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// The full replaceable sink stack behind the reload point.
type SinkStack = Vec<SinkLayer>;

static SINKS: OnceLock<reload::Handle<SinkStack, Registry>> = OnceLock::new();

/// Severity filter for the stack: `RUST_LOG` when set, else the given level.
pub(crate) fn severity_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// The one console sink every bootstrap installs: structured JSON on stdout.
pub(crate) fn console_layer() -> impl Layer<Registry> + Send + Sync {
    tracing_subscriber::fmt::layer().json()
}

/// Install `stack` as the complete active sink set.
///
/// The first call claims the global subscriber slot; every later call is a
/// forced reset that discards the previously active stack and applies this
/// one. Not safe to race from multiple threads; bootstrap is expected to run
/// on one thread during process start.
///
/// # Errors
///
/// Returns an error if the global subscriber slot is already claimed by a
/// subscriber this crate did not install, or if the swap fails because the
/// subscriber has been dropped.
pub(crate) fn apply(stack: SinkStack) -> Result<(), ObserveError> {
    match SINKS.get() {
        Some(handle) => handle.reload(stack)?,
        None => {
            let (layer, handle) = reload::Layer::new(stack);
            tracing_subscriber::registry().with(layer).try_init()?;
            let _ = SINKS.set(handle);
        }
    }
    Ok(())
}
