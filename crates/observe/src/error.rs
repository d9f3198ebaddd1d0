//! Bootstrap error type.

use thiserror::Error;

/// Errors raised while bootstrapping the observability stack.
///
/// Every variant is fatal to the bootstrap: nothing here is retried, and a
/// partially initialised pipeline is not torn back down. Callers are expected
/// to treat a failed [`init`](crate::init()) as a failed process start.
#[derive(Debug, Error)]
pub enum ObserveError {
    /// The ambient environment could not be read or deserialised into an
    /// [`Identity`](crate::Identity).
    #[error("failed to resolve service identity: {0}")]
    Config(#[from] config::ConfigError),

    /// An identity field resolved to an unusable value.
    #[error("invalid service identity: {0}")]
    InvalidIdentity(String),

    /// The OTLP trace pipeline could not be installed.
    #[error("failed to install OTLP trace pipeline: {0}")]
    Trace(#[from] opentelemetry::trace::TraceError),

    /// The OTLP metric pipeline could not be installed.
    #[error("failed to install OTLP metric pipeline: {0}")]
    Metrics(#[from] opentelemetry::metrics::MetricsError),

    /// The OTLP log pipeline could not be installed, or failed to flush on
    /// shutdown.
    #[error("failed to install OTLP log pipeline: {0}")]
    Logs(#[from] opentelemetry::logs::LogError),

    /// The global `tracing` subscriber slot is already claimed by a
    /// subscriber this crate did not install.
    #[error("failed to initialise tracing subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),

    /// The installed sink stack could not be swapped for a new one.
    #[error("failed to replace the active sink stack: {0}")]
    Reload(#[from] tracing_subscriber::reload::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_cause() {
        let e = ObserveError::InvalidIdentity("SERVICE_NAME is empty".into());
        assert!(e.to_string().contains("SERVICE_NAME is empty"));
    }
}
