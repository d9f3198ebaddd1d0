//! OTLP export pipeline construction: logs, traces, and metrics.
//!
//! Each pipeline is the same three-stage chain with kind-specific types: a
//! tonic OTLP exporter, wrapped by a batching (or periodic) processor, owned
//! by a provider bound to the shared service [`Resource`]. Endpoint
//! configuration is ambient — the exporter reads
//! `OTEL_EXPORTER_OTLP_ENDPOINT` itself — and batching thresholds, timeouts,
//! and retry policy all belong to the SDK components, not to this crate.
//!
//! All three builders require a running Tokio runtime, since the batch
//! processors spawn their flush tasks onto it.

use std::time::Duration;

use opentelemetry::logs::LogError;
use opentelemetry::metrics::MetricsError;
use opentelemetry::trace::TraceError;
use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_sdk::logs::LoggerProvider;
use opentelemetry_sdk::metrics::SdkMeterProvider;
use opentelemetry_sdk::{runtime, Resource};

/// Fixed export interval for the periodic metric reader.
pub const METRIC_EXPORT_INTERVAL: Duration = Duration::from_millis(15_000);

/// Bridge layer type feeding `tracing` events into the OTLP log pipeline.
pub type LogBridge = OpenTelemetryTracingBridge<LoggerProvider, opentelemetry_sdk::logs::Logger>;

/// Build the log export pipeline.
///
/// Chain: OTLP log exporter → batch log processor → [`LoggerProvider`] bound
/// to `resource`. Returns the provider (for shutdown) together with the
/// bridge layer that routes every front-end log record into it.
///
/// # Errors
///
/// Returns an error if the exporter cannot be constructed.
pub fn log_pipeline(resource: Resource) -> Result<(LoggerProvider, LogBridge), LogError> {
    let provider = opentelemetry_otlp::new_pipeline()
        .logging()
        .with_log_config(opentelemetry_sdk::logs::Config::default().with_resource(resource))
        .with_exporter(opentelemetry_otlp::new_exporter().tonic())
        .install_batch(runtime::Tokio)?;

    let bridge = OpenTelemetryTracingBridge::new(&provider);
    Ok((provider, bridge))
}

/// Build the trace export pipeline and register it as the process-wide
/// default tracer provider.
///
/// Chain: OTLP span exporter → batch span processor → tracer provider bound
/// to `resource`. Returns a tracer for the `tracing-opentelemetry` layer.
///
/// # Errors
///
/// Returns an error if the exporter or pipeline cannot be constructed.
pub fn trace_pipeline(resource: Resource) -> Result<opentelemetry_sdk::trace::Tracer, TraceError> {
    opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(opentelemetry_otlp::new_exporter().tonic())
        .with_trace_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .install_batch(runtime::Tokio)
}

/// Build the metric export pipeline and register it as the process-wide
/// default meter provider.
///
/// Chain: OTLP metric exporter → periodic reader flushing every
/// [`METRIC_EXPORT_INTERVAL`] → [`SdkMeterProvider`] bound to `resource`.
///
/// # Errors
///
/// Returns an error if the exporter or pipeline cannot be constructed.
pub fn metric_pipeline(resource: Resource) -> Result<SdkMeterProvider, MetricsError> {
    opentelemetry_otlp::new_pipeline()
        .metrics(runtime::Tokio)
        .with_exporter(opentelemetry_otlp::new_exporter().tonic())
        .with_resource(resource)
        .with_period(METRIC_EXPORT_INTERVAL)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_interval_is_fifteen_seconds() {
        assert_eq!(METRIC_EXPORT_INTERVAL, Duration::from_millis(15_000));
    }
}
