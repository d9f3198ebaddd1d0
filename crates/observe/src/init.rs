//! Top-level bootstrap orchestration.
//!
//! Bootstrap sequence:
//! 1. Install the panic-recording hook.
//! 2. Resolve the service [`Identity`] and build the shared [`Resource`].
//! 3. Assemble the sink stack: severity filter, caller sinks, console sink,
//!    and — when export is enabled — the OTLP log bridge and trace layers.
//! 4. Apply the stack as the complete active sink set (forced reset).
//! 5. When export is enabled, register the metric pipeline.

use opentelemetry_sdk::logs::LoggerProvider;
use opentelemetry_sdk::metrics::SdkMeterProvider;
use opentelemetry_sdk::Resource;

use crate::config::{Identity, ObserveConfig};
use crate::error::ObserveError;
use crate::subscriber::SinkLayer;
use crate::{export, hook, resource, subscriber};

/// Bootstrap the process-wide observability state.
///
/// Intended to run exactly once, on one thread, before any other code logs
/// or records telemetry. Running it again is safe: the sink stack is
/// replaced wholesale (never accumulated), the panic hook stays as
/// installed, and — with export enabled — fresh pipelines are registered as
/// the new process-wide defaults while the previous guard keeps ownership
/// of the old ones. Whether to flush the old pipelines first is the
/// caller's explicit choice via [`Observability::shutdown`].
///
/// When `enable_otel` is set the call must be made within a Tokio runtime;
/// the batch processors spawn their flush tasks onto it.
///
/// # Errors
///
/// Returns an error if identity resolution fails, an export pipeline cannot
/// be constructed, or the global subscriber slot is claimed by a subscriber
/// this crate did not install. No partial state is rolled back on failure.
pub fn init(config: ObserveConfig) -> Result<Observability, ObserveError> {
    let ObserveConfig {
        layers,
        log_level,
        enable_otel,
    } = config;

    hook::install_panic_hook();

    let identity = Identity::from_env()?;
    let resource = resource::resource(&identity);

    let mut stack: Vec<SinkLayer> = Vec::with_capacity(layers.len() + 4);
    stack.push(Box::new(subscriber::severity_filter(&log_level)));
    stack.extend(layers);
    stack.push(Box::new(subscriber::console_layer()));

    if !enable_otel {
        subscriber::apply(stack)?;
        return Ok(Observability {
            resource,
            logger_provider: None,
            meter_provider: None,
            tracer_registered: false,
        });
    }

    // Pipelines are built in log → trace → metric order, all bound to the
    // same resource. The log bridge and trace layers join the sink stack so
    // they are installed in the same atomic swap as the console sink.
    let (logger_provider, bridge) = export::log_pipeline(resource.clone())?;
    stack.push(Box::new(bridge));

    let tracer = export::trace_pipeline(resource.clone())?;
    stack.push(Box::new(tracing_opentelemetry::layer().with_tracer(tracer)));

    subscriber::apply(stack)?;

    let meter_provider = export::metric_pipeline(resource.clone())?;

    Ok(Observability {
        resource,
        logger_provider: Some(logger_provider),
        meter_provider: Some(meter_provider),
        tracer_registered: true,
    })
}

/// Guard over the bootstrapped observability state.
///
/// Owns the export pipelines constructed by [`init`] and the resource they
/// report under. Dropping the guard performs a best-effort [`shutdown`];
/// call it explicitly to observe flush failures.
///
/// [`shutdown`]: Observability::shutdown
pub struct Observability {
    resource: Resource,
    logger_provider: Option<LoggerProvider>,
    meter_provider: Option<SdkMeterProvider>,
    tracer_registered: bool,
}

impl Observability {
    /// The resource descriptor shared by every export pipeline.
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Whether this guard owns live export pipelines.
    pub fn export_enabled(&self) -> bool {
        self.tracer_registered || self.logger_provider.is_some() || self.meter_provider.is_some()
    }

    /// Flush and tear down the export pipelines.
    ///
    /// Log pipeline: queued records are flushed; the processor itself stays
    /// alive because the bridge layer in the active sink stack keeps a clone
    /// of the provider, and is torn down with the process. Trace pipeline:
    /// the global tracer provider is replaced with the no-op implementation.
    /// Metric pipeline: the meter provider performs a final collect-and-export
    /// and shuts down.
    ///
    /// Idempotent: a second call (or the drop after a call) does nothing.
    ///
    /// # Errors
    ///
    /// All pipelines are torn down regardless; the first flush or shutdown
    /// failure is returned.
    pub fn shutdown(&mut self) -> Result<(), ObserveError> {
        let mut outcome: Result<(), ObserveError> = Ok(());

        if let Some(provider) = self.logger_provider.take() {
            for result in provider.force_flush() {
                if let Err(e) = result {
                    if outcome.is_ok() {
                        outcome = Err(e.into());
                    }
                }
            }
        }
        if self.tracer_registered {
            self.tracer_registered = false;
            opentelemetry::global::shutdown_tracer_provider();
        }
        if let Some(provider) = self.meter_provider.take() {
            if let Err(e) = provider.shutdown() {
                if outcome.is_ok() {
                    outcome = Err(e.into());
                }
            }
        }

        outcome
    }
}

impl Drop for Observability {
    fn drop(&mut self) {
        if self.export_enabled() {
            let _ = self.shutdown();
        }
    }
}
