//! Bootstrap configuration and service identity resolution.
//!
//! The caller-facing knobs ([`ObserveConfig`]) are deliberately small: extra
//! sinks, a default severity, and whether remote export is on. Everything
//! describing *who* is running — the [`Identity`] — is read from environment
//! variables at startup, with defaults for anything unset.

use serde::Deserialize;

use crate::error::ObserveError;
use crate::subscriber::SinkLayer;

/// Caller-supplied bootstrap configuration, applied once per [`init`] call.
///
/// [`init`]: crate::init()
pub struct ObserveConfig {
    /// Additional sink layers installed alongside the console sink.
    pub layers: Vec<SinkLayer>,

    /// Default minimum severity (e.g. `"info"`, `"debug"`). `RUST_LOG`
    /// overrides this when set.
    pub log_level: String,

    /// Build and register the OTLP log/trace/metric export pipelines.
    pub enable_otel: bool,
}

impl Default for ObserveConfig {
    fn default() -> Self {
        Self {
            layers: Vec::new(),
            log_level: "info".into(),
            enable_otel: false,
        }
    }
}

impl std::fmt::Debug for ObserveConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserveConfig")
            .field("layers", &self.layers.len())
            .field("log_level", &self.log_level)
            .field("enable_otel", &self.enable_otel)
            .finish()
    }
}

/// The six identity values attached to every emitted telemetry signal.
///
/// Resolved once per bootstrap from environment variables; all export
/// pipelines share the resource built from a single `Identity` value.
#[derive(Debug, Clone, Deserialize)]
pub struct Identity {
    /// Deployment environment (`ENVIRONMENT`, e.g. `"production"`).
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Host name (`HOSTNAME`).
    #[serde(default = "default_hostname")]
    pub hostname: String,

    /// Service namespace (`SERVICE_NAMESPACE`).
    #[serde(default = "default_service_namespace")]
    pub service_namespace: String,

    /// Service name (`SERVICE_NAME`).
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Service version (`SERVICE_VERSION`).
    #[serde(default = "default_service_version")]
    pub service_version: String,

    /// Service instance id (`SERVICE_INSTANCE`). A fresh UUID is generated
    /// when unset, so two instances of the same service stay distinguishable.
    #[serde(default = "default_service_instance")]
    pub service_instance: String,
}

fn default_environment() -> String {
    "development".into()
}
fn default_hostname() -> String {
    std::env::var("HOSTNAME").unwrap_or_else(|_| "localhost".into())
}
fn default_service_namespace() -> String {
    "default".into()
}
fn default_service_name() -> String {
    "unknown_service".into()
}
fn default_service_version() -> String {
    env!("CARGO_PKG_VERSION").into()
}
fn default_service_instance() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl Identity {
    /// Resolve the service identity from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment cannot be deserialised or any
    /// resolved field is empty. Identity failures abort the bootstrap.
    pub fn from_env() -> Result<Self, ObserveError> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        let identity: Identity = cfg.try_deserialize()?;
        identity.validate()?;
        Ok(identity)
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<(), ObserveError> {
        ensure_non_empty(&self.environment, "ENVIRONMENT")?;
        ensure_non_empty(&self.hostname, "HOSTNAME")?;
        ensure_non_empty(&self.service_namespace, "SERVICE_NAMESPACE")?;
        ensure_non_empty(&self.service_name, "SERVICE_NAME")?;
        ensure_non_empty(&self.service_version, "SERVICE_VERSION")?;
        ensure_non_empty(&self.service_instance, "SERVICE_INSTANCE")?;
        Ok(())
    }
}

fn ensure_non_empty(value: &str, name: &str) -> Result<(), ObserveError> {
    if value.trim().is_empty() {
        return Err(ObserveError::InvalidIdentity(format!(
            "{name} must not be empty"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            environment: default_environment(),
            hostname: "build-agent-7".into(),
            service_namespace: default_service_namespace(),
            service_name: "billing".into(),
            service_version: "1.4.2".into(),
            service_instance: default_service_instance(),
        }
    }

    #[test]
    fn defaults_are_correct() {
        assert_eq!(default_environment(), "development");
        assert_eq!(default_service_namespace(), "default");
        assert_eq!(default_service_name(), "unknown_service");
        assert!(!default_service_version().is_empty());
    }

    #[test]
    fn default_instance_ids_are_unique() {
        assert_ne!(default_service_instance(), default_service_instance());
    }

    #[test]
    fn validate_accepts_complete_identity() {
        assert!(identity().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_service_name() {
        let mut id = identity();
        id.service_name = "  ".into();
        let err = id.validate().unwrap_err();
        assert!(err.to_string().contains("SERVICE_NAME"));
    }

    #[test]
    fn validate_rejects_empty_environment() {
        let mut id = identity();
        id.environment = String::new();
        assert!(id.validate().is_err());
    }

    #[test]
    fn observe_config_defaults() {
        let cfg = ObserveConfig::default();
        assert!(cfg.layers.is_empty());
        assert_eq!(cfg.log_level, "info");
        assert!(!cfg.enable_otel);
    }
}
