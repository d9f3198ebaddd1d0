//! OpenTelemetry resource descriptor construction.
//!
//! The resource is the identity every export pipeline reports under. It is
//! built once per bootstrap from a resolved [`Identity`] and cloned into the
//! log, trace, and metric pipelines, so the three signals correlate by the
//! same six attribute values.

use opentelemetry::KeyValue;
use opentelemetry_sdk::Resource;
use opentelemetry_semantic_conventions::resource as semconv;

use crate::config::Identity;

/// Build the service [`Resource`] from a resolved identity.
///
/// Maps the six identity values onto their semantic-convention attribute
/// keys. No detection or merging happens here; the resource carries exactly
/// these six attributes.
pub fn resource(identity: &Identity) -> Resource {
    Resource::new([
        KeyValue::new(semconv::DEPLOYMENT_ENVIRONMENT, identity.environment.clone()),
        KeyValue::new(semconv::HOST_NAME, identity.hostname.clone()),
        KeyValue::new(semconv::SERVICE_NAMESPACE, identity.service_namespace.clone()),
        KeyValue::new(semconv::SERVICE_NAME, identity.service_name.clone()),
        KeyValue::new(semconv::SERVICE_VERSION, identity.service_version.clone()),
        KeyValue::new(semconv::SERVICE_INSTANCE_ID, identity.service_instance.clone()),
    ])
}
