//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into the umbrella
//! [`NestHubError`] via `#[from]`. No stringly-typed variants.

use crate::id::DeviceId;

/// Umbrella error carried across port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum NestHubError {
    /// A value had no entry in a fixed translation table.
    #[error("translation error")]
    Translation(#[from] TranslationError),

    /// A device id had no record in the provider snapshot.
    #[error("device not found")]
    NotFound(#[from] NotFoundError),

    /// The provider failed to reach or update the vendor cloud.
    #[error("provider error")]
    Provider(#[from] ProviderError),

    /// A service-call payload could not be deserialised.
    #[error("invalid service payload")]
    Payload(#[from] serde_json::Error),
}

/// A vendor or platform value reached a fixed translation table with no
/// matching entry.
///
/// The tables are exhaustive by contract, so this is always a contract
/// violation by the upstream data — it must surface loudly, never fall back
/// to a default.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslationError {
    /// The vendor reported a thermostat mode outside `range`/`heat`/`cool`/`off`.
    #[error("unknown vendor thermostat mode: {0:?}")]
    UnknownThermostatMode(String),

    /// The vendor reported an action outside `off`/`heating`/`cooling`.
    #[error("unknown vendor action: {0:?}")]
    UnknownAction(String),

    /// The platform requested an hvac mode outside the four known values.
    #[error("unknown hvac mode: {0:?}")]
    UnknownHvacMode(String),

    /// The platform invoked a service this integration does not provide.
    #[error("unknown service: {0:?}")]
    UnknownService(String),
}

/// Lookup failure for a device identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    /// What kind of thing was looked up (e.g. `"thermostat"`).
    pub entity: &'static str,
    /// The identifier that missed.
    pub id: String,
}

impl NotFoundError {
    /// Convenience constructor from a [`DeviceId`].
    #[must_use]
    pub fn device(entity: &'static str, id: &DeviceId) -> Self {
        Self {
            entity,
            id: id.to_string(),
        }
    }
}

/// Errors raised by provider implementations.
///
/// These are upstream/transport failures: entities propagate them unchanged
/// to the host platform and never retry.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider has no device with the given id.
    #[error("unknown device: {0}")]
    UnknownDevice(DeviceId),

    /// Transport failure talking to the vendor cloud.
    #[error("transport error")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}
