//! Integration port — lifecycle and service-call handling for device
//! integrations.
//!
//! An integration bridges a vendor's devices into the hub. It discovers
//! entities at startup and handles service calls directed at entities it
//! owns. The host drives the lifecycle in order: [`setup`](Integration::setup),
//! then property reads and [`handle_service_call`](Integration::handle_service_call)
//! while running, then [`teardown`](Integration::teardown) on shutdown.

use std::future::Future;

use nesthub_domain::entity::EntitySnapshot;
use nesthub_domain::error::NestHubError;
use nesthub_domain::id::DeviceId;

/// A pluggable device integration.
///
/// Entities are polled: the host must trigger a provider refresh before each
/// property-read cycle; integrations never push state.
pub trait Integration {
    /// Unique name identifying this integration (e.g. `"nest"`).
    fn name(&self) -> &'static str;

    /// Discover devices and construct one entity per identifier.
    ///
    /// Returns an initial snapshot of every discovered entity.
    fn setup(&mut self) -> impl Future<Output = Result<Vec<EntitySnapshot>, NestHubError>> + Send;

    /// Handle a service call (e.g. `set_temperature`) for an entity owned by
    /// this integration.
    ///
    /// Returns the entity's snapshot after handling the call.
    fn handle_service_call(
        &self,
        unique_id: &DeviceId,
        service: &str,
        data: serde_json::Value,
    ) -> impl Future<Output = Result<EntitySnapshot, NestHubError>> + Send;

    /// Called on graceful shutdown. Clean up any resources.
    fn teardown(&mut self) -> impl Future<Output = Result<(), NestHubError>> + Send;
}
