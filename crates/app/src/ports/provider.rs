//! Provider port — the authoritative device-state store and vendor API.
//!
//! A provider owns a per-device state mapping mirrored from the vendor
//! cloud. It serialises its own refresh and mutation operations: once
//! `refresh()` resolves, snapshot reads observe a consistent view until the
//! next refresh. Entities delegate all I/O here and hold no locks of their
//! own.

use std::future::Future;

use nesthub_domain::climate::ThermostatMode;
use nesthub_domain::error::ProviderError;
use nesthub_domain::id::DeviceId;
use nesthub_domain::record::DeviceRecord;

/// Access to the vendor cloud's device data and mutation API.
///
/// Mutation methods issue a remote call and update the local record on
/// success. Transport failures propagate unchanged — retry policy, if any,
/// belongs to the implementation, never to the callers.
pub trait DeviceDataProvider: Send + Sync {
    /// Identifiers of every known thermostat.
    fn thermostats(&self) -> Vec<DeviceId>;

    /// Identifiers of every known temperature sensor.
    fn sensors(&self) -> Vec<DeviceId>;

    /// Snapshot of a single device record as of the last refresh.
    fn device(&self, id: &DeviceId) -> Option<DeviceRecord>;

    /// Fetch the latest state for **all** devices. Idempotent.
    fn refresh(&self) -> impl Future<Output = Result<(), ProviderError>> + Send;

    /// Set the single target temperature, Celsius.
    fn set_target_temperature(
        &self,
        id: &DeviceId,
        celsius: f64,
    ) -> impl Future<Output = Result<(), ProviderError>> + Send;

    /// Set the low/high target pair for range mode, Celsius.
    fn set_target_temperature_range(
        &self,
        id: &DeviceId,
        low: f64,
        high: f64,
    ) -> impl Future<Output = Result<(), ProviderError>> + Send;

    /// Set the target humidity percent. Callers round and clamp first.
    fn set_target_humidity(
        &self,
        id: &DeviceId,
        percent: u8,
    ) -> impl Future<Output = Result<(), ProviderError>> + Send;

    /// Set the operating mode.
    fn set_mode(
        &self,
        id: &DeviceId,
        mode: ThermostatMode,
    ) -> impl Future<Output = Result<(), ProviderError>> + Send;

    /// Run the fan until the given epoch-seconds deadline, or stop it when
    /// the deadline is `0`.
    fn set_fan(
        &self,
        id: &DeviceId,
        deadline: i64,
    ) -> impl Future<Output = Result<(), ProviderError>> + Send;

    /// Enable or disable the eco override.
    fn set_eco(
        &self,
        id: &DeviceId,
        enabled: bool,
    ) -> impl Future<Output = Result<(), ProviderError>> + Send;
}
