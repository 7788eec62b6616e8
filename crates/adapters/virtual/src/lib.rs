//! # nesthub-adapter-virtual
//!
//! In-memory [`DeviceDataProvider`] standing in for the vendor cloud.
//!
//! Backs the demo daemon and the test suites: records live in a map that
//! mutation calls update in place, and every accepted call is appended to a
//! log so tests can assert exactly which vendor operations were issued,
//! arguments included.
//!
//! ## Dependency rule
//!
//! Depends on `nesthub-app` (port traits) and `nesthub-domain` only.

use std::collections::HashMap;

use parking_lot::{Mutex, RwLock};

use nesthub_app::ports::DeviceDataProvider;
use nesthub_domain::climate::ThermostatMode;
use nesthub_domain::error::ProviderError;
use nesthub_domain::id::DeviceId;
use nesthub_domain::record::DeviceRecord;

/// One accepted provider operation, with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderCall {
    Refresh,
    SetTargetTemperature { id: DeviceId, celsius: f64 },
    SetTargetTemperatureRange { id: DeviceId, low: f64, high: f64 },
    SetTargetHumidity { id: DeviceId, percent: u8 },
    SetMode { id: DeviceId, mode: ThermostatMode },
    SetFan { id: DeviceId, deadline: i64 },
    SetEco { id: DeviceId, enabled: bool },
}

/// Simulated vendor cloud holding a seeded set of device records.
#[derive(Default)]
pub struct VirtualProvider {
    devices: RwLock<HashMap<DeviceId, DeviceRecord>>,
    thermostats: Vec<DeviceId>,
    sensors: Vec<DeviceId>,
    calls: Mutex<Vec<ProviderCall>>,
}

impl VirtualProvider {
    /// An empty provider with no devices.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a thermostat record.
    #[must_use]
    pub fn with_thermostat(mut self, id: DeviceId, record: DeviceRecord) -> Self {
        self.thermostats.push(id.clone());
        self.devices.get_mut().insert(id, record);
        self
    }

    /// Seed a temperature-sensor record.
    #[must_use]
    pub fn with_sensor(mut self, id: DeviceId, record: DeviceRecord) -> Self {
        self.sensors.push(id.clone());
        self.devices.get_mut().insert(id, record);
        self
    }

    /// Every call accepted so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<ProviderCall> {
        self.calls.lock().clone()
    }

    /// Mutate a record directly, simulating a cloud-side state change that
    /// the next refresh would surface.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::UnknownDevice`] when the id is not seeded.
    pub fn update_device(
        &self,
        id: &DeviceId,
        update: impl FnOnce(&mut DeviceRecord),
    ) -> Result<(), ProviderError> {
        let mut devices = self.devices.write();
        let record = devices
            .get_mut(id)
            .ok_or_else(|| ProviderError::UnknownDevice(id.clone()))?;
        update(record);
        Ok(())
    }

    fn apply(
        &self,
        id: &DeviceId,
        call: ProviderCall,
        update: impl FnOnce(&mut DeviceRecord),
    ) -> Result<(), ProviderError> {
        self.update_device(id, update)?;
        self.calls.lock().push(call);
        Ok(())
    }
}

impl DeviceDataProvider for VirtualProvider {
    fn thermostats(&self) -> Vec<DeviceId> {
        self.thermostats.clone()
    }

    fn sensors(&self) -> Vec<DeviceId> {
        self.sensors.clone()
    }

    fn device(&self, id: &DeviceId) -> Option<DeviceRecord> {
        self.devices.read().get(id).cloned()
    }

    async fn refresh(&self) -> Result<(), ProviderError> {
        // Records are already authoritative here; only the call is recorded.
        self.calls.lock().push(ProviderCall::Refresh);
        Ok(())
    }

    async fn set_target_temperature(
        &self,
        id: &DeviceId,
        celsius: f64,
    ) -> Result<(), ProviderError> {
        self.apply(
            id,
            ProviderCall::SetTargetTemperature {
                id: id.clone(),
                celsius,
            },
            |record| record.target_temperature = Some(celsius),
        )
    }

    async fn set_target_temperature_range(
        &self,
        id: &DeviceId,
        low: f64,
        high: f64,
    ) -> Result<(), ProviderError> {
        self.apply(
            id,
            ProviderCall::SetTargetTemperatureRange {
                id: id.clone(),
                low,
                high,
            },
            |record| {
                record.target_temperature_low = Some(low);
                record.target_temperature_high = Some(high);
            },
        )
    }

    async fn set_target_humidity(&self, id: &DeviceId, percent: u8) -> Result<(), ProviderError> {
        self.apply(
            id,
            ProviderCall::SetTargetHumidity {
                id: id.clone(),
                percent,
            },
            |record| record.target_humidity = Some(percent),
        )
    }

    async fn set_mode(&self, id: &DeviceId, mode: ThermostatMode) -> Result<(), ProviderError> {
        self.apply(
            id,
            ProviderCall::SetMode {
                id: id.clone(),
                mode,
            },
            |record| record.mode = Some(mode.as_vendor().to_string()),
        )
    }

    async fn set_fan(&self, id: &DeviceId, deadline: i64) -> Result<(), ProviderError> {
        self.apply(
            id,
            ProviderCall::SetFan {
                id: id.clone(),
                deadline,
            },
            |record| record.fan = deadline != 0,
        )
    }

    async fn set_eco(&self, id: &DeviceId, enabled: bool) -> Result<(), ProviderError> {
        self.apply(
            id,
            ProviderCall::SetEco {
                id: id.clone(),
                enabled,
            },
            |record| record.eco = enabled,
        )
    }
}
