//! Temperature-sensor entity backed by a Nest remote sensor.

use std::sync::Arc;

use nesthub_app::ports::DeviceDataProvider;
use nesthub_domain::entity::{AttributeValue, EntitySnapshot};
use nesthub_domain::error::{NotFoundError, ProviderError};
use nesthub_domain::id::DeviceId;
use nesthub_domain::record::DeviceRecord;
use nesthub_domain::temperature::TemperatureUnit;

/// A Nest temperature sensor exposed as a read-only sensor entity.
///
/// Sensors take no commands; they only report the current reading in the
/// configured display unit.
pub struct NestTemperatureSensor<P> {
    device_id: DeviceId,
    provider: Arc<P>,
    unit: TemperatureUnit,
}

impl<P: DeviceDataProvider> NestTemperatureSensor<P> {
    #[must_use]
    pub fn new(device_id: DeviceId, provider: Arc<P>) -> Self {
        Self {
            device_id,
            provider,
            unit: TemperatureUnit::Fahrenheit,
        }
    }

    fn record(&self) -> Result<DeviceRecord, NotFoundError> {
        self.provider
            .device(&self.device_id)
            .ok_or_else(|| NotFoundError::device("sensor", &self.device_id))
    }

    /// Stable identifier for the host platform.
    #[must_use]
    pub fn unique_id(&self) -> &DeviceId {
        &self.device_id
    }

    /// The host must refresh the provider before each property-read cycle.
    #[must_use]
    pub fn should_poll(&self) -> bool {
        true
    }

    /// Human-readable label from the device record.
    pub fn name(&self) -> Result<String, NotFoundError> {
        Ok(self.record()?.name)
    }

    /// Current reading in the display unit.
    pub fn state(&self) -> Result<Option<f64>, NotFoundError> {
        let record = self.record()?;
        Ok(record
            .current_temperature
            .map(|celsius| self.unit.from_celsius(celsius)))
    }

    /// Display unit of the reading.
    #[must_use]
    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Sensor device class for the host platform.
    #[must_use]
    pub fn device_class(&self) -> &'static str {
        "temperature"
    }

    /// Render the property set for the host platform.
    pub fn snapshot(&self) -> Result<EntitySnapshot, NotFoundError> {
        let state = match self.state()? {
            Some(reading) => format!("{reading:.1}"),
            None => "unknown".to_string(),
        };
        Ok(EntitySnapshot::new(self.device_id.clone(), self.name()?, state)
            .with_attribute(
                "unit_of_measurement",
                AttributeValue::String(self.unit.symbol().to_string()),
            )
            .with_attribute(
                "device_class",
                AttributeValue::String(self.device_class().to_string()),
            ))
    }

    /// Refresh all device state through the provider.
    pub async fn refresh(&self) -> Result<(), ProviderError> {
        self.provider.refresh().await
    }
}
