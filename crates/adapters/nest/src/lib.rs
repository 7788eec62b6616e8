//! # nesthub-adapter-nest
//!
//! Nest integration — exposes the vendor's devices as hub entities.
//!
//! ## Provided entities
//!
//! | Device kind | Entity | Surface |
//! |-------------|--------|---------|
//! | Thermostat | [`NestThermostat`] | climate properties + five command verbs |
//! | Temperature sensor | [`NestTemperatureSensor`] | read-only reading |
//!
//! Entity state is polled: the host refreshes the provider, then reads
//! properties; commands are dispatched as service calls through the
//! [`Integration`] port.
//!
//! ## Dependency rule
//!
//! Depends on `nesthub-app` (port traits) and `nesthub-domain` only.

pub mod climate;
pub mod sensor;

pub use climate::{NestThermostat, SetTemperature};
pub use sensor::NestTemperatureSensor;

use std::sync::Arc;

use serde::Deserialize;

use nesthub_app::ports::{DeviceDataProvider, Integration};
use nesthub_domain::climate::{FanMode, HvacMode, PresetMode};
use nesthub_domain::entity::EntitySnapshot;
use nesthub_domain::error::{NestHubError, NotFoundError, ProviderError, TranslationError};
use nesthub_domain::id::DeviceId;

#[derive(Debug, Deserialize)]
struct SetHumidity {
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct SetHvacMode {
    hvac_mode: String,
}

#[derive(Debug, Deserialize)]
struct SetFanMode {
    fan_mode: String,
}

#[derive(Debug, Deserialize)]
struct SetPresetMode {
    preset_mode: String,
}

/// The Nest integration: one entity per device id the provider knows.
pub struct NestIntegration<P> {
    provider: Arc<P>,
    thermostats: Vec<NestThermostat<P>>,
    sensors: Vec<NestTemperatureSensor<P>>,
}

impl<P: DeviceDataProvider> NestIntegration<P> {
    /// Create the integration with no entities; [`Integration::setup`]
    /// populates them from the provider's device listing.
    #[must_use]
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            provider,
            thermostats: Vec::new(),
            sensors: Vec::new(),
        }
    }

    /// Thermostat entities discovered at setup.
    #[must_use]
    pub fn thermostats(&self) -> &[NestThermostat<P>] {
        &self.thermostats
    }

    /// Sensor entities discovered at setup.
    #[must_use]
    pub fn sensors(&self) -> &[NestTemperatureSensor<P>] {
        &self.sensors
    }

    /// Provider-wide refresh, invoked by the host before each read cycle.
    ///
    /// # Errors
    ///
    /// Propagates the provider's transport error unchanged.
    pub async fn refresh(&self) -> Result<(), ProviderError> {
        self.provider.refresh().await
    }

    fn thermostat(&self, unique_id: &DeviceId) -> Result<&NestThermostat<P>, NotFoundError> {
        self.thermostats
            .iter()
            .find(|entity| entity.unique_id() == unique_id)
            .ok_or_else(|| NotFoundError::device("thermostat", unique_id))
    }
}

impl<P: DeviceDataProvider> Integration for NestIntegration<P> {
    fn name(&self) -> &'static str {
        "nest"
    }

    async fn setup(&mut self) -> Result<Vec<EntitySnapshot>, NestHubError> {
        tracing::info!("adding thermostats");
        for id in self.provider.thermostats() {
            tracing::info!(device = %id, "adding nest thermostat");
            self.thermostats
                .push(NestThermostat::new(id, Arc::clone(&self.provider))?);
        }

        tracing::info!("adding sensors");
        for id in self.provider.sensors() {
            tracing::info!(device = %id, "adding nest sensor");
            self.sensors
                .push(NestTemperatureSensor::new(id, Arc::clone(&self.provider)));
        }

        let mut snapshots = Vec::with_capacity(self.thermostats.len() + self.sensors.len());
        for entity in &self.thermostats {
            snapshots.push(entity.snapshot()?);
        }
        for entity in &self.sensors {
            snapshots.push(entity.snapshot()?);
        }
        Ok(snapshots)
    }

    async fn handle_service_call(
        &self,
        unique_id: &DeviceId,
        service: &str,
        data: serde_json::Value,
    ) -> Result<EntitySnapshot, NestHubError> {
        let thermostat = self.thermostat(unique_id)?;

        match service {
            "set_temperature" => {
                let request: SetTemperature = serde_json::from_value(data)?;
                thermostat.set_temperature(request).await?;
            }
            "set_humidity" => {
                let request: SetHumidity = serde_json::from_value(data)?;
                thermostat.set_humidity(request.humidity).await?;
            }
            "set_hvac_mode" => {
                let request: SetHvacMode = serde_json::from_value(data)?;
                let mode: HvacMode = request.hvac_mode.parse()?;
                thermostat.set_hvac_mode(mode).await?;
            }
            "set_fan_mode" => {
                let request: SetFanMode = serde_json::from_value(data)?;
                thermostat
                    .set_fan_mode(FanMode::from_platform(&request.fan_mode))
                    .await?;
            }
            "set_preset_mode" => {
                let request: SetPresetMode = serde_json::from_value(data)?;
                thermostat
                    .set_preset_mode(PresetMode::from_platform(&request.preset_mode))
                    .await?;
            }
            other => {
                return Err(TranslationError::UnknownService(other.to_string()).into());
            }
        }

        Ok(thermostat.snapshot()?)
    }

    async fn teardown(&mut self) -> Result<(), NestHubError> {
        self.thermostats.clear();
        self.sensors.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nesthub_adapter_virtual::{ProviderCall, VirtualProvider};
    use nesthub_domain::record::{Capabilities, DeviceRecord};

    fn seeded_provider() -> Arc<VirtualProvider> {
        let mut thermostat = DeviceRecord::new(
            "Living Room",
            Capabilities {
                can_heat: true,
                can_cool: true,
                has_fan: true,
            },
        );
        thermostat.mode = Some("heat".to_string());
        thermostat.current_temperature = Some(21.0);

        let mut sensor = DeviceRecord::new("Bedroom", Capabilities::default());
        sensor.current_temperature = Some(18.5);

        Arc::new(
            VirtualProvider::new()
                .with_thermostat(DeviceId::from("t1"), thermostat)
                .with_sensor(DeviceId::from("s1"), sensor),
        )
    }

    async fn ready_integration() -> NestIntegration<VirtualProvider> {
        let mut integration = NestIntegration::new(seeded_provider());
        integration.setup().await.unwrap();
        integration
    }

    #[tokio::test]
    async fn should_discover_one_entity_per_device_on_setup() {
        let mut integration = NestIntegration::new(seeded_provider());
        let snapshots = integration.setup().await.unwrap();

        assert_eq!(snapshots.len(), 2);
        assert_eq!(integration.thermostats().len(), 1);
        assert_eq!(integration.sensors().len(), 1);
        assert_eq!(snapshots[0].unique_id, DeviceId::from("t1"));
        assert_eq!(snapshots[1].unique_id, DeviceId::from("s1"));
    }

    #[tokio::test]
    async fn should_return_nest_as_name() {
        let integration = NestIntegration::new(seeded_provider());
        assert_eq!(integration.name(), "nest");
    }

    #[tokio::test]
    async fn should_dispatch_hvac_mode_service_and_return_new_snapshot() {
        let integration = ready_integration().await;

        let snapshot = integration
            .handle_service_call(
                &DeviceId::from("t1"),
                "set_hvac_mode",
                serde_json::json!({"hvac_mode": "cool"}),
            )
            .await
            .unwrap();

        assert_eq!(snapshot.state, "cool");
    }

    #[tokio::test]
    async fn should_reject_unknown_hvac_mode_string() {
        let integration = ready_integration().await;

        let result = integration
            .handle_service_call(
                &DeviceId::from("t1"),
                "set_hvac_mode",
                serde_json::json!({"hvac_mode": "dry"}),
            )
            .await;

        assert!(matches!(result, Err(NestHubError::Translation(_))));
    }

    #[tokio::test]
    async fn should_reject_unknown_service() {
        let integration = ready_integration().await;

        let result = integration
            .handle_service_call(&DeviceId::from("t1"), "defrost", serde_json::json!({}))
            .await;

        assert!(matches!(
            result,
            Err(NestHubError::Translation(TranslationError::UnknownService(_)))
        ));
    }

    #[tokio::test]
    async fn should_reject_service_calls_for_unknown_entities() {
        let integration = ready_integration().await;

        let result = integration
            .handle_service_call(
                &DeviceId::from("s1"),
                "set_hvac_mode",
                serde_json::json!({"hvac_mode": "off"}),
            )
            .await;

        assert!(matches!(result, Err(NestHubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_treat_empty_set_temperature_payload_as_no_op() {
        let provider = seeded_provider();
        let mut integration = NestIntegration::new(Arc::clone(&provider));
        integration.setup().await.unwrap();

        integration
            .handle_service_call(
                &DeviceId::from("t1"),
                "set_temperature",
                serde_json::json!({}),
            )
            .await
            .unwrap();

        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn should_round_humidity_through_the_service_layer() {
        let provider = seeded_provider();
        let mut integration = NestIntegration::new(Arc::clone(&provider));
        integration.setup().await.unwrap();

        integration
            .handle_service_call(
                &DeviceId::from("t1"),
                "set_humidity",
                serde_json::json!({"humidity": 42}),
            )
            .await
            .unwrap();

        assert_eq!(
            provider.calls(),
            vec![ProviderCall::SetTargetHumidity {
                id: DeviceId::from("t1"),
                percent: 40
            }]
        );
    }

    #[tokio::test]
    async fn should_clear_entities_on_teardown() {
        let mut integration = ready_integration().await;
        integration.teardown().await.unwrap();
        assert!(integration.thermostats().is_empty());
        assert!(integration.sensors().is_empty());
    }
}
