//! Climate entity backed by a Nest thermostat.

use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;

use nesthub_app::ports::DeviceDataProvider;
use nesthub_domain::climate::{
    FanMode, HvacAction, HvacMode, PresetMode, SetpointExposure, ThermostatMode,
};
use nesthub_domain::entity::{AttributeValue, EntitySnapshot};
use nesthub_domain::error::{NestHubError, NotFoundError, ProviderError};
use nesthub_domain::humidity::{TARGET_HUMIDITY_MAX, TARGET_HUMIDITY_MIN, clamp_target_humidity};
use nesthub_domain::id::DeviceId;
use nesthub_domain::record::DeviceRecord;
use nesthub_domain::temperature::TemperatureUnit;

/// How long a forced fan run lasts, measured from the moment of the call.
const FAN_RUN_SECONDS: i64 = 30 * 60;

const PRESET_MODES: &[PresetMode] = &[PresetMode::None, PresetMode::Eco];
const FAN_MODES: &[FanMode] = &[FanMode::On, FanMode::Auto];

/// Arguments for a set-temperature call.
///
/// Every field is optional: which ones are required depends on the device's
/// current mode, and a call missing its required arguments is a silent no-op
/// rather than an error.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct SetTemperature {
    /// Single setpoint, display unit.
    #[serde(rename = "temperature")]
    pub target: Option<f64>,
    /// Range low bound, display unit.
    #[serde(rename = "target_temp_low")]
    pub low: Option<f64>,
    /// Range high bound, display unit.
    #[serde(rename = "target_temp_high")]
    pub high: Option<f64>,
}

/// A Nest thermostat exposed as a climate entity.
///
/// Holds only the device identifier, the display unit, and the mode list
/// derived from capability flags at construction. Every property read goes
/// back to the provider's current record; every command is a single
/// delegated provider call.
pub struct NestThermostat<P> {
    device_id: DeviceId,
    provider: Arc<P>,
    unit: TemperatureUnit,
    hvac_modes: Vec<HvacMode>,
}

impl<P: DeviceDataProvider> NestThermostat<P> {
    /// Build the entity and compute its fixed supported-mode list.
    ///
    /// Capability flags never change after discovery, so the list is ordered
    /// once here: auto first when the device both heats and cools, then
    /// heat, then cool, and always off last.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] when the provider has no record for the id.
    pub fn new(device_id: DeviceId, provider: Arc<P>) -> Result<Self, NotFoundError> {
        let record = provider
            .device(&device_id)
            .ok_or_else(|| NotFoundError::device("thermostat", &device_id))?;

        let capabilities = record.capabilities;
        let mut hvac_modes = Vec::new();
        if capabilities.can_heat && capabilities.can_cool {
            hvac_modes.push(HvacMode::Auto);
        }
        if capabilities.can_heat {
            hvac_modes.push(HvacMode::Heat);
        }
        if capabilities.can_cool {
            hvac_modes.push(HvacMode::Cool);
        }
        hvac_modes.push(HvacMode::Off);

        Ok(Self {
            device_id,
            provider,
            unit: TemperatureUnit::Fahrenheit,
            hvac_modes,
        })
    }

    fn record(&self) -> Result<DeviceRecord, NotFoundError> {
        self.provider
            .device(&self.device_id)
            .ok_or_else(|| NotFoundError::device("thermostat", &self.device_id))
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

    /// Display unit for every temperature this entity reports or accepts.
    #[must_use]
    pub fn temperature_unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Human-readable label from the device record.
    pub fn name(&self) -> Result<String, NotFoundError> {
        Ok(self.record()?.name)
    }

    /// Current ambient temperature in the display unit.
    pub fn current_temperature(&self) -> Result<Option<f64>, NotFoundError> {
        let record = self.record()?;
        Ok(record
            .current_temperature
            .map(|celsius| self.unit.from_celsius(celsius)))
    }

    /// Current relative humidity, percent.
    pub fn current_humidity(&self) -> Result<Option<u8>, NotFoundError> {
        Ok(self.record()?.current_humidity)
    }

    /// Target relative humidity, percent.
    pub fn target_humidity(&self) -> Result<Option<u8>, NotFoundError> {
        Ok(self.record()?.target_humidity)
    }

    /// Lowest accepted target humidity, regardless of device capability.
    #[must_use]
    pub fn min_humidity(&self) -> u8 {
        TARGET_HUMIDITY_MIN
    }

    /// Highest accepted target humidity, regardless of device capability.
    #[must_use]
    pub fn max_humidity(&self) -> u8 {
        TARGET_HUMIDITY_MAX
    }

    /// Single target setpoint in the display unit.
    ///
    /// Present only outside range mode with eco off; in range or eco state
    /// the entity has no single setpoint.
    pub fn target_temperature(&self) -> Result<Option<f64>, NotFoundError> {
        let record = self.record()?;
        Ok(match record.setpoint_exposure() {
            SetpointExposure::Single => record
                .target_temperature
                .map(|celsius| self.unit.from_celsius(celsius)),
            SetpointExposure::Range | SetpointExposure::Suppressed => None,
        })
    }

    /// Low bound of the range setpoint pair, display unit.
    pub fn target_temperature_low(&self) -> Result<Option<f64>, NotFoundError> {
        let record = self.record()?;
        Ok(match record.setpoint_exposure() {
            SetpointExposure::Range => record
                .target_temperature_low
                .map(|celsius| self.unit.from_celsius(celsius)),
            SetpointExposure::Single | SetpointExposure::Suppressed => None,
        })
    }

    /// High bound of the range setpoint pair, display unit.
    pub fn target_temperature_high(&self) -> Result<Option<f64>, NotFoundError> {
        let record = self.record()?;
        Ok(match record.setpoint_exposure() {
            SetpointExposure::Range => record
                .target_temperature_high
                .map(|celsius| self.unit.from_celsius(celsius)),
            SetpointExposure::Single | SetpointExposure::Suppressed => None,
        })
    }

    /// Instantaneous physical action, translated through the fixed table.
    ///
    /// # Errors
    ///
    /// An action string outside the vendor contract is a translation error,
    /// never a default.
    pub fn hvac_action(&self) -> Result<HvacAction, NestHubError> {
        let record = self.record()?;
        Ok(HvacAction::from_vendor(&record.action)?)
    }

    /// Configured operating mode as reported to the platform.
    ///
    /// When the record's mode is unset, or eco is active, this reports the
    /// first entry of the fixed supported-mode list — eco masks the
    /// underlying configured mode rather than mapping to a mode of its own.
    pub fn hvac_mode(&self) -> Result<HvacMode, NestHubError> {
        let record = self.record()?;
        let Some(raw) = record.mode.as_deref() else {
            return Ok(self.hvac_modes[0]);
        };
        if record.eco {
            return Ok(self.hvac_modes[0]);
        }
        let vendor = ThermostatMode::from_vendor(raw)?;
        Ok(HvacMode::from_vendor(vendor))
    }

    /// The fixed supported-mode list computed at construction.
    #[must_use]
    pub fn hvac_modes(&self) -> &[HvacMode] {
        &self.hvac_modes
    }

    /// Active preset: eco when the override is set, none otherwise.
    pub fn preset_mode(&self) -> Result<PresetMode, NotFoundError> {
        let record = self.record()?;
        Ok(if record.eco {
            PresetMode::Eco
        } else {
            PresetMode::None
        })
    }

    /// The fixed preset list.
    #[must_use]
    pub fn preset_modes(&self) -> &'static [PresetMode] {
        PRESET_MODES
    }

    /// Current fan mode, or `None` when the device has no fan.
    pub fn fan_mode(&self) -> Result<Option<FanMode>, NotFoundError> {
        let record = self.record()?;
        if !record.capabilities.has_fan {
            return Ok(None);
        }
        Ok(Some(if record.fan { FanMode::On } else { FanMode::Auto }))
    }

    /// Supported fan modes, or `None` when the device has no fan.
    pub fn fan_modes(&self) -> Result<Option<&'static [FanMode]>, NotFoundError> {
        let record = self.record()?;
        Ok(record.capabilities.has_fan.then_some(FAN_MODES))
    }

    /// Render the full property set for the host platform.
    pub fn snapshot(&self) -> Result<EntitySnapshot, NestHubError> {
        let snapshot = EntitySnapshot::new(
            self.device_id.clone(),
            self.name()?,
            self.hvac_mode()?.as_str(),
        )
        .with_attribute(
            "hvac_action",
            AttributeValue::String(self.hvac_action()?.as_str().to_string()),
        )
        .with_attribute(
            "preset_mode",
            AttributeValue::String(self.preset_mode()?.as_str().to_string()),
        )
        .with_attribute(
            "temperature_unit",
            AttributeValue::String(self.unit.symbol().to_string()),
        )
        .with_attribute("min_humidity", AttributeValue::Int(self.min_humidity().into()))
        .with_attribute("max_humidity", AttributeValue::Int(self.max_humidity().into()))
        .with_optional_attribute(
            "current_temperature",
            self.current_temperature()?.map(AttributeValue::Float),
        )
        .with_optional_attribute(
            "target_temperature",
            self.target_temperature()?.map(AttributeValue::Float),
        )
        .with_optional_attribute(
            "target_temp_low",
            self.target_temperature_low()?.map(AttributeValue::Float),
        )
        .with_optional_attribute(
            "target_temp_high",
            self.target_temperature_high()?.map(AttributeValue::Float),
        )
        .with_optional_attribute(
            "current_humidity",
            self.current_humidity()?
                .map(|percent| AttributeValue::Int(percent.into())),
        )
        .with_optional_attribute(
            "target_humidity",
            self.target_humidity()?
                .map(|percent| AttributeValue::Int(percent.into())),
        )
        .with_optional_attribute(
            "fan_mode",
            self.fan_mode()?
                .map(|mode| AttributeValue::String(mode.as_str().to_string())),
        );
        Ok(snapshot)
    }

    /// Set new target temperature(s).
    ///
    /// In range mode both bounds are required and forwarded as a pair;
    /// otherwise the single target is forwarded. Missing required arguments
    /// make the call a silent no-op — no provider call, no error.
    pub async fn set_temperature(&self, request: SetTemperature) -> Result<(), NestHubError> {
        let record = self.record()?;
        if record.is_range_mode() {
            if let (Some(low), Some(high)) = (request.low, request.high) {
                let low = self.unit.to_celsius(low);
                let high = self.unit.to_celsius(high);
                tracing::debug!(device = %self.device_id, low, high, "setting target range");
                self.provider
                    .set_target_temperature_range(&self.device_id, low, high)
                    .await?;
            }
        } else if let Some(target) = request.target {
            let celsius = self.unit.to_celsius(target);
            tracing::debug!(device = %self.device_id, celsius, "setting target temperature");
            self.provider
                .set_target_temperature(&self.device_id, celsius)
                .await?;
        }
        Ok(())
    }

    /// Set a new target humidity.
    ///
    /// The request is rounded to the nearest 5 % step and clamped into the
    /// supported range before it reaches the provider.
    pub async fn set_humidity(&self, requested: f64) -> Result<(), ProviderError> {
        let percent = clamp_target_humidity(requested);
        self.provider
            .set_target_humidity(&self.device_id, percent)
            .await
    }

    /// Set the operating mode.
    pub async fn set_hvac_mode(&self, mode: HvacMode) -> Result<(), ProviderError> {
        tracing::info!(device = %self.device_id, %mode, "setting hvac mode");
        self.provider
            .set_mode(&self.device_id, mode.to_vendor())
            .await
    }

    /// Turn the fan on for 30 minutes, or return it to automatic control.
    ///
    /// Silent no-op on devices without a fan. `On` sends an absolute
    /// epoch-seconds deadline; anything else sends `0`.
    pub async fn set_fan_mode(&self, mode: FanMode) -> Result<(), NestHubError> {
        let record = self.record()?;
        if !record.capabilities.has_fan {
            return Ok(());
        }
        let deadline = match mode {
            FanMode::On => Utc::now().timestamp() + FAN_RUN_SECONDS,
            FanMode::Auto => 0,
        };
        self.provider.set_fan(&self.device_id, deadline).await?;
        Ok(())
    }

    /// Enable or clear the eco override.
    ///
    /// Issues a provider call only when the requested state differs from the
    /// record's current eco flag.
    pub async fn set_preset_mode(&self, preset: PresetMode) -> Result<(), NestHubError> {
        let record = self.record()?;
        let eco = preset == PresetMode::Eco;
        if eco != record.eco {
            self.provider.set_eco(&self.device_id, eco).await?;
        }
        Ok(())
    }

    /// Refresh all device state through the provider.
    pub async fn refresh(&self) -> Result<(), ProviderError> {
        self.provider.refresh().await
    }
}
