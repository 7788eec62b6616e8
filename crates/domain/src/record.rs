//! Device record — the provider-owned raw state of one device.

use serde::{Deserialize, Serialize};

use crate::climate::{SetpointExposure, ThermostatMode};

/// Capability flags, fixed at discovery time.
///
/// These never change for the device's lifetime; entities derive their
/// advertised mode and fan-mode lists from them once, at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Capabilities {
    pub can_heat: bool,
    pub can_cool: bool,
    pub has_fan: bool,
}

/// Raw per-device state as mirrored from the vendor cloud.
///
/// Owned and mutated in place by the provider's refresh; entities only ever
/// read cloned snapshots. `mode` and `action` stay in wire form — the
/// translation tables in [`crate::climate`] give them types and reject
/// values outside the vendor contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Human-readable label.
    pub name: String,
    pub capabilities: Capabilities,
    /// Vendor mode string (`range`/`heat`/`cool`/`off`), absent when the
    /// device has not reported one.
    pub mode: Option<String>,
    /// Energy-saving override. When set it takes precedence over `mode` for
    /// both displayed mode and displayed setpoints.
    pub eco: bool,
    /// Celsius.
    pub current_temperature: Option<f64>,
    /// Celsius; meaningful outside `range` mode only.
    pub target_temperature: Option<f64>,
    /// Celsius; meaningful in `range` mode only.
    pub target_temperature_low: Option<f64>,
    /// Celsius; meaningful in `range` mode only.
    pub target_temperature_high: Option<f64>,
    /// Percent.
    pub current_humidity: Option<u8>,
    /// Percent; only meaningful for humidity-capable devices.
    pub target_humidity: Option<u8>,
    /// Vendor action string (`off`/`heating`/`cooling`).
    pub action: String,
    /// Current fan-on state.
    pub fan: bool,
}

impl DeviceRecord {
    /// A freshly discovered device: idle, everything unreported.
    #[must_use]
    pub fn new(name: impl Into<String>, capabilities: Capabilities) -> Self {
        Self {
            name: name.into(),
            capabilities,
            mode: None,
            eco: false,
            current_temperature: None,
            target_temperature: None,
            target_temperature_low: None,
            target_temperature_high: None,
            current_humidity: None,
            target_humidity: None,
            action: "off".to_string(),
            fan: false,
        }
    }

    /// Which setpoints this record currently exposes.
    #[must_use]
    pub fn setpoint_exposure(&self) -> SetpointExposure {
        SetpointExposure::of(self.mode.as_deref(), self.eco)
    }

    /// Whether the configured mode is the vendor's heat-cool range.
    #[must_use]
    pub fn is_range_mode(&self) -> bool {
        self.mode.as_deref() == Some(ThermostatMode::Range.as_vendor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_idle_with_nothing_reported() {
        let record = DeviceRecord::new("Living Room", Capabilities::default());
        assert_eq!(record.action, "off");
        assert_eq!(record.mode, None);
        assert!(!record.eco);
        assert!(!record.fan);
        assert_eq!(record.current_temperature, None);
    }

    #[test]
    fn should_report_range_mode_only_for_range_string() {
        let mut record = DeviceRecord::new("T", Capabilities::default());
        assert!(!record.is_range_mode());
        record.mode = Some("range".to_string());
        assert!(record.is_range_mode());
        record.mode = Some("heat".to_string());
        assert!(!record.is_range_mode());
    }

    #[test]
    fn should_derive_exposure_from_mode_and_eco() {
        let mut record = DeviceRecord::new("T", Capabilities::default());
        record.mode = Some("range".to_string());
        assert_eq!(record.setpoint_exposure(), SetpointExposure::Range);
        record.eco = true;
        assert_eq!(record.setpoint_exposure(), SetpointExposure::Suppressed);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let mut record = DeviceRecord::new(
            "Hallway",
            Capabilities {
                can_heat: true,
                can_cool: false,
                has_fan: true,
            },
        );
        record.mode = Some("heat".to_string());
        record.current_temperature = Some(21.5);
        let json = serde_json::to_string(&record).unwrap();
        let parsed: DeviceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
