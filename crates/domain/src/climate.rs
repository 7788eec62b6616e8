//! Climate translation layer — typed modes, actions, and setpoint exposure.
//!
//! The vendor cloud and the host platform each speak their own set of mode
//! strings. Every mapping here is a fixed, exhaustive table with an explicit
//! error path: an unrecognised value is a contract violation and surfaces as
//! a [`TranslationError`], never as a silent default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TranslationError;

/// Operating mode as configured on the vendor device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThermostatMode {
    /// Heat-cool range with separate low/high setpoints.
    Range,
    Heat,
    Cool,
    Off,
}

impl ThermostatMode {
    /// Wire string sent to and received from the vendor cloud.
    #[must_use]
    pub fn as_vendor(self) -> &'static str {
        match self {
            Self::Range => "range",
            Self::Heat => "heat",
            Self::Cool => "cool",
            Self::Off => "off",
        }
    }

    /// Parse a vendor wire string.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::UnknownThermostatMode`] for anything
    /// outside the four known values.
    pub fn from_vendor(raw: &str) -> Result<Self, TranslationError> {
        match raw {
            "range" => Ok(Self::Range),
            "heat" => Ok(Self::Heat),
            "cool" => Ok(Self::Cool),
            "off" => Ok(Self::Off),
            other => Err(TranslationError::UnknownThermostatMode(other.to_string())),
        }
    }
}

impl fmt::Display for ThermostatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_vendor())
    }
}

/// Operating mode as exposed to the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HvacMode {
    /// Combined heating/cooling, backed by the vendor's `range` mode.
    Auto,
    Heat,
    Cool,
    Off,
}

impl HvacMode {
    /// Translate to the vendor's mode.
    #[must_use]
    pub fn to_vendor(self) -> ThermostatMode {
        match self {
            Self::Auto => ThermostatMode::Range,
            Self::Heat => ThermostatMode::Heat,
            Self::Cool => ThermostatMode::Cool,
            Self::Off => ThermostatMode::Off,
        }
    }

    /// Translate from the vendor's mode (inverse of [`to_vendor`](Self::to_vendor)).
    #[must_use]
    pub fn from_vendor(mode: ThermostatMode) -> Self {
        match mode {
            ThermostatMode::Range => Self::Auto,
            ThermostatMode::Heat => Self::Heat,
            ThermostatMode::Cool => Self::Cool,
            ThermostatMode::Off => Self::Off,
        }
    }

    /// Platform-facing string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Heat => "heat",
            Self::Cool => "cool",
            Self::Off => "off",
        }
    }
}

impl fmt::Display for HvacMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HvacMode {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "heat" => Ok(Self::Heat),
            "cool" => Ok(Self::Cool),
            "off" => Ok(Self::Off),
            other => Err(TranslationError::UnknownHvacMode(other.to_string())),
        }
    }
}

/// Instantaneous physical action reported by the device, independent of the
/// configured mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HvacAction {
    Idle,
    Heating,
    Cooling,
}

impl HvacAction {
    /// Parse the vendor's action string.
    ///
    /// The vendor reports `off` for an idle unit; the platform calls that
    /// state `idle`.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::UnknownAction`] for anything outside the
    /// three known values.
    pub fn from_vendor(raw: &str) -> Result<Self, TranslationError> {
        match raw {
            "off" => Ok(Self::Idle),
            "heating" => Ok(Self::Heating),
            "cooling" => Ok(Self::Cooling),
            other => Err(TranslationError::UnknownAction(other.to_string())),
        }
    }

    /// Platform-facing string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Heating => "heating",
            Self::Cooling => "cooling",
        }
    }
}

impl fmt::Display for HvacAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fan control mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FanMode {
    /// Fan forced on (the vendor runs it on a timer).
    On,
    /// Fan under thermostat control.
    Auto,
}

impl FanMode {
    /// Interpret a platform fan-mode string.
    ///
    /// Anything other than `on` requests automatic control; this mirrors the
    /// vendor's fan semantics, so there is no error path.
    #[must_use]
    pub fn from_platform(raw: &str) -> Self {
        if raw == "on" { Self::On } else { Self::Auto }
    }

    /// Platform-facing string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for FanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preset mode: the eco energy-saving override, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetMode {
    None,
    Eco,
}

impl PresetMode {
    /// Interpret a platform preset string: `eco` enables the override, any
    /// other value clears it.
    #[must_use]
    pub fn from_platform(raw: &str) -> Self {
        if raw == "eco" { Self::Eco } else { Self::None }
    }

    /// Platform-facing string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Eco => "eco",
        }
    }
}

impl fmt::Display for PresetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which setpoints a thermostat exposes for its current (mode, eco) state.
///
/// Exactly one of the single setpoint and the low/high pair is visible at a
/// time, and neither is visible while eco is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetpointExposure {
    /// One target temperature (any non-range mode, eco off).
    Single,
    /// Low/high pair (range mode, eco off).
    Range,
    /// No setpoints at all (eco on, regardless of mode).
    Suppressed,
}

impl SetpointExposure {
    /// Classify a device's raw mode string and eco flag.
    ///
    /// Takes the mode as the vendor reports it: an unset or unrecognised
    /// mode exposes the single setpoint, matching the reference behaviour of
    /// comparing the raw value against `range` only.
    #[must_use]
    pub fn of(mode: Option<&str>, eco: bool) -> Self {
        if eco {
            Self::Suppressed
        } else if mode == Some(ThermostatMode::Range.as_vendor()) {
            Self::Range
        } else {
            Self::Single
        }
    }
}
