//! Temperature units and conversion.
//!
//! The vendor cloud reports Celsius; entities are configured with a display
//! unit and convert at the boundary in both directions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display unit for temperature values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    #[default]
    Fahrenheit,
}

impl TemperatureUnit {
    /// Convert a Celsius value from the vendor into this display unit.
    #[must_use]
    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        }
    }

    /// Convert a value in this display unit back into Celsius for the vendor.
    #[must_use]
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        }
    }

    /// Unit symbol for display.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_celsius_to_fahrenheit() {
        assert!((TemperatureUnit::Fahrenheit.from_celsius(0.0) - 32.0).abs() < f64::EPSILON);
        assert!((TemperatureUnit::Fahrenheit.from_celsius(100.0) - 212.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_convert_fahrenheit_to_celsius() {
        assert!((TemperatureUnit::Fahrenheit.to_celsius(32.0)).abs() < f64::EPSILON);
        assert!((TemperatureUnit::Fahrenheit.to_celsius(212.0) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_pass_celsius_through_unchanged() {
        assert!((TemperatureUnit::Celsius.from_celsius(21.5) - 21.5).abs() < f64::EPSILON);
        assert!((TemperatureUnit::Celsius.to_celsius(21.5) - 21.5).abs() < f64::EPSILON);
    }

    #[test]
    fn should_roundtrip_within_a_tenth_of_a_degree() {
        // 72 °F → 22.2 °C (vendor precision) → back to °F.
        let celsius = TemperatureUnit::Fahrenheit.to_celsius(72.0);
        let rounded = (celsius * 10.0).round() / 10.0;
        let back = TemperatureUnit::Fahrenheit.from_celsius(rounded);
        assert!((back - 72.0).abs() < 0.1);
    }

    #[test]
    fn should_display_unit_symbol() {
        assert_eq!(TemperatureUnit::Fahrenheit.to_string(), "°F");
        assert_eq!(TemperatureUnit::Celsius.to_string(), "°C");
    }
}
