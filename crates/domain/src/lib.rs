//! # nesthub-domain
//!
//! Pure domain model for the nesthub Nest bridge.
//!
//! ## Responsibilities
//! - Foundational types: typed device identifiers, error conventions
//! - Define the **DeviceRecord** mirrored from the vendor cloud
//! - Define the **climate translation layer** (vendor↔platform mode, action,
//!   fan, and preset tables; setpoint exposure)
//! - Unit conversion and humidity policy
//! - Define the **EntitySnapshot** handed to the host platform
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod climate;
pub mod entity;
pub mod error;
pub mod humidity;
pub mod id;
pub mod record;
pub mod temperature;

pub use climate::{FanMode, HvacAction, HvacMode, PresetMode, SetpointExposure, ThermostatMode};
pub use entity::{AttributeValue, EntitySnapshot};
pub use error::{NestHubError, NotFoundError, ProviderError, TranslationError};
pub use id::DeviceId;
pub use record::{Capabilities, DeviceRecord};
pub use temperature::TemperatureUnit;
