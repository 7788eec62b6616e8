//! Entity snapshot — the platform-facing render of one entity's state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::id::DeviceId;

/// A single typed attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

/// Point-in-time render of an entity for the host platform.
///
/// Produced fresh on every read cycle — snapshots are never cached, so a
/// stale snapshot can only exist on the consumer's side of the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    /// Stable identifier, equal to the vendor device id.
    pub unique_id: DeviceId,
    /// Human-readable label.
    pub name: String,
    /// Primary state string (hvac mode for climate, reading for sensors).
    pub state: String,
    /// Secondary properties, keyed by platform attribute name.
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl EntitySnapshot {
    /// Start a snapshot with no attributes.
    #[must_use]
    pub fn new(unique_id: DeviceId, name: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            unique_id,
            name: name.into(),
            state: state.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Attach an attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: &str, value: AttributeValue) -> Self {
        self.attributes.insert(key.to_string(), value);
        self
    }

    /// Attach an attribute only when the value is present.
    #[must_use]
    pub fn with_optional_attribute(self, key: &str, value: Option<AttributeValue>) -> Self {
        match value {
            Some(value) => self.with_attribute(key, value),
            None => self,
        }
    }

    /// Look up an attribute by name.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }
}
