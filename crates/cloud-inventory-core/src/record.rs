//! Raw provider records and the normalized instance record

use serde::{Deserialize, Serialize};

/// Tag key used for an instance's display name
pub const NAME_TAG: &str = "Name";

/// A group of instances launched together, as returned by the provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawReservation {
    pub instances: Vec<RawInstance>,
}

/// An instance as returned by the provider. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInstance {
    pub instance_id: Option<String>,
    pub instance_type: Option<String>,
    /// Lifecycle state name ("running", "stopped", ...)
    pub state: Option<String>,
    pub tags: Vec<RawTag>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTag {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl RawTag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

/// Normalized view of a compute instance
///
/// All four fields are always present; anything the provider left out is an
/// empty string. Serializes with keys in `id, name, type, state` order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub instance_type: String,
    pub state: String,
}

impl InstanceRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        instance_type: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            instance_type: instance_type.into(),
            state: state.into(),
        }
    }
}

impl From<&RawInstance> for InstanceRecord {
    fn from(raw: &RawInstance) -> Self {
        let name = raw
            .tags
            .iter()
            .find(|tag| tag.key.as_deref() == Some(NAME_TAG))
            .and_then(|tag| tag.value.clone())
            .unwrap_or_default();

        Self {
            id: raw.instance_id.clone().unwrap_or_default(),
            name,
            instance_type: raw.instance_type.clone().unwrap_or_default(),
            state: raw.state.clone().unwrap_or_default(),
        }
    }
}

/// Flatten reservations into instance records, keeping provider order
pub fn normalize(reservations: &[RawReservation]) -> Vec<InstanceRecord> {
    reservations
        .iter()
        .flat_map(|reservation| reservation.instances.iter())
        .map(InstanceRecord::from)
        .collect()
}
