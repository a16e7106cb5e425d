//! Room — a lab space carrying one powerable circuit of each kind.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::device::{DeviceKind, DeviceState};
use crate::error::ValidationError;

/// Identifier derived from a room's display name: lowercased, whitespace
/// replaced by hyphens. Stable as long as the name is stable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    /// Derive the identifier for a display name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let slug = name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        Self(slug)
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The full circuit set of a room. Always complete — one state per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circuits {
    pub power: DeviceState,
    pub lighting: DeviceState,
    pub ac: DeviceState,
}

impl Circuits {
    /// The state of one circuit.
    #[must_use]
    pub fn get(&self, kind: DeviceKind) -> DeviceState {
        match kind {
            DeviceKind::Power => self.power,
            DeviceKind::Lighting => self.lighting,
            DeviceKind::Ac => self.ac,
        }
    }

    /// Mutable access to one circuit.
    pub fn get_mut(&mut self, kind: DeviceKind) -> &mut DeviceState {
        match kind {
            DeviceKind::Power => &mut self.power,
            DeviceKind::Lighting => &mut self.lighting,
            DeviceKind::Ac => &mut self.ac,
        }
    }
}

/// A modeled lab space with three independently powerable circuits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub devices: Circuits,
}

impl Room {
    /// Create a room with every circuit off.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            id: RoomId::from_name(&name),
            name,
            devices: Circuits::default(),
        })
    }

    /// Whether the room name contains `token`, ignoring ASCII case.
    ///
    /// This is the (deliberately loose) target-matching policy of the control
    /// surface: token `1` matches every room with a `1` in its name.
    #[must_use]
    pub fn name_contains(&self, token: &str) -> bool {
        self.name.to_lowercase().contains(&token.to_lowercase())
    }
}
