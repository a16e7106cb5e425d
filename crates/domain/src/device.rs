//! Device kinds and their power states.
//!
//! Every room carries exactly one circuit of each kind — the set is closed
//! and never partial.

use serde::{Deserialize, Serialize};

use crate::error::ExecuteError;

/// One of the three controllable circuits in a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    /// Mains power for benches and computers.
    Power,
    /// Room lighting.
    Lighting,
    /// Air conditioning.
    Ac,
}

impl DeviceKind {
    /// Every kind, in the canonical power → lighting → ac order.
    pub const ALL: [Self; 3] = [Self::Power, Self::Lighting, Self::Ac];

    /// Uppercase wire token (`POWER`, `LIGHTING`, `AC`).
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Power => "POWER",
            Self::Lighting => "LIGHTING",
            Self::Ac => "AC",
        }
    }

    /// Lowercase key used in result lines (`power`, `lighting`, `ac`).
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::Lighting => "lighting",
            Self::Ac => "ac",
        }
    }

    /// Display label (动力, 照明, 空调).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Power => "动力",
            Self::Lighting => "照明",
            Self::Ac => "空调",
        }
    }

    /// Parse an uppercase wire token, case-insensitively.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "POWER" => Some(Self::Power),
            "LIGHTING" => Some(Self::Lighting),
            "AC" => Some(Self::Ac),
            _ => None,
        }
    }

    /// Parse a lowercase result-line key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "power" => Some(Self::Power),
            "lighting" => Some(Self::Lighting),
            "ac" => Some(Self::Ac),
            _ => None,
        }
    }
}

/// Power state of a single circuit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceState {
    /// Whether the circuit is currently energised.
    pub powered: bool,
}

/// Device field of a command: a single kind or the `ALL` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceSelector {
    /// Operate on all three kinds.
    All,
    /// Operate on one kind.
    One(DeviceKind),
}

impl DeviceSelector {
    /// Uppercase wire token.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::One(kind) => kind.token(),
        }
    }

    /// The kinds this selector covers, in canonical order.
    #[must_use]
    pub fn kinds(self) -> &'static [DeviceKind] {
        match self {
            Self::All => &DeviceKind::ALL,
            Self::One(DeviceKind::Power) => &[DeviceKind::Power],
            Self::One(DeviceKind::Lighting) => &[DeviceKind::Lighting],
            Self::One(DeviceKind::Ac) => &[DeviceKind::Ac],
        }
    }

    /// Parse a wire token.
    ///
    /// # Errors
    ///
    /// Returns [`ExecuteError::UnknownDevice`] when the token is neither a
    /// known kind nor `ALL`.
    pub fn from_token(token: &str) -> Result<Self, ExecuteError> {
        if token.eq_ignore_ascii_case("ALL") {
            return Ok(Self::All);
        }
        DeviceKind::from_token(token)
            .map(Self::One)
            .ok_or_else(|| ExecuteError::UnknownDevice(token.to_string()))
    }
}
