//! The normalized command grammar: `ACTION:DEVICE:TARGET` triples.
//!
//! This is the textual contract between the encoder, the executor, and the
//! decoder. `Display` and `FromStr` round-trip exactly, so encoder output is
//! directly accepted by the executor's parser.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::device::DeviceSelector;
use crate::error::ExecuteError;

/// What a command asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    PowerOn,
    PowerOff,
    GetStatus,
    /// Recognised by the grammar but carries no executor semantics.
    Reset,
}

impl Action {
    /// Uppercase wire token. Matching is case-sensitive.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::PowerOn => "POWER_ON",
            Self::PowerOff => "POWER_OFF",
            Self::GetStatus => "GET_STATUS",
            Self::Reset => "RESET",
        }
    }

    /// Display label (打开, 关闭, 查询, 重置).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::PowerOn => "打开",
            Self::PowerOff => "关闭",
            Self::GetStatus => "查询",
            Self::Reset => "重置",
        }
    }

    /// Parse a wire token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "POWER_ON" => Some(Self::PowerOn),
            "POWER_OFF" => Some(Self::PowerOff),
            "GET_STATUS" => Some(Self::GetStatus),
            "RESET" => Some(Self::Reset),
            _ => None,
        }
    }
}

/// Target field of a command: every room, or raw room-identifier tokens.
///
/// Tokens are kept in order of first appearance and deduplicated only by
/// exact string match; they are resolved against room names at execution
/// time, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    /// Every room in the registry.
    All,
    /// Raw substrings to match against room names.
    Rooms(Vec<String>),
}

impl Target {
    /// Parse the wire form: literal `ALL` or a comma-separated token list.
    #[must_use]
    pub fn from_wire(field: &str) -> Self {
        if field == "ALL" {
            Self::All
        } else {
            Self::Rooms(field.split(',').map(str::to_string).collect())
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("ALL"),
            Self::Rooms(tokens) => f.write_str(&tokens.join(",")),
        }
    }
}

/// A normalized three-field command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub action: Action,
    pub device: DeviceSelector,
    pub target: Target,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.action.token(), self.device.token(), self.target)
    }
}

impl FromStr for Command {
    type Err = ExecuteError;

    /// Parse `ACTION:DEVICE:TARGET` wire text.
    ///
    /// # Errors
    ///
    /// [`ExecuteError::MalformedCommand`] for a field count other than three
    /// or an unknown action token; [`ExecuteError::UnknownDevice`] for an
    /// unknown device token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let [action, device, target] = parts.as_slice() else {
            return Err(ExecuteError::MalformedCommand);
        };
        let action = Action::from_token(action).ok_or(ExecuteError::MalformedCommand)?;
        let device = DeviceSelector::from_token(device)?;
        Ok(Self {
            action,
            device,
            target: Target::from_wire(target),
        })
    }
}
