//! Execution reports — ordered per-room, per-device outcome lines.

use serde::{Deserialize, Serialize};

use crate::device::DeviceKind;

/// One outcome line produced by executing a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A circuit actually changed state.
    Toggled {
        room: String,
        device: DeviceKind,
        on: bool,
    },
    /// A circuit's current state was observed. Never implies a mutation.
    Status {
        room: String,
        device: DeviceKind,
        on: bool,
    },
}

/// Ordered outcome lines for one command execution.
///
/// Toggle actions contribute one [`Outcome::Toggled`] per circuit that
/// actually changed; status queries contribute one [`Outcome::Status`] per
/// selected room × device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionReport {
    lines: Vec<Outcome>,
}

impl ExecutionReport {
    /// An empty report (an idempotent no-op is not an error).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: Outcome) {
        self.lines.push(outcome);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// The outcome lines, in execution order.
    #[must_use]
    pub fn lines(&self) -> &[Outcome] {
        &self.lines
    }

    /// Render the textual result the control surface displays.
    ///
    /// Toggles render as one arrow line each (`05-08 lighting -> ON`).
    /// Status observations are grouped per room into
    /// `05-08: power: ON, lighting: OFF, ac: ON`. Lines are joined with
    /// newlines; an empty report renders as the empty string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut rendered: Vec<String> = Vec::new();
        let mut status_room: Option<&str> = None;

        for outcome in &self.lines {
            match outcome {
                Outcome::Toggled { room, device, on } => {
                    status_room = None;
                    rendered.push(format!(
                        "{room} {} -> {}",
                        device.key(),
                        if *on { "ON" } else { "OFF" }
                    ));
                }
                Outcome::Status { room, device, on } => {
                    let fragment =
                        format!("{}: {}", device.key(), if *on { "ON" } else { "OFF" });
                    if status_room == Some(room.as_str()) {
                        if let Some(last) = rendered.last_mut() {
                            last.push_str(", ");
                            last.push_str(&fragment);
                        }
                    } else {
                        status_room = Some(room.as_str());
                        rendered.push(format!("{room}: {fragment}"));
                    }
                }
            }
        }

        rendered.join("\n")
    }
}

impl FromIterator<Outcome> for ExecutionReport {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}
