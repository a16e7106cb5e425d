//! Command executor — applies normalized commands to the registry.
//!
//! The only pipeline stage with side effects. Every execution attempt,
//! successful or not, leaves one log entry in the registry; every circuit
//! that actually changes state leaves one more.

use std::str::FromStr;

use labvoice_domain::command::{Action, Command, Target};
use labvoice_domain::error::ExecuteError;
use labvoice_domain::log::LogKind;
use labvoice_domain::report::{ExecutionReport, Outcome};
use labvoice_domain::room::RoomId;

use crate::registry::Registry;

/// Applies commands against a [`Registry`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandExecutor;

impl CommandExecutor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Execute a normalized command.
    ///
    /// Toggle actions are idempotent: a circuit already in the requested
    /// state produces no outcome line and no log entry, and is not an error.
    /// Status queries never mutate. The registry records one Info entry for
    /// a successful attempt and one Error entry for a failed one.
    ///
    /// # Errors
    ///
    /// Returns [`ExecuteError::NoMatchingRoom`] when target resolution is
    /// empty and [`ExecuteError::Unsupported`] for the reset action.
    #[tracing::instrument(skip(self, registry), fields(command = %command))]
    pub fn execute(
        &self,
        command: &Command,
        registry: &mut Registry,
    ) -> Result<ExecutionReport, ExecuteError> {
        match self.apply(command, registry) {
            Ok(report) => {
                tracing::info!(lines = report.len(), "command executed");
                registry.add_log(format!("执行命令: {command} - 成功"), LogKind::Info);
                Ok(report)
            }
            Err(err) => {
                tracing::warn!(error = %err, "command failed");
                registry.add_log(format!("执行命令: {command} - 失败: {err}"), LogKind::Error);
                Err(err)
            }
        }
    }

    /// Parse `ACTION:DEVICE:TARGET` wire text and execute it.
    ///
    /// # Errors
    ///
    /// Returns the parse error ([`ExecuteError::MalformedCommand`] or
    /// [`ExecuteError::UnknownDevice`]) or any error from [`Self::execute`].
    /// Parse failures are logged against the raw text.
    pub fn execute_wire(
        &self,
        wire: &str,
        registry: &mut Registry,
    ) -> Result<ExecutionReport, ExecuteError> {
        match Command::from_str(wire) {
            Ok(command) => self.execute(&command, registry),
            Err(err) => {
                registry.add_log(format!("执行命令: {wire} - 失败: {err}"), LogKind::Error);
                Err(err)
            }
        }
    }

    fn apply(
        &self,
        command: &Command,
        registry: &mut Registry,
    ) -> Result<ExecutionReport, ExecuteError> {
        let rooms = Self::resolve_target(&command.target, registry)?;

        match command.action {
            Action::PowerOn | Action::PowerOff => {
                let on = command.action == Action::PowerOn;
                let mut report = ExecutionReport::new();
                for (id, name) in &rooms {
                    for kind in command.device.kinds().iter().copied() {
                        if registry.set_powered(id, kind, on) == Some(true) {
                            report.push(Outcome::Toggled {
                                room: name.clone(),
                                device: kind,
                                on,
                            });
                        }
                    }
                }
                Ok(report)
            }
            Action::GetStatus => {
                let mut report = ExecutionReport::new();
                for (id, name) in &rooms {
                    let Some(room) = registry.room(id) else { continue };
                    for kind in command.device.kinds().iter().copied() {
                        report.push(Outcome::Status {
                            room: name.clone(),
                            device: kind,
                            on: room.devices.get(kind).powered,
                        });
                    }
                }
                Ok(report)
            }
            Action::Reset => Err(ExecuteError::Unsupported(Action::Reset.token().to_string())),
        }
    }

    /// Resolve the target field to `(id, name)` pairs, in registry order.
    fn resolve_target(
        target: &Target,
        registry: &Registry,
    ) -> Result<Vec<(RoomId, String)>, ExecuteError> {
        let rooms: Vec<(RoomId, String)> = match target {
            Target::All => registry
                .rooms()
                .iter()
                .map(|room| (room.id.clone(), room.name.clone()))
                .collect(),
            Target::Rooms(tokens) => registry
                .rooms()
                .iter()
                .filter(|room| tokens.iter().any(|token| room.name_contains(token)))
                .map(|room| (room.id.clone(), room.name.clone()))
                .collect(),
        };
        if rooms.is_empty() {
            return Err(ExecuteError::NoMatchingRoom(target.to_string()));
        }
        Ok(rooms)
    }
}
