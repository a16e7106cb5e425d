//! Command interpreter — wire commands to a structured explanation.
//!
//! Produces a JSON intent/entities breakdown for explaining a command
//! without executing it. Unknown tokens pass through verbatim rather than
//! failing; only the field count is enforced.

use labvoice_domain::command::Action;
use labvoice_domain::error::ExecuteError;

/// Explains `ACTION:DEVICE:TARGET` text without executing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandInterpreter;

impl CommandInterpreter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Break a wire command into its intent and entities.
    ///
    /// # Errors
    ///
    /// Returns [`ExecuteError::MalformedCommand`] for a field count other
    /// than three.
    pub fn interpret(&self, command: &str) -> Result<serde_json::Value, ExecuteError> {
        let parts: Vec<&str> = command.split(':').collect();
        let [action, device, target] = parts.as_slice() else {
            return Err(ExecuteError::MalformedCommand);
        };

        let action_description =
            Action::from_token(action).map_or_else(|| (*action).to_string(), |a| a.label().to_string());
        let device_description = match *device {
            "POWER" => "动力",
            "LIGHTING" => "照明",
            "AC" => "空调",
            "ALL" => "所有设备",
            other => other,
        };
        let target_description = if *target == "ALL" {
            "所有实验室".to_string()
        } else {
            format!("实验室 {target}")
        };

        Ok(serde_json::json!({
            "intent": {
                "action": action,
                "actionDescription": action_description,
            },
            "entities": {
                "device": device,
                "deviceDescription": device_description,
                "target": target,
                "targetDescription": target_description,
            },
        }))
    }
}
