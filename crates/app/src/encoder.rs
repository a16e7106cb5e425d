//! Command encoder — free-form instructions to normalized commands.
//!
//! An ordered keyword-rule table per field; the first matching rule wins, so
//! text containing both an "open" and a "close" phrase resolves by rule
//! order, not input position. The encoder never guesses: any unresolvable
//! required field is an error carrying the original text.

use regex::Regex;

use labvoice_domain::command::{Action, Command, Target};
use labvoice_domain::device::{DeviceKind, DeviceSelector};
use labvoice_domain::error::EncodeError;

/// Rule-based natural-language-to-command translator.
///
/// All patterns are compiled once at construction.
pub struct CommandEncoder {
    action_rules: Vec<(Regex, Action)>,
    device_rules: Vec<(Regex, DeviceKind)>,
    all_rule: Regex,
    room_rule: Regex,
}

impl CommandEncoder {
    /// Compile the rule tables.
    ///
    /// # Errors
    ///
    /// Returns a [`regex::Error`] if any pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            action_rules: vec![
                (Regex::new("打开|开启|启动")?, Action::PowerOn),
                (Regex::new("关闭|关掉|断电")?, Action::PowerOff),
                (Regex::new("查询|查看|获取")?, Action::GetStatus),
                (Regex::new("重置|复位")?, Action::Reset),
            ],
            device_rules: vec![
                (Regex::new("动力|计算机|电脑")?, DeviceKind::Power),
                (Regex::new("照明|灯光|灯")?, DeviceKind::Lighting),
                (Regex::new("空调|制冷|温度")?, DeviceKind::Ac),
            ],
            all_rule: Regex::new("所有|全部")?,
            room_rule: Regex::new(r"\d+-\d+|[A-Za-z]\d+")?,
        })
    }

    /// Encode an instruction as a normalized command.
    ///
    /// A missing device is tolerated only for status queries, which then
    /// target all device kinds.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] carrying the original text when the action,
    /// the device (for non-query actions), or the target cannot be resolved.
    pub fn encode(&self, text: &str) -> Result<Command, EncodeError> {
        let action = self
            .action_rules
            .iter()
            .find(|(rule, _)| rule.is_match(text))
            .map(|(_, action)| *action)
            .ok_or_else(|| EncodeError::MissingAction {
                text: text.to_string(),
            })?;

        let device = self
            .device_rules
            .iter()
            .find(|(rule, _)| rule.is_match(text))
            .map(|(_, kind)| *kind);
        if device.is_none() && action != Action::GetStatus {
            return Err(EncodeError::MissingDevice {
                text: text.to_string(),
            });
        }
        let device = device.map_or(DeviceSelector::All, DeviceSelector::One);

        // An explicit "all rooms" phrase overrides any extracted tokens.
        let target = if self.all_rule.is_match(text) {
            Target::All
        } else {
            let mut tokens: Vec<String> = Vec::new();
            for found in self.room_rule.find_iter(text) {
                let token = found.as_str().to_string();
                if !tokens.contains(&token) {
                    tokens.push(token);
                }
            }
            if tokens.is_empty() {
                return Err(EncodeError::MissingTarget {
                    text: text.to_string(),
                });
            }
            Target::Rooms(tokens)
        };

        let command = Command {
            action,
            device,
            target,
        };
        tracing::debug!(input = text, command = %command, "encoded instruction");
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder() -> CommandEncoder {
        CommandEncoder::new().unwrap()
    }

    #[test]
    fn should_encode_power_on_lighting_for_one_room() {
        let cmd = encoder().encode("打开05-08实验室的照明").unwrap();
        assert_eq!(cmd.action, Action::PowerOn);
        assert_eq!(cmd.device, DeviceSelector::One(DeviceKind::Lighting));
        assert_eq!(cmd.target, Target::Rooms(vec!["05-08".to_string()]));
        assert_eq!(cmd.to_string(), "POWER_ON:LIGHTING:05-08");
    }

    #[test]
    fn should_encode_power_off_for_all_rooms() {
        let cmd = encoder().encode("关闭所有实验室的动力").unwrap();
        assert_eq!(cmd.action, Action::PowerOff);
        assert_eq!(cmd.device, DeviceSelector::One(DeviceKind::Power));
        assert_eq!(cmd.target, Target::All);
        assert_eq!(cmd.to_string(), "POWER_OFF:POWER:ALL");
    }

    #[test]
    fn should_default_device_to_all_for_status_query() {
        let cmd = encoder().encode("查询A415实验室的状态").unwrap();
        assert_eq!(cmd.action, Action::GetStatus);
        assert_eq!(cmd.device, DeviceSelector::All);
        assert_eq!(cmd.target, Target::Rooms(vec!["A415".to_string()]));
    }

    #[test]
    fn should_reject_non_query_without_device() {
        let err = encoder().encode("打开05-08实验室").unwrap_err();
        assert!(matches!(err, EncodeError::MissingDevice { .. }));
        assert_eq!(err.text(), "打开05-08实验室");
    }

    #[test]
    fn should_reject_text_without_action() {
        let err = encoder().encode("05-08实验室的照明").unwrap_err();
        assert!(matches!(err, EncodeError::MissingAction { .. }));
    }

    #[test]
    fn should_reject_text_without_target() {
        let err = encoder().encode("打开实验室的照明").unwrap_err();
        assert!(matches!(err, EncodeError::MissingTarget { .. }));
    }

    #[test]
    fn should_resolve_conflicting_actions_by_rule_order() {
        // Contains both 打开 and 断电; the power-on rule is checked first.
        let cmd = encoder().encode("打开已断电的05-08实验室的照明").unwrap();
        assert_eq!(cmd.action, Action::PowerOn);
    }

    #[test]
    fn should_let_all_phrase_override_room_tokens() {
        let cmd = encoder().encode("打开所有实验室的灯，包括05-08").unwrap();
        assert_eq!(cmd.target, Target::All);
    }

    #[test]
    fn should_keep_room_tokens_ordered_and_deduplicated() {
        let cmd = encoder()
            .encode("打开A415和05-08还有A415实验室的空调")
            .unwrap();
        assert_eq!(
            cmd.target,
            Target::Rooms(vec!["A415".to_string(), "05-08".to_string()])
        );
    }

    #[test]
    fn should_encode_reset_vocabulary() {
        let cmd = encoder().encode("重置05-08实验室的照明").unwrap();
        assert_eq!(cmd.action, Action::Reset);
        assert_eq!(cmd.to_string(), "RESET:LIGHTING:05-08");
    }

    #[test]
    fn should_match_single_letter_room_tokens() {
        let cmd = encoder().encode("关闭B426实验室的灯光").unwrap();
        assert_eq!(cmd.target, Target::Rooms(vec!["B426".to_string()]));
    }
}
