//! Command service — the full text → command → result → text round trip.
//!
//! Every error path is rendered as a `操作失败：` sentence, so a caller that
//! starts from well-formed input always gets a sentence back and never a
//! panic.

use labvoice_domain::report::ExecutionReport;

use crate::decoder;
use crate::encoder::CommandEncoder;
use crate::executor::CommandExecutor;
use crate::registry::Registry;

/// Drives the pipeline end to end against a registry handle.
pub struct CommandService {
    encoder: CommandEncoder,
    executor: CommandExecutor,
}

impl CommandService {
    /// Build the service, compiling the encoder's rule tables.
    ///
    /// # Errors
    ///
    /// Returns a [`regex::Error`] if a rule pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            encoder: CommandEncoder::new()?,
            executor: CommandExecutor::new(),
        })
    }

    /// Handle a natural-language instruction. Always returns a sentence.
    #[tracing::instrument(skip(self, registry), fields(input = text))]
    pub fn handle(&self, text: &str, registry: &mut Registry) -> String {
        match self.encoder.encode(text) {
            Ok(command) => match self.executor.execute(&command, registry) {
                Ok(report) => Self::render(&report),
                Err(err) => format!("操作失败：{err}"),
            },
            Err(err) => {
                tracing::warn!(error = %err, "instruction not encodable");
                format!("操作失败：{err}")
            }
        }
    }

    /// Handle raw `ACTION:DEVICE:TARGET` wire text. Always returns a
    /// sentence.
    #[tracing::instrument(skip(self, registry), fields(input = wire))]
    pub fn handle_wire(&self, wire: &str, registry: &mut Registry) -> String {
        match self.executor.execute_wire(wire, registry) {
            Ok(report) => Self::render(&report),
            Err(err) => format!("操作失败：{err}"),
        }
    }

    /// The underlying encoder, for callers that want the command itself.
    #[must_use]
    pub fn encoder(&self) -> &CommandEncoder {
        &self.encoder
    }

    fn render(report: &ExecutionReport) -> String {
        match decoder::describe(&report.render()) {
            Ok(sentence) => sentence,
            // An empty report (idempotent no-op) decodes as the empty-result
            // failure sentence.
            Err(err) => format!("操作失败：{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labvoice_domain::device::DeviceKind;
    use labvoice_domain::room::RoomId;

    fn service() -> CommandService {
        CommandService::new().unwrap()
    }

    fn registry() -> Registry {
        Registry::from_names(["05-08", "A415"]).unwrap()
    }

    #[test]
    fn should_complete_round_trip_for_toggle() {
        let mut registry = registry();
        let sentence = service().handle("打开05-08实验室的照明", &mut registry);
        assert_eq!(sentence, "05-08实验室的照明已打开。");
        assert!(
            registry
                .room(&RoomId::from_name("05-08"))
                .unwrap()
                .devices
                .get(DeviceKind::Lighting)
                .powered
        );
    }

    #[test]
    fn should_render_empty_report_as_failure_sentence() {
        let mut registry = registry();
        let service = service();
        service.handle("打开05-08实验室的照明", &mut registry);
        let second = service.handle("打开05-08实验室的照明", &mut registry);
        assert_eq!(second, "操作失败：执行结果为空");
    }

    #[test]
    fn should_render_encode_failure_as_sentence() {
        let mut registry = registry();
        let sentence = service().handle("帮我个忙", &mut registry);
        assert!(sentence.starts_with("操作失败："));
    }

    #[test]
    fn should_render_execute_failure_as_sentence() {
        let mut registry = registry();
        let sentence = service().handle("重置05-08实验室的照明", &mut registry);
        assert_eq!(sentence, "操作失败：未支持的操作: RESET");
    }

    #[test]
    fn should_handle_wire_commands() {
        let mut registry = registry();
        let sentence = service().handle_wire("POWER_ON:AC:A415", &mut registry);
        assert_eq!(sentence, "A415实验室的空调已打开。");
    }

    #[test]
    fn should_render_malformed_wire_as_sentence() {
        let mut registry = registry();
        let sentence = service().handle_wire("ONLY:TWO", &mut registry);
        assert_eq!(sentence, "操作失败：命令格式不正确，应为 ACTION:DEVICE:TARGET");
    }
}
