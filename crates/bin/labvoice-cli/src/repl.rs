//! Line-oriented console driving the command pipeline.
//!
//! Input arrives through a [`TranscriptionSource`] and replies leave through
//! a [`SpeechSink`], standing in for microphone capture and speech
//! playback. Besides free-form instructions, a few direct commands are
//! recognised: `rooms`, `status [token]`, `log [n]`, `explain <command>`,
//! `chat <text>`, and raw `ACTION:DEVICE:TARGET` entry.

use labvoice_app::interpreter::CommandInterpreter;
use labvoice_app::ports::{Responder, SpeechSink, TranscriptionSource};
use labvoice_app::registry::Registry;
use labvoice_app::responder::ChatSession;
use labvoice_app::service::CommandService;

/// The interactive session state.
pub struct Repl<R> {
    service: CommandService,
    interpreter: CommandInterpreter,
    registry: Registry,
    chat: ChatSession<R>,
}

impl<R: Responder> Repl<R> {
    pub fn new(service: CommandService, registry: Registry, chat: ChatSession<R>) -> Self {
        Self {
            service,
            interpreter: CommandInterpreter::new(),
            registry,
            chat,
        }
    }

    /// Consume the source until it is exhausted or the user quits.
    pub fn run<S, K>(&mut self, source: &mut S, sink: &mut K)
    where
        S: TranscriptionSource,
        K: SpeechSink,
    {
        while let Some(line) = source.next_utterance() {
            let line = line.trim().to_string();
            if line.is_empty() {
                continue;
            }
            if line == "quit" || line == "exit" {
                break;
            }
            let reply = self.dispatch(&line);
            sink.speak(&reply);
        }
    }

    /// Route one input line to the matching surface.
    pub fn dispatch(&mut self, line: &str) -> String {
        if line == "rooms" {
            return self
                .registry
                .rooms()
                .iter()
                .map(|room| room.name.as_str())
                .collect::<Vec<_>>()
                .join("\n");
        }
        if let Some(filter) = strip_keyword(line, "status") {
            return match self.registry.status_report(filter) {
                Ok(report) => report,
                Err(err) => format!("操作失败：{err}"),
            };
        }
        if let Some(count) = strip_keyword(line, "log") {
            let count = count.parse().unwrap_or(10);
            return self.render_log(count);
        }
        if let Some(command) = strip_keyword(line, "explain") {
            return match self.interpreter.interpret(command) {
                Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_default(),
                Err(err) => format!("操作失败：{err}"),
            };
        }
        if let Some(text) = strip_keyword(line, "chat") {
            return self.chat.say(text);
        }
        if is_wire_command(line) {
            return self.service.handle_wire(line, &mut self.registry);
        }
        self.service.handle(line, &mut self.registry)
    }

    fn render_log(&self, count: usize) -> String {
        let lines: Vec<String> = self
            .registry
            .logs()
            .take(count)
            .map(|entry| format!("[{}] {}", entry.kind, entry.message))
            .collect();
        if lines.is_empty() {
            "暂无日志".to_string()
        } else {
            lines.join("\n")
        }
    }
}

/// `"status 05-08"` → `Some("05-08")`, `"status"` → `Some("")`,
/// `"statusfoo"` → `None`.
fn strip_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    if line == keyword {
        return Some("");
    }
    line.strip_prefix(keyword)
        .and_then(|rest| rest.strip_prefix(' '))
        .map(str::trim)
}

/// Raw command entry: an uppercase head field followed by a colon.
fn is_wire_command(line: &str) -> bool {
    match line.split_once(':') {
        Some((head, _)) => {
            !head.is_empty()
                && head
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c == '_')
        }
        None => false,
    }
}
