//! Canned chat responder and the assistant conversation log.
//!
//! Presentation simulation, not logic: replies are picked uniformly at
//! random from a fixed literal list.

use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;

use labvoice_domain::chat::{ChatMessage, Sender};

use crate::ports::Responder;

/// The mock assistant's reply literals.
pub const DEFAULT_RESPONSES: [&str; 5] = [
    "已执行切换操作。",
    "请详细描述您的请求。",
    "正在处理您的指令。",
    "该实验室当前所有设备已断电。",
    "该操作已成功完成。",
];

/// Replies with one of a fixed set of literals, chosen uniformly at random.
pub struct CannedResponder<R = ThreadRng> {
    responses: Vec<String>,
    rng: R,
}

impl CannedResponder<ThreadRng> {
    /// Responder with the default literals and a thread-local RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for CannedResponder<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> CannedResponder<R> {
    /// Responder with the default literals and the given RNG.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self {
            responses: DEFAULT_RESPONSES.iter().map(ToString::to_string).collect(),
            rng,
        }
    }

    /// Responder with custom literals. An empty list falls back to the
    /// defaults so a reply is always available.
    #[must_use]
    pub fn with_responses(responses: Vec<String>, rng: R) -> Self {
        let mut responder = Self::with_rng(rng);
        if !responses.is_empty() {
            responder.responses = responses;
        }
        responder
    }
}

impl<R: Rng> Responder for CannedResponder<R> {
    fn respond(&mut self, _utterance: &str) -> String {
        self.responses
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_default()
    }
}

/// A registry-independent conversation with the mock assistant.
///
/// Messages are kept newest first.
pub struct ChatSession<R> {
    responder: R,
    messages: Vec<ChatMessage>,
}

impl<R: Responder> ChatSession<R> {
    #[must_use]
    pub fn new(responder: R) -> Self {
        Self {
            responder,
            messages: Vec::new(),
        }
    }

    /// Record a user line, obtain the assistant's reply, record it too.
    pub fn say(&mut self, text: &str) -> String {
        self.messages.insert(0, ChatMessage::new(Sender::User, text));
        let reply = self.responder.respond(text);
        self.messages.insert(0, ChatMessage::new(Sender::System, reply.clone()));
        reply
    }

    /// The conversation so far, newest first.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn should_only_return_configured_literals() {
        let mut responder = CannedResponder::with_rng(StdRng::seed_from_u64(42));
        for _ in 0..50 {
            let reply = responder.respond("打开灯");
            assert!(DEFAULT_RESPONSES.contains(&reply.as_str()));
        }
    }

    #[test]
    fn should_prefer_custom_literals() {
        let mut responder = CannedResponder::with_responses(
            vec!["好的。".to_string()],
            StdRng::seed_from_u64(1),
        );
        assert_eq!(responder.respond("任意输入"), "好的。");
    }

    #[test]
    fn should_fall_back_to_defaults_for_empty_list() {
        let mut responder =
            CannedResponder::with_responses(Vec::new(), StdRng::seed_from_u64(1));
        assert!(DEFAULT_RESPONSES.contains(&responder.respond("你好").as_str()));
    }

    #[test]
    fn should_record_conversation_newest_first() {
        let responder = CannedResponder::with_rng(StdRng::seed_from_u64(3));
        let mut session = ChatSession::new(responder);

        let reply = session.say("查询05-08实验室");

        let messages = session.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, Sender::System);
        assert_eq!(messages[0].text, reply);
        assert_eq!(messages[1].sender, Sender::User);
        assert_eq!(messages[1].text, "查询05-08实验室");
    }
}
