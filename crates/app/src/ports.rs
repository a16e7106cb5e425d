//! Port definitions — traits the composition root implements.
//!
//! Ports are the boundaries between the application core and the outside
//! world. Speech capture and playback are collaborator boundaries: the core
//! consumes text and produces text, and never touches a microphone or a
//! speaker directly.

/// Source of free-form utterances (microphone transcription, manual entry).
pub trait TranscriptionSource {
    /// The next utterance, or `None` when the source is exhausted.
    fn next_utterance(&mut self) -> Option<String>;
}

/// Consumer of rendered sentences (speech synthesis, terminal output).
pub trait SpeechSink {
    fn speak(&mut self, text: &str);
}

/// The mock chat assistant: one reply per utterance.
///
/// No behavioural contract beyond returning one of its configured literals.
pub trait Responder {
    fn respond(&mut self, utterance: &str) -> String;
}
