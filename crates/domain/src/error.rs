//! Common error types used across the workspace.
//!
//! Each pipeline stage has its own typed error; [`LabError`] is the umbrella
//! callers can collapse into via `#[from]`. Error display strings are the
//! literal user-facing messages of the control surface, so they double as the
//! payload the decoder's failure branch renders.

/// Top-level error for the labvoice core.
#[derive(Debug, thiserror::Error)]
pub enum LabError {
    /// A domain invariant was violated.
    #[error("validation failed")]
    Validation(#[from] ValidationError),

    /// Natural-language input could not be turned into a command.
    #[error("encoding failed")]
    Encode(#[from] EncodeError),

    /// A command could not be applied to the registry.
    #[error("execution failed")]
    Execute(#[from] ExecuteError),

    /// An execution result could not be described.
    #[error("decoding failed")]
    Decode(#[from] DecodeError),
}

/// Violation of a domain invariant during construction or update.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A room was given an empty name.
    #[error("room name must not be empty")]
    EmptyName,

    /// Two room names derive the same identifier.
    #[error("duplicate room id: {0}")]
    DuplicateId(String),
}

/// Failure to map free-form text onto the command grammar.
///
/// Every variant carries the original input so the caller can surface it;
/// the encoder never guesses a missing field.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// No action keyword was recognised.
    #[error("无法解析命令，请检查输入: 未识别到操作: {text}")]
    MissingAction { text: String },

    /// An action other than a status query was given without a device.
    #[error("无法解析命令，请检查输入: 未识别到设备: {text}")]
    MissingDevice { text: String },

    /// Neither an "all rooms" phrase nor a room token was found.
    #[error("无法解析命令，请检查输入: 未识别到目标实验室: {text}")]
    MissingTarget { text: String },
}

impl EncodeError {
    /// The original input text the encoder could not resolve.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::MissingAction { text } | Self::MissingDevice { text } | Self::MissingTarget { text } => text,
        }
    }
}

/// Failure to apply a command against the room registry.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    /// No room name matched any target token.
    #[error("找不到目标实验室: {0}")]
    NoMatchingRoom(String),

    /// The device field is neither a known kind nor the `ALL` sentinel.
    #[error("未知设备类型: {0}")]
    UnknownDevice(String),

    /// The action is recognised by the grammar but has no executor semantics.
    #[error("未支持的操作: {0}")]
    Unsupported(String),

    /// Wrong field count or unknown action token in wire-format text.
    #[error("命令格式不正确，应为 ACTION:DEVICE:TARGET")]
    MalformedCommand,
}

/// Failure to describe an execution result as natural language.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The result text contained no non-blank lines.
    #[error("执行结果为空")]
    EmptyResult,
}
