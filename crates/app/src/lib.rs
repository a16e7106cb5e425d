//! # labvoice-app
//!
//! Application layer — the command pipeline and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** for the collaborators the core never touches
//!   directly: `TranscriptionSource` (where utterances come from),
//!   `SpeechSink` (where rendered sentences go), `Responder` (the mock chat
//!   assistant)
//! - Provide the pipeline stages as use-case types:
//!   - `CommandEncoder` — free-form text → normalized command
//!   - `CommandExecutor` — normalized command × registry → execution report
//!   - `decoder::describe` — execution result text → natural-language sentence
//!   - `CommandInterpreter` — wire command → structured JSON explanation
//!   - `CommandService` — the full text → command → result → text round trip
//! - Own the **in-memory registry** (rooms, circuits, append-only log)
//!
//! ## Dependency rule
//! Depends on `labvoice-domain` only (plus `regex`/`rand` for rule tables and
//! the canned responder). Never performs IO; the binary wires IO through the
//! port traits.

pub mod decoder;
pub mod encoder;
pub mod executor;
pub mod interpreter;
pub mod ports;
pub mod registry;
pub mod responder;
pub mod service;
