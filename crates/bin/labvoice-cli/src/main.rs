//! # labvoice — demo console
//!
//! Composition root that wires configuration, the room registry, and the
//! command pipeline into a line-oriented console.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialise the tracing subscriber
//! - Construct the registry, the pipeline service, and the mock responder
//! - Drive the REPL through the `TranscriptionSource`/`SpeechSink` ports
//!
//! ## Dependency rule
//! This is the **only** crate that performs IO. It is the wiring layer — no
//! domain logic belongs here.

mod config;
mod repl;

use std::io::BufRead;

use labvoice_app::ports::{SpeechSink, TranscriptionSource};
use labvoice_app::registry::Registry;
use labvoice_app::responder::{CannedResponder, ChatSession};
use labvoice_app::service::CommandService;

use crate::config::Config;
use crate::repl::Repl;

/// Reads utterances line by line from standard input.
struct StdinSource;

impl TranscriptionSource for StdinSource {
    fn next_utterance(&mut self) -> Option<String> {
        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(err) => {
                tracing::error!(error = %err, "failed to read stdin");
                None
            }
        }
    }
}

/// Speaks by printing to standard output.
struct StdoutSink;

impl SpeechSink for StdoutSink {
    fn speak(&mut self, text: &str) {
        println!("{text}");
    }
}

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_new(&config.logging.filter)?)
        .with_writer(std::io::stderr)
        .init();

    let mut registry = Registry::from_names(config.rooms.names.iter().cloned())?;
    if config.rooms.random_init {
        registry.randomize_states(&mut rand::thread_rng());
    }

    let service = CommandService::new()?;
    let responder = CannedResponder::with_responses(config.chat.responses.clone(), rand::thread_rng());

    eprintln!(
        "labvoice ready — {} rooms, enter an instruction (quit to exit)",
        registry.rooms().len()
    );

    let mut repl = Repl::new(service, registry, ChatSession::new(responder));
    repl.run(&mut StdinSource, &mut StdoutSink);

    Ok(())
}
