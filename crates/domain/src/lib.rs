//! # labvoice-domain
//!
//! Pure domain model for the labvoice laboratory power-management core.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define **Rooms** (lab spaces carrying three powerable circuits)
//! - Define **Device kinds** (power, lighting, air conditioning) and their states
//! - Define the **command grammar** (`ACTION:DEVICE:TARGET` triples)
//! - Define **execution reports** (per-room, per-device outcome lines)
//! - Define **log entries** and **chat messages**
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, the binary, or external IO
//! crates. All IO boundaries are expressed as traits in the `app` crate
//! (ports).

pub mod error;
pub mod time;

pub mod chat;
pub mod command;
pub mod device;
pub mod log;
pub mod report;
pub mod room;
