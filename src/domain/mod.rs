//! Core domain types shared across the assistant.

mod status_event;
mod utterance;

pub use status_event::{StatusEvent, StatusKind};
pub use utterance::Utterance;
