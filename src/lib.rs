//! Annie - a desktop voice assistant.
//!
//! Annie sits in a small always-on window with a webcam feed and a big
//! activation circle. Click the circle and she listens: spoken commands
//! open programs, tell the time, or look things up; anything else becomes
//! a conversation with a local Ollama model, spoken back out loud.
//!
//! ## Pipeline
//!
//! 1. **Capture**: sox records one utterance, whisper-cpp transcribes it.
//! 2. **Dispatch**: the utterance runs through an ordered keyword ruleset;
//!    the first match wins, unmatched text goes to the chat backend.
//! 3. **Respond**: every reply is spoken through the OS speech command and
//!    mirrored into the on-screen log.

pub mod backend;
pub mod camera;
pub mod config;
pub mod dispatch;
pub mod domain;
pub mod gui;
pub mod launcher;
pub mod session;
pub mod speech;

pub use config::Config;
pub use domain::*;
