//! Speech input and output adapters.
//!
//! Capture and transcription delegate to external tools (sox and
//! whisper-cpp); synthesis uses the platform speech command. Both sides
//! are behind traits so the session loop can be exercised without audio
//! hardware.

mod availability;
mod recognizer;
mod synthesizer;
mod voice;

#[cfg(test)]
mod tests;

pub use availability::{check_availability, tool_exists};
pub use recognizer::{SpeechInput, WhisperRecognizer};
pub use synthesizer::{CommandSynthesizer, SpeechOutput};
pub use voice::Voice;

/// Failures of the speech toolchain.
///
/// A failed recognition is not an error - it is the
/// [`Utterance::NotUnderstood`](crate::domain::Utterance) sentinel. Errors
/// here mean the hardware or the external tools are unusable.
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    /// Microphone or recognition toolchain cannot be used
    #[error("voice input unavailable: {0}")]
    InputUnavailable(String),

    /// Text-to-speech playback failed
    #[error("speech synthesis failed: {0}")]
    Synthesis(String),
}
