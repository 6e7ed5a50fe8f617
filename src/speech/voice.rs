//! Speaking with a paper trail: every spoken line also lands in the log.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use crate::domain::StatusEvent;

use super::SpeechOutput;

/// The assistant's voice.
///
/// Wraps a [`SpeechOutput`] so that everything spoken is also pushed to
/// the status log as "Annie: …", mirroring what the user hears. Cloneable
/// so both the GUI thread and the listening loop can speak.
#[derive(Clone)]
pub struct Voice {
    output: Arc<dyn SpeechOutput>,
    status_tx: Sender<StatusEvent>,
}

impl Voice {
    /// Create a voice from a speech output adapter and the status channel
    pub fn new(output: Arc<dyn SpeechOutput>, status_tx: Sender<StatusEvent>) -> Self {
        Self { output, status_tx }
    }

    /// Speak a line, blocking until playback finishes.
    ///
    /// Synthesis failures are surfaced as status messages rather than
    /// propagated - a broken speaker should not kill a dispatch cycle.
    pub fn speak(&self, text: &str) {
        let _ = self.status_tx.send(StatusEvent::spoken(format!("Annie: {text}")));
        if let Err(e) = self.output.speak(text) {
            tracing::warn!("speech synthesis failed: {e}");
            let _ = self.status_tx.send(StatusEvent::error(format!("{e}")));
        }
    }
}
