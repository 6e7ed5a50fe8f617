//! Utterance capture via sox and whisper-cpp.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::mpsc::Sender;

use crate::config::VoiceSettings;
use crate::domain::{StatusEvent, Utterance};

use super::SpeechError;

/// One blocking utterance capture.
///
/// Implementations block until an utterance boundary is detected, then
/// return the recognized text or the not-understood sentinel. An `Err`
/// means the microphone or toolchain is unusable, not a failed
/// recognition.
pub trait SpeechInput: Send + Sync {
    fn capture(&self) -> Result<Utterance, SpeechError>;
}

/// Speech recognizer that records with sox/rec and transcribes with
/// whisper-cli.
pub struct WhisperRecognizer {
    model_path: PathBuf,
    capture_path: PathBuf,
    language: String,
    silence_threshold: f32,
    silence_duration: f32,
    max_duration: f32,
    status_tx: Sender<StatusEvent>,
}

impl WhisperRecognizer {
    /// Create a recognizer from voice settings.
    ///
    /// `data_dir` is where whisper models live
    /// (`<data_dir>/whisper-models/ggml-<model>.bin`).
    pub fn new(settings: &VoiceSettings, data_dir: &Path, status_tx: Sender<StatusEvent>) -> Self {
        Self {
            model_path: Self::model_path(settings, data_dir),
            capture_path: std::env::temp_dir()
                .join(format!("annie-capture-{}.wav", std::process::id())),
            language: settings.language.clone(),
            silence_threshold: settings.silence_threshold,
            silence_duration: settings.silence_duration,
            max_duration: settings.max_duration,
            status_tx,
        }
    }

    /// Where the ggml model for these settings is expected to live
    pub fn model_path(settings: &VoiceSettings, data_dir: &Path) -> PathBuf {
        data_dir
            .join("whisper-models")
            .join(format!("ggml-{}.bin", settings.whisper_model))
    }

    /// Record one utterance to the capture file, blocking until the
    /// silence boundary fires or the duration cap is hit.
    fn record(&self) -> Result<(), SpeechError> {
        let threshold = format!("{:.1}%", self.silence_threshold * 100.0);
        let status = Command::new("rec")
            .args([
                "-q",
                "-r",
                "16000", // 16kHz sample rate (whisper requirement)
                "-c",
                "1", // Mono
                "-b",
                "16", // 16-bit
                self.capture_path.to_str().unwrap_or("capture.wav"),
                // Skip leading silence, stop after the configured pause
                "silence",
                "1",
                "0.1",
                &threshold,
                "1",
                &format!("{}", self.silence_duration),
                &threshold,
                "trim",
                "0",
                &format!("{}", self.max_duration),
            ])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| SpeechError::InputUnavailable(format!("Failed to start rec: {e}")))?;

        if !status.success() {
            return Err(SpeechError::InputUnavailable(format!(
                "rec exited with {status}"
            )));
        }

        Ok(())
    }

    /// Run whisper-cli on the capture file
    fn transcribe(&self) -> Result<Option<String>, SpeechError> {
        let output = Command::new("whisper-cli")
            .args([
                "-m",
                self.model_path.to_str().unwrap_or("model.bin"),
                "-f",
                self.capture_path.to_str().unwrap_or("capture.wav"),
                "--no-timestamps",
                "-l",
                &self.language,
            ])
            .output()
            .map_err(|e| {
                SpeechError::InputUnavailable(format!("Failed to run whisper-cli: {e}"))
            })?;

        if !output.status.success() {
            tracing::debug!(
                "whisper-cli failed: {}",
                String::from_utf8_lossy(&output.stderr)
            );
            return Ok(None);
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if text.is_empty() || text.eq_ignore_ascii_case("[BLANK_AUDIO]") {
            return Ok(None);
        }

        Ok(Some(text))
    }

    fn push_status(&self, event: StatusEvent) {
        let _ = self.status_tx.send(event);
    }
}

impl SpeechInput for WhisperRecognizer {
    fn capture(&self) -> Result<Utterance, SpeechError> {
        self.record()?;

        self.push_status(StatusEvent::system("Recognizing..."));
        let result = self.transcribe();
        let _ = std::fs::remove_file(&self.capture_path);

        match result? {
            Some(text) => Ok(Utterance::recognized(text)),
            None => Ok(Utterance::NotUnderstood),
        }
    }
}
