//! Unit tests for the speech module.

use std::sync::Arc;
use std::sync::mpsc;

use super::*;
use crate::domain::StatusKind;

struct SilentOutput;

impl SpeechOutput for SilentOutput {
    fn speak(&self, _text: &str) -> Result<(), SpeechError> {
        Ok(())
    }
}

struct BrokenOutput;

impl SpeechOutput for BrokenOutput {
    fn speak(&self, _text: &str) -> Result<(), SpeechError> {
        Err(SpeechError::Synthesis("no audio device".to_string()))
    }
}

#[test]
fn test_voice_logs_spoken_line() {
    let (tx, rx) = mpsc::channel();
    let voice = Voice::new(Arc::new(SilentOutput), tx);

    voice.speak("Hello Shyam! How can I assist you today?");

    let event = rx.try_recv().unwrap();
    assert_eq!(event.kind, StatusKind::Spoken);
    assert_eq!(event.text, "Annie: Hello Shyam! How can I assist you today?");
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_voice_surfaces_synthesis_failure_as_status() {
    let (tx, rx) = mpsc::channel();
    let voice = Voice::new(Arc::new(BrokenOutput), tx);

    voice.speak("hello");

    let spoken = rx.try_recv().unwrap();
    assert_eq!(spoken.kind, StatusKind::Spoken);

    let error = rx.try_recv().unwrap();
    assert_eq!(error.kind, StatusKind::Error);
    assert!(error.text.contains("no audio device"));
}

#[test]
fn test_availability_reports_missing_model() {
    let dir = tempfile::tempdir().unwrap();
    let model_path = dir.path().join("ggml-base.bin");

    let (available, message) = check_availability(&model_path);
    // Whatever tool is missing first, an absent model must never report ready.
    assert!(!available || model_path.exists());
    assert!(!message.is_empty());
}
