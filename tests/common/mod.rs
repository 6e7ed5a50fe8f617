//! Shared test doubles for integration tests

use std::collections::VecDeque;
use std::sync::Mutex;

use annie::backend::ChatBackend;
use annie::domain::Utterance;
use annie::launcher::Launcher;
use annie::speech::{SpeechError, SpeechInput, SpeechOutput};

/// Speech input that replays a fixed script, then reports the microphone
/// as unavailable so a runaway loop stops on its own.
pub struct ScriptedInput {
    script: Mutex<VecDeque<Utterance>>,
}

impl ScriptedInput {
    pub fn new(utterances: &[&str]) -> Self {
        Self {
            script: Mutex::new(
                utterances
                    .iter()
                    .map(|text| Utterance::recognized(text))
                    .collect(),
            ),
        }
    }
}

impl SpeechInput for ScriptedInput {
    fn capture(&self) -> Result<Utterance, SpeechError> {
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| SpeechError::InputUnavailable("script exhausted".to_string()))
    }
}

/// Speech output that records spoken lines instead of playing audio
#[derive(Default)]
pub struct RecordingOutput {
    pub lines: Mutex<Vec<String>>,
}

impl RecordingOutput {
    pub fn count_containing(&self, needle: &str) -> usize {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .filter(|line| line.contains(needle))
            .count()
    }
}

impl SpeechOutput for RecordingOutput {
    fn speak(&self, text: &str) -> Result<(), SpeechError> {
        self.lines.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Chat backend that records every request and returns a fixed reply
pub struct StaticBackend {
    pub calls: Mutex<Vec<(String, String)>>,
    reply: String,
}

impl StaticBackend {
    pub fn new(reply: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: reply.to_string(),
        }
    }
}

impl ChatBackend for StaticBackend {
    fn chat(&self, system_prompt: &str, user_message: &str) -> anyhow::Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_message.to_string()));
        Ok(self.reply.clone())
    }
}

/// Launcher that records what would have been started
#[derive(Default)]
pub struct RecordingLauncher {
    pub programs: Mutex<Vec<Vec<String>>>,
    pub urls: Mutex<Vec<String>>,
}

impl Launcher for RecordingLauncher {
    fn launch_program(&self, command: &[String]) {
        self.programs.lock().unwrap().push(command.to_vec());
    }

    fn open_url(&self, url: &str) {
        self.urls.lock().unwrap().push(url.to_string());
    }
}
