//! Unit tests for command dispatch.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use anyhow::bail;

use super::*;
use crate::backend::ChatBackend;
use crate::config::Settings;
use crate::launcher::Launcher;
use crate::speech::{SpeechError, SpeechOutput, Voice};

struct RecordingBackend {
    calls: Mutex<Vec<(String, String)>>,
    reply: String,
}

impl RecordingBackend {
    fn new(reply: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: reply.to_string(),
        }
    }

    fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ChatBackend for RecordingBackend {
    fn chat(&self, system_prompt: &str, user_message: &str) -> anyhow::Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_message.to_string()));
        Ok(self.reply.clone())
    }
}

struct FailingBackend;

impl ChatBackend for FailingBackend {
    fn chat(&self, _system_prompt: &str, _user_message: &str) -> anyhow::Result<String> {
        bail!("connection refused")
    }
}

#[derive(Default)]
struct RecordingLauncher {
    programs: Mutex<Vec<Vec<String>>>,
    urls: Mutex<Vec<String>>,
}

impl Launcher for RecordingLauncher {
    fn launch_program(&self, command: &[String]) {
        self.programs.lock().unwrap().push(command.to_vec());
    }

    fn open_url(&self, url: &str) {
        self.urls.lock().unwrap().push(url.to_string());
    }
}

#[derive(Default)]
struct RecordingOutput {
    lines: Mutex<Vec<String>>,
}

impl RecordingOutput {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl SpeechOutput for RecordingOutput {
    fn speak(&self, text: &str) -> Result<(), SpeechError> {
        self.lines.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

struct Harness {
    backend: Arc<RecordingBackend>,
    launcher: Arc<RecordingLauncher>,
    output: Arc<RecordingOutput>,
    dispatcher: Dispatcher,
}

fn harness() -> Harness {
    let backend = Arc::new(RecordingBackend::new("Doing great, Shyam!"));
    let launcher = Arc::new(RecordingLauncher::default());
    let output = Arc::new(RecordingOutput::default());

    let (status_tx, _status_rx) = mpsc::channel();
    let voice = Voice::new(output.clone(), status_tx);
    let dispatcher = Dispatcher::new(
        &Settings::default(),
        voice,
        backend.clone(),
        launcher.clone(),
    );

    Harness {
        backend,
        launcher,
        output,
        dispatcher,
    }
}

#[test]
fn test_open_notepad_launches_editor_without_backend() {
    let h = harness();

    let outcome = h.dispatcher.dispatch("hey please open notepad for me").unwrap();

    assert_eq!(outcome, Outcome::Continue);
    assert_eq!(h.launcher.programs.lock().unwrap().len(), 1);
    assert!(h.backend.calls().is_empty());
    assert!(
        h.output
            .lines()
            .iter()
            .any(|line| line.contains("Opening Notepad for you, Shyam."))
    );
}

#[test]
fn test_rule_priority_chrome_beats_time() {
    let h = harness();

    let outcome = h
        .dispatcher
        .dispatch("open chrome and tell me the time")
        .unwrap();

    assert_eq!(outcome, Outcome::Continue);
    assert_eq!(h.launcher.programs.lock().unwrap().len(), 1);
    let lines = h.output.lines();
    assert!(lines.iter().any(|line| line.contains("Google Chrome")));
    assert!(!lines.iter().any(|line| line.contains("the time is")));
    assert!(h.backend.calls().is_empty());
}

#[test]
fn test_tell_the_time_speaks_a_clock_reading() {
    let h = harness();

    let outcome = h.dispatcher.dispatch("what is the time").unwrap();

    assert_eq!(outcome, Outcome::Continue);
    let lines = h.output.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Shyam, the time is "));
    assert!(h.backend.calls().is_empty());
}

#[test]
fn test_open_youtube_opens_url() {
    let h = harness();

    h.dispatcher.dispatch("open youtube").unwrap();

    let urls = h.launcher.urls.lock().unwrap().clone();
    assert_eq!(urls, vec!["https://www.youtube.com".to_string()]);
    assert!(
        h.output
            .lines()
            .iter()
            .any(|line| line.contains("enjoy your videos Shyam"))
    );
}

#[test]
fn test_tell_me_about_extracts_topic() {
    let h = harness();

    let outcome = h
        .dispatcher
        .dispatch("tell me about quantum computing")
        .unwrap();

    assert_eq!(outcome, Outcome::Continue);

    let calls = h.backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1, "Tell me a short fact about quantum computing");

    let lines = h.output.lines();
    assert!(
        lines
            .iter()
            .any(|line| line.contains("Looking up information about quantum computing"))
    );
    assert!(lines.iter().any(|line| line == "Doing great, Shyam!"));
}

#[test]
fn test_exit_keywords_deactivate_without_side_effects() {
    for utterance in ["exit", "ok bye annie", "please go to sleep"] {
        let h = harness();

        let outcome = h.dispatcher.dispatch(utterance).unwrap();

        assert_eq!(outcome, Outcome::Deactivate, "utterance: {utterance}");
        assert!(h.backend.calls().is_empty());
        assert!(h.launcher.programs.lock().unwrap().is_empty());
        // The farewell is the session controller's side effect, not the
        // dispatcher's.
        assert!(h.output.lines().is_empty());
    }
}

#[test]
fn test_exit_keyword_wins_even_with_other_matches() {
    let h = harness();

    let outcome = h
        .dispatcher
        .dispatch("open notepad and then go to sleep")
        .unwrap();

    // The editor action still fires, but the session winds down.
    assert_eq!(outcome, Outcome::Deactivate);
    assert_eq!(h.launcher.programs.lock().unwrap().len(), 1);
}

#[test]
fn test_exit_keyword_wins_even_when_backend_fails() {
    let launcher = Arc::new(RecordingLauncher::default());
    let output = Arc::new(RecordingOutput::default());
    let (status_tx, _status_rx) = mpsc::channel();
    let voice = Voice::new(output.clone(), status_tx);
    let dispatcher = Dispatcher::new(
        &Settings::default(),
        voice,
        Arc::new(FailingBackend),
        launcher.clone(),
    );

    // The conversation attempt fails, but the exit keyword still winds
    // the session down instead of surfacing the error.
    let outcome = dispatcher.dispatch("how are you, bye").unwrap();

    assert_eq!(outcome, Outcome::Deactivate);
    assert!(output.lines().is_empty());
}

#[test]
fn test_how_are_you_forwards_raw_utterance() {
    let h = harness();

    h.dispatcher.dispatch("hello annie how are you today").unwrap();

    let calls = h.backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1, "hello annie how are you today");
    assert!(calls[0].0.contains("Annie"));
    assert!(calls[0].0.contains("Shyam"));
}

#[test]
fn test_unmatched_utterance_falls_back_to_conversation() {
    let h = harness();

    let outcome = h
        .dispatcher
        .dispatch("what should i cook tonight")
        .unwrap();

    assert_eq!(outcome, Outcome::Continue);
    let calls = h.backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1, "what should i cook tonight");

    let lines = h.output.lines();
    assert_eq!(lines, vec!["Doing great, Shyam!".to_string()]);
    assert!(!lines[0].is_empty());
}

#[test]
fn test_backend_failure_aborts_cycle() {
    let launcher = Arc::new(RecordingLauncher::default());
    let output = Arc::new(RecordingOutput::default());
    let (status_tx, _status_rx) = mpsc::channel();
    let voice = Voice::new(output.clone(), status_tx);
    let dispatcher = Dispatcher::new(
        &Settings::default(),
        voice,
        Arc::new(FailingBackend),
        launcher.clone(),
    );

    let result = dispatcher.dispatch("what should i cook tonight");

    assert!(result.is_err());
    assert!(launcher.programs.lock().unwrap().is_empty());
    assert!(output.lines().is_empty());
}

#[test]
fn test_ruleset_containment_and_remainder() {
    let rules = CommandRuleset::default();

    let matched = rules.match_text("could you tell me about  black holes ").unwrap();
    assert_eq!(matched.kind, CommandKind::TellAbout);
    assert_eq!(matched.remainder, "black holes");

    let matched = rules.match_text("what is the time now").unwrap();
    assert_eq!(matched.kind, CommandKind::TellTime);

    assert!(rules.match_text("sing me a song").is_none());
}
