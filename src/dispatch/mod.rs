//! Keyword command dispatch.
//!
//! One dispatch cycle takes a recognized utterance, finds the first
//! matching rule in priority order, and performs the action: speaking a
//! confirmation, launching a program or URL, or holding a single-turn
//! conversation with the backend. Utterances matching no rule are
//! forwarded to the backend as generic conversation.

mod rules;

#[cfg(test)]
mod tests;

pub use rules::{CommandKind, CommandMatch, CommandRule, CommandRuleset};

use std::sync::Arc;

use anyhow::Result;
use chrono::Local;

use crate::backend::ChatBackend;
use crate::config::Settings;
use crate::launcher::Launcher;
use crate::speech::Voice;

/// What the session loop should do after a dispatch cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep listening
    Continue,
    /// Deactivate the session and stop the loop
    Deactivate,
}

/// Executes spoken commands against the assistant's adapters
pub struct Dispatcher {
    rules: CommandRuleset,
    voice: Voice,
    backend: Arc<dyn ChatBackend>,
    launcher: Arc<dyn Launcher>,
    persona: String,
    user_name: String,
    editor_command: Vec<String>,
    browser_command: Vec<String>,
    youtube_url: String,
}

impl Dispatcher {
    /// Create a dispatcher with the default ruleset
    pub fn new(
        settings: &Settings,
        voice: Voice,
        backend: Arc<dyn ChatBackend>,
        launcher: Arc<dyn Launcher>,
    ) -> Self {
        Self {
            rules: CommandRuleset::default(),
            voice,
            backend,
            launcher,
            persona: settings.persona_prompt(),
            user_name: settings.user_name.clone(),
            editor_command: settings.launcher.editor_command.clone(),
            browser_command: settings.launcher.browser_command.clone(),
            youtube_url: settings.launcher.youtube_url.clone(),
        }
    }

    /// Run one dispatch cycle for a recognized utterance.
    ///
    /// Expects lower-cased, trimmed text. An `Err` aborts the cycle
    /// (backend failure); the caller logs it and keeps listening.
    ///
    /// An exit keyword anywhere in the utterance deactivates the session,
    /// even when an earlier rule consumed the utterance's action - and
    /// even when that action failed.
    pub fn dispatch(&self, text: &str) -> Result<Outcome> {
        let exit_requested = self
            .rules
            .rules()
            .iter()
            .any(|rule| rule.kind == CommandKind::GoToSleep && rule.matches(text).is_some());

        let action_result = match self.rules.match_text(text) {
            Some(matched) if matched.kind == CommandKind::GoToSleep => {
                return Ok(Outcome::Deactivate);
            }
            Some(matched) => self.execute(&matched, text),
            None => self.converse(text),
        };

        if exit_requested {
            if let Err(e) = action_result {
                tracing::warn!("command failed during wind-down: {e:#}");
            }
            return Ok(Outcome::Deactivate);
        }

        action_result.map(|_| Outcome::Continue)
    }

    fn execute(&self, matched: &CommandMatch, raw: &str) -> Result<()> {
        match matched.kind {
            CommandKind::OpenEditor => {
                self.voice
                    .speak(&format!("Opening Notepad for you, {}.", self.user_name));
                self.launcher.launch_program(&self.editor_command);
            }
            CommandKind::OpenBrowser => {
                self.voice.speak(&format!(
                    "Opening Google Chrome for you, {}.",
                    self.user_name
                ));
                self.launcher.launch_program(&self.browser_command);
            }
            CommandKind::TellTime => {
                let now = Local::now().format("%H:%M:%S");
                self.voice
                    .speak(&format!("{}, the time is {}", self.user_name, now));
            }
            CommandKind::OpenYoutube => {
                self.voice.speak(&format!(
                    "Opening YouTube, enjoy your videos {}!",
                    self.user_name
                ));
                self.launcher.open_url(&self.youtube_url);
            }
            CommandKind::SmallTalk => {
                // Friendly chat: forward the raw utterance as-is
                self.converse(raw)?;
            }
            CommandKind::TellAbout => {
                let topic = &matched.remainder;
                self.voice.speak(&format!(
                    "Looking up information about {}, {}.",
                    topic, self.user_name
                ));
                let reply = self
                    .backend
                    .chat(&self.persona, &format!("Tell me a short fact about {topic}"))?;
                self.voice.speak(&reply);
            }
            CommandKind::GoToSleep => {
                // Handled in dispatch(); the session speaks the farewell.
            }
        }
        Ok(())
    }

    /// Forward an utterance to the backend with the persona prompt and
    /// speak the reply
    fn converse(&self, message: &str) -> Result<()> {
        let reply = self.backend.chat(&self.persona, message)?;
        self.voice.speak(&reply);
        Ok(())
    }
}
