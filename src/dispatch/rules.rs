//! Command rules and the ordered ruleset.
//!
//! Rules are evaluated in order and the first containment match wins.
//! That ordering is a behavioral contract: trigger phrases can overlap
//! (an utterance mentioning both "open chrome" and "the time" must only
//! open the browser), so the list below is the priority order, not just
//! a lookup table.

/// The fixed actions a spoken command can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Launch the text editor
    OpenEditor,
    /// Launch the configured browser
    OpenBrowser,
    /// Speak the current wall-clock time
    TellTime,
    /// Open the video site in the default browser
    OpenYoutube,
    /// Friendly chat routed through the backend
    SmallTalk,
    /// Look up a short fact about the text after the trigger phrase
    TellAbout,
    /// Deactivate the session
    GoToSleep,
}

/// A rule mapping trigger phrases to a command
#[derive(Debug, Clone)]
pub struct CommandRule {
    /// Phrases that trigger this rule (matched by containment,
    /// case already folded by the recognizer)
    pub triggers: Vec<String>,

    /// The command to execute on a match
    pub kind: CommandKind,
}

impl CommandRule {
    /// Create a rule with one or more trigger phrases
    pub fn new(kind: CommandKind, triggers: &[&str]) -> Self {
        Self {
            triggers: triggers.iter().map(|t| t.to_string()).collect(),
            kind,
        }
    }

    /// Check whether the utterance contains any of this rule's triggers.
    ///
    /// On a match, `remainder` carries the trimmed text after the trigger
    /// phrase (used by "tell me about" to extract the topic).
    pub fn matches(&self, text: &str) -> Option<CommandMatch> {
        for trigger in &self.triggers {
            if let Some(position) = text.find(trigger.as_str()) {
                let remainder = text[position + trigger.len()..].trim().to_string();
                return Some(CommandMatch {
                    kind: self.kind,
                    remainder,
                });
            }
        }
        None
    }
}

/// Result of matching an utterance against a rule
#[derive(Debug, Clone)]
pub struct CommandMatch {
    /// The command to execute
    pub kind: CommandKind,
    /// Trimmed text after the trigger phrase
    pub remainder: String,
}

/// The ordered list of command rules
#[derive(Debug, Clone)]
pub struct CommandRuleset {
    rules: Vec<CommandRule>,
}

impl Default for CommandRuleset {
    fn default() -> Self {
        Self {
            rules: vec![
                CommandRule::new(CommandKind::OpenEditor, &["open notepad"]),
                CommandRule::new(CommandKind::OpenBrowser, &["open chrome"]),
                CommandRule::new(CommandKind::TellTime, &["the time"]),
                CommandRule::new(CommandKind::OpenYoutube, &["open youtube"]),
                CommandRule::new(CommandKind::SmallTalk, &["how are you"]),
                CommandRule::new(CommandKind::TellAbout, &["tell me about"]),
                CommandRule::new(
                    CommandKind::GoToSleep,
                    &["exit", "bye", "go to sleep"],
                ),
            ],
        }
    }
}

impl CommandRuleset {
    /// Match an utterance against the rules in priority order.
    ///
    /// Expects lower-cased, trimmed input (the recognizer's contract).
    /// Returns `None` when no rule matches; the caller falls back to
    /// generic conversation.
    pub fn match_text(&self, text: &str) -> Option<CommandMatch> {
        self.rules.iter().find_map(|rule| rule.matches(text))
    }

    /// The rules in evaluation order
    pub fn rules(&self) -> &[CommandRule] {
        &self.rules
    }
}
