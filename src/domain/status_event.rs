use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of status message shown in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// Something the user said (a recognized utterance)
    Heard,
    /// Something the assistant said out loud
    Spoken,
    /// An error surfaced to the user
    Error,
    /// System message (listening, activation, shutdown)
    System,
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusKind::Heard => write!(f, "heard"),
            StatusKind::Spoken => write!(f, "spoken"),
            StatusKind::Error => write!(f, "error"),
            StatusKind::System => write!(f, "system"),
        }
    }
}

/// A status message pushed to the display surface.
///
/// The log keeps every event in append order; the headline shows the most
/// recent one (last write wins).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusEvent {
    /// When this event occurred
    pub timestamp: DateTime<Utc>,

    /// The kind of event
    pub kind: StatusKind,

    /// The message text, exactly as shown in the log
    pub text: String,
}

impl StatusEvent {
    /// Create a new status event
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            text: text.into(),
        }
    }

    /// Create a heard event ("You: …")
    pub fn heard(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Heard, text)
    }

    /// Create a spoken event ("Annie: …")
    pub fn spoken(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Spoken, text)
    }

    /// Create an error event
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Error, text)
    }

    /// Create a system event
    pub fn system(text: impl Into<String>) -> Self {
        Self::new(StatusKind::System, text)
    }
}
