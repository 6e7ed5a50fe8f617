/// One unit of spoken input, as returned by the speech recognizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Utterance {
    /// Recognized text, lower-cased and trimmed
    Recognized(String),
    /// Recognition ran but could not make out any speech
    NotUnderstood,
}

impl Utterance {
    /// Build a recognized utterance, normalizing to lower-cased trimmed text.
    ///
    /// Empty input collapses to [`Utterance::NotUnderstood`].
    pub fn recognized(text: impl AsRef<str>) -> Self {
        let normalized = text.as_ref().trim().to_lowercase();
        if normalized.is_empty() {
            Utterance::NotUnderstood
        } else {
            Utterance::Recognized(normalized)
        }
    }

    /// Returns the recognized text, if any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Utterance::Recognized(text) => Some(text),
            Utterance::NotUnderstood => None,
        }
    }

}
