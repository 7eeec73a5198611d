/// A recognized word with its time span in seconds.
///
/// `speaker` is empty until the aligner attributes the word to a turn.
#[derive(Clone, Debug, PartialEq)]
pub struct Word {
    pub text: String,
    pub start: f64,
    pub end: f64,
    pub speaker: Option<String>,
}

impl Word {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            speaker: None,
        }
    }

    /// The assigned speaker label, or `fallback` when none was assigned.
    pub fn speaker_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.speaker.as_deref().unwrap_or(fallback)
    }
}
