/// A maximal run of consecutive words attributed to one speaker.
#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptSegment {
    pub speaker_name: String,
    pub text: String,
    /// Start time of the segment's first word, in seconds.
    pub start: Option<f64>,
}

impl TranscriptSegment {
    pub fn new(speaker_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker_name: speaker_name.into(),
            text: text.into(),
            start: None,
        }
    }

    pub fn with_start(mut self, start: f64) -> Self {
        self.start = Some(start);
        self
    }
}
