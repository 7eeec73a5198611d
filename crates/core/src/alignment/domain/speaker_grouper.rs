use crate::shared::constants::UNKNOWN_SPEAKER;
use crate::transcript::domain::word::Word;

use super::speaker_names::SpeakerNames;
use super::transcript_segment::TranscriptSegment;

/// Merges consecutive same-speaker words into transcript segments.
pub struct SpeakerGrouper;

/// Segment under construction, keyed by the raw speaker label.
struct OpenSegment<'a> {
    label: &'a str,
    start: f64,
    words: Vec<&'a str>,
}

impl<'a> OpenSegment<'a> {
    fn begin(label: &'a str, word: &'a Word) -> Self {
        Self {
            label,
            start: word.start,
            words: vec![word.text.as_str()],
        }
    }

    fn close(self, names: &SpeakerNames) -> TranscriptSegment {
        TranscriptSegment::new(names.resolve(self.label), self.words.join(" ").trim())
            .with_start(self.start)
    }
}

impl SpeakerGrouper {
    /// Walk `words` in order, opening a new segment whenever the speaker
    /// changes. Unlabeled words count as [`UNKNOWN_SPEAKER`].
    pub fn group(words: &[Word], names: &SpeakerNames) -> Vec<TranscriptSegment> {
        let mut segments = Vec::new();
        let mut current: Option<OpenSegment> = None;

        for word in words {
            let label = word.speaker_or(UNKNOWN_SPEAKER);
            if let Some(open) = current.as_mut() {
                if open.label == label {
                    open.words.push(word.text.as_str());
                    continue;
                }
            }
            if let Some(done) = current.replace(OpenSegment::begin(label, word)) {
                segments.push(done.close(names));
            }
        }

        if let Some(done) = current {
            segments.push(done.close(names));
        }
        segments
    }
}
