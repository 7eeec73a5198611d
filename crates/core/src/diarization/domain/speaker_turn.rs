use std::collections::BTreeSet;

use crate::shared::interval;

/// A span of the recording attributed to one speaker by the diarizer.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeakerTurn {
    pub start: f64,
    pub end: f64,
    pub speaker_label: String,
}

impl SpeakerTurn {
    pub fn new(start: f64, end: f64, speaker_label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            speaker_label: speaker_label.into(),
        }
    }

    /// Whether `time` falls in `[start, end)`.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start && time < self.end
    }

    pub fn overlap_with(&self, start: f64, end: f64) -> f64 {
        interval::overlap(self.start, self.end, start, end)
    }
}

/// Distinct speaker labels across `turns`, in sorted order.
///
/// This is the order positional speaker names are matched against.
pub fn distinct_labels(turns: &[SpeakerTurn]) -> Vec<String> {
    turns
        .iter()
        .map(|t| t.speaker_label.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
