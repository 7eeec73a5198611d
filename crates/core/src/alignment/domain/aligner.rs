use crate::diarization::domain::speaker_turn::SpeakerTurn;
use crate::transcript::domain::word::Word;

use super::speaker_assigner::{AssignmentStrategy, SpeakerAssigner};
use super::speaker_grouper::SpeakerGrouper;
use super::speaker_names::SpeakerNames;
use super::transcript_segment::TranscriptSegment;

/// Attributes words to speaker turns and merges them into labeled segments.
pub struct Aligner {
    strategy: AssignmentStrategy,
    names: SpeakerNames,
}

impl Aligner {
    pub fn new(strategy: AssignmentStrategy, names: SpeakerNames) -> Self {
        Self { strategy, names }
    }

    /// Label `words` in place, then group them by speaker.
    pub fn align(&self, words: &mut [Word], turns: &[SpeakerTurn]) -> Vec<TranscriptSegment> {
        SpeakerAssigner::assign(words, turns, self.strategy);
        SpeakerGrouper::group(words, &self.names)
    }
}

impl Default for Aligner {
    fn default() -> Self {
        Self::new(AssignmentStrategy::default(), SpeakerNames::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn scenario_words() -> Vec<Word> {
        vec![
            Word::new("hi", 0.0, 0.5),
            Word::new("there", 0.5, 1.0),
            Word::new("bye", 2.0, 2.5),
        ]
    }

    fn scenario_turns() -> Vec<SpeakerTurn> {
        vec![SpeakerTurn::new(0.0, 1.2, "A"), SpeakerTurn::new(1.8, 3.0, "B")]
    }

    fn pairs(segments: &[TranscriptSegment]) -> Vec<(&str, &str)> {
        segments
            .iter()
            .map(|s| (s.speaker_name.as_str(), s.text.as_str()))
            .collect()
    }

    #[rstest]
    #[case::sweep(AssignmentStrategy::Sweep)]
    #[case::overlap(AssignmentStrategy::Overlap)]
    fn test_two_speaker_scenario(#[case] strategy: AssignmentStrategy) {
        let aligner = Aligner::new(strategy, SpeakerNames::new());
        let mut words = scenario_words();
        let segments = aligner.align(&mut words, &scenario_turns());
        assert_eq!(pairs(&segments), vec![("A", "hi there"), ("B", "bye")]);
    }

    #[test]
    fn test_name_map_applies_to_mapped_speaker_only() {
        let mut names = SpeakerNames::new();
        names.insert("A", "Alice");
        let aligner = Aligner::new(AssignmentStrategy::Sweep, names);
        let mut words = scenario_words();
        let segments = aligner.align(&mut words, &scenario_turns());
        assert_eq!(pairs(&segments), vec![("Alice", "hi there"), ("B", "bye")]);
    }

    #[test]
    fn test_no_turns_yields_single_unknown_segment() {
        let mut words = vec![Word::new("x", 0.0, 1.0)];
        let segments = Aligner::default().align(&mut words, &[]);
        assert_eq!(pairs(&segments), vec![("UNKNOWN", "x")]);
    }

    #[test]
    fn test_no_words_yields_no_segments() {
        let segments = Aligner::default().align(&mut [], &scenario_turns());
        assert!(segments.is_empty());
    }

    #[test]
    fn test_align_labels_words_in_place() {
        let mut words = scenario_words();
        Aligner::default().align(&mut words, &scenario_turns());
        assert_eq!(words[2].speaker.as_deref(), Some("B"));
    }
}
