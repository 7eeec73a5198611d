use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::diarization::domain::speaker_turn::SpeakerTurn;
use crate::transcript::domain::word::Word;

/// How words are matched to speaker turns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStrategy {
    /// Single forward pass with a cursor shared across turns.
    /// Assumes turns are chronological.
    #[default]
    Sweep,
    /// Per-word lookup over turns sorted by start time.
    /// Tolerates unordered and overlapping turns.
    Overlap,
}

impl std::fmt::Display for AssignmentStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentStrategy::Sweep => write!(f, "sweep"),
            AssignmentStrategy::Overlap => write!(f, "overlap"),
        }
    }
}

impl FromStr for AssignmentStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sweep" => Ok(AssignmentStrategy::Sweep),
            "overlap" => Ok(AssignmentStrategy::Overlap),
            other => Err(format!(
                "Assignment must be 'sweep' or 'overlap', got '{other}'"
            )),
        }
    }
}

/// Attributes words to speaker turns.
///
/// Words must be sorted by start time. Words no turn matches keep
/// `speaker = None`.
pub struct SpeakerAssigner;

impl SpeakerAssigner {
    pub fn assign(words: &mut [Word], turns: &[SpeakerTurn], strategy: AssignmentStrategy) {
        match strategy {
            AssignmentStrategy::Sweep => Self::assign_sweep(words, turns),
            AssignmentStrategy::Overlap => Self::assign_overlap(words, turns),
        }
    }

    /// For each turn in order, consume every word starting before the turn
    /// ends, labeling those that start at or after the turn's start.
    ///
    /// The cursor never moves backwards: a word skipped by an earlier turn
    /// is not revisited by a later one.
    pub fn assign_sweep(words: &mut [Word], turns: &[SpeakerTurn]) {
        let mut cursor = 0;
        for turn in turns {
            while cursor < words.len() && words[cursor].start < turn.end {
                let word = &mut words[cursor];
                if word.start >= turn.start {
                    word.speaker = Some(turn.speaker_label.clone());
                }
                cursor += 1;
            }
        }
    }

    /// For each word, pick among the turns containing its start time the one
    /// overlapping the word the most. Ties go to the later turn.
    pub fn assign_overlap(words: &mut [Word], turns: &[SpeakerTurn]) {
        let mut sorted: Vec<&SpeakerTurn> = turns.iter().collect();
        sorted.sort_by(|a, b| a.start.total_cmp(&b.start));

        // reach[i] = latest end among sorted[..=i]; lets the backward scan
        // stop once no earlier turn can still be open.
        let reach: Vec<f64> = sorted
            .iter()
            .scan(f64::NEG_INFINITY, |max_end, t| {
                *max_end = max_end.max(t.end);
                Some(*max_end)
            })
            .collect();

        for word in words.iter_mut() {
            let upper = sorted.partition_point(|t| t.start <= word.start);
            let mut best: Option<(&SpeakerTurn, f64)> = None;

            for idx in (0..upper).rev() {
                if reach[idx] <= word.start {
                    break;
                }
                let turn = sorted[idx];
                if !turn.contains(word.start) {
                    continue;
                }
                let score = turn.overlap_with(word.start, word.end);
                match best {
                    Some((_, best_score)) if score <= best_score => {}
                    _ => best = Some((turn, score)),
                }
            }

            if let Some((turn, _)) = best {
                word.speaker = Some(turn.speaker_label.clone());
            }
        }
    }
}
