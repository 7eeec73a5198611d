use std::path::Path;

use super::speaker_turn::SpeakerTurn;

/// Domain interface for speaker diarization.
///
/// Implementations partition the recording at `source` into speaker turns,
/// returned in the order the diarizer produced them (normally by start time).
pub trait SpeakerDiarizer: Send {
    fn diarize(&self, source: &Path) -> Result<Vec<SpeakerTurn>, Box<dyn std::error::Error>>;
}
