use std::path::Path;

use super::word::Word;

/// Domain interface for speech-to-text transcription.
///
/// Implementations produce word-level timestamps for the recording at
/// `source`, sorted by start time.
pub trait SpeechRecognizer: Send {
    fn transcribe(&self, source: &Path) -> Result<Vec<Word>, Box<dyn std::error::Error>>;
}
