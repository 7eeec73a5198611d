use std::path::{Path, PathBuf};

/// Domain interface for persisting a rendered transcript.
pub trait TranscriptWriter: Send {
    /// Write `contents` for the recording at `source`, returning where it went.
    fn write_transcript(
        &self,
        source: &Path,
        contents: &str,
    ) -> Result<PathBuf, Box<dyn std::error::Error>>;
}
