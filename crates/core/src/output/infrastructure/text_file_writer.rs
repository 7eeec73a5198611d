use std::fs;
use std::path::{Path, PathBuf};

use crate::output::domain::transcript_writer::TranscriptWriter;
use crate::shared::constants::TRANSCRIPT_SUFFIX;

/// Writes transcripts as UTF-8 text next to each other in one directory,
/// named `<recording stem>_transcript.txt`. Existing files are overwritten.
#[derive(Debug)]
pub struct TextFileWriter {
    output_dir: PathBuf,
}

impl TextFileWriter {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
        }
    }
}

impl TranscriptWriter for TextFileWriter {
    fn write_transcript(
        &self,
        source: &Path,
        contents: &str,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = transcript_path(&self.output_dir, source)?;
        if !self.output_dir.as_os_str().is_empty() {
            fs::create_dir_all(&self.output_dir).map_err(|e| {
                format!(
                    "Failed to create output directory {}: {e}",
                    self.output_dir.display()
                )
            })?;
        }
        fs::write(&path, contents)
            .map_err(|e| format!("Failed to write transcript to {}: {e}", path.display()))?;
        Ok(path)
    }
}

/// `<output_dir>/<source stem>_transcript.txt`.
pub fn transcript_path(
    output_dir: &Path,
    source: &Path,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Cannot derive a transcript name from {}", source.display()))?;
    Ok(output_dir.join(format!("{stem}{TRANSCRIPT_SUFFIX}")))
}
