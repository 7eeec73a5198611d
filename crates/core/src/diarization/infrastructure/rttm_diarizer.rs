use std::fs;
use std::path::{Path, PathBuf};

use crate::diarization::domain::speaker_diarizer::SpeakerDiarizer;
use crate::diarization::domain::speaker_turn::SpeakerTurn;
use crate::shared::input_error::InputError;
use crate::shared::interval::validate_span;

/// Field positions in an RTTM `SPEAKER` record:
/// `SPEAKER <file> <chan> <onset> <duration> <NA> <NA> <label> <NA> <NA>`.
const ONSET_FIELD: usize = 3;
const DURATION_FIELD: usize = 4;
const LABEL_FIELD: usize = 7;

/// Speaker diarizer backed by an RTTM file written by an external
/// diarization run.
///
/// Only `SPEAKER` records are read; turns keep their file order.
#[derive(Debug)]
pub struct RttmDiarizer {
    path: PathBuf,
}

impl RttmDiarizer {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn load(&self) -> Result<Vec<SpeakerTurn>, InputError> {
        let text = fs::read_to_string(&self.path).map_err(|e| InputError::io(&self.path, e))?;
        parse_rttm(&text, &self.path)
    }
}

impl SpeakerDiarizer for RttmDiarizer {
    fn diarize(&self, _source: &Path) -> Result<Vec<SpeakerTurn>, Box<dyn std::error::Error>> {
        Ok(self.load()?)
    }
}

/// Parse RTTM text. Blank lines, `;;` comments and non-`SPEAKER` records
/// are skipped. `origin` is only used to label errors.
pub fn parse_rttm(text: &str, origin: &Path) -> Result<Vec<SpeakerTurn>, InputError> {
    let mut turns = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.first() != Some(&"SPEAKER") {
            continue;
        }

        let fail = |reason: String| InputError::Rttm {
            path: origin.to_path_buf(),
            line: line_no,
            reason,
        };

        if fields.len() <= LABEL_FIELD {
            return Err(fail(format!(
                "expected at least {} fields, found {}",
                LABEL_FIELD + 1,
                fields.len()
            )));
        }

        let onset: f64 = fields[ONSET_FIELD]
            .parse()
            .map_err(|_| fail(format!("invalid onset '{}'", fields[ONSET_FIELD])))?;
        let duration: f64 = fields[DURATION_FIELD]
            .parse()
            .map_err(|_| fail(format!("invalid duration '{}'", fields[DURATION_FIELD])))?;
        let end = onset + duration;
        validate_span(onset, end).map_err(fail)?;

        turns.push(SpeakerTurn::new(onset, end, fields[LABEL_FIELD]));
    }

    log::debug!("Loaded {} speaker turns from {}", turns.len(), origin.display());
    Ok(turns)
}
