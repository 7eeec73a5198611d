use std::path::Path;

use crate::diarization::domain::speaker_diarizer::SpeakerDiarizer;
use crate::shared::constants::RTTM_EXTENSION;

use super::json_turn_reader::JsonTurnReader;
use super::rttm_diarizer::RttmDiarizer;

/// Source format of a diarization output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnFormat {
    Rttm,
    Json,
}

impl TurnFormat {
    /// `.rttm` files (any case) are RTTM; everything else is read as JSON.
    pub fn detect(path: &Path) -> Self {
        let is_rttm = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case(RTTM_EXTENSION))
            .unwrap_or(false);
        if is_rttm {
            TurnFormat::Rttm
        } else {
            TurnFormat::Json
        }
    }
}

/// Create the diarizer that reads speaker turns from `path`.
pub fn create_diarizer(path: &Path) -> Box<dyn SpeakerDiarizer> {
    match TurnFormat::detect(path) {
        TurnFormat::Rttm => Box::new(RttmDiarizer::new(path)),
        TurnFormat::Json => Box::new(JsonTurnReader::new(path)),
    }
}
