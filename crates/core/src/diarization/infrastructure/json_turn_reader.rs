use std::fs;
use std::path::{Path, PathBuf};

use serde::de::Error as _;
use serde::Deserialize;
use serde_json::Value;

use crate::diarization::domain::speaker_diarizer::SpeakerDiarizer;
use crate::diarization::domain::speaker_turn::SpeakerTurn;
use crate::shared::input_error::InputError;
use crate::shared::interval::validate_span;

#[derive(Deserialize)]
struct TurnRecord {
    start: f64,
    end: f64,
    #[serde(alias = "speaker_label", alias = "label")]
    speaker: String,
}

#[derive(Deserialize)]
struct TurnsDocument {
    turns: Vec<TurnRecord>,
}

/// Speaker diarizer backed by a JSON array of `{start, end, speaker}` turns.
///
/// `speaker_label` and `label` are accepted in place of `speaker`, and the
/// array may be wrapped in an object under `turns`. Turns keep file order.
#[derive(Debug)]
pub struct JsonTurnReader {
    path: PathBuf,
}

impl JsonTurnReader {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn load(&self) -> Result<Vec<SpeakerTurn>, InputError> {
        let json = fs::read_to_string(&self.path).map_err(|e| InputError::io(&self.path, e))?;
        parse_turns(&json, &self.path)
    }
}

impl SpeakerDiarizer for JsonTurnReader {
    fn diarize(&self, _source: &Path) -> Result<Vec<SpeakerTurn>, Box<dyn std::error::Error>> {
        Ok(self.load()?)
    }
}

pub fn parse_turns(json: &str, origin: &Path) -> Result<Vec<SpeakerTurn>, InputError> {
    let records = read_records(json).map_err(|e| InputError::json(origin, e))?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            validate_span(record.start, record.end).map_err(|reason| {
                InputError::InvalidRecord {
                    path: origin.to_path_buf(),
                    index,
                    reason,
                }
            })?;
            Ok(SpeakerTurn::new(record.start, record.end, record.speaker))
        })
        .collect()
}

/// Deserialize the flat or wrapped layout, chosen by the document's shape.
fn read_records(json: &str) -> Result<Vec<TurnRecord>, serde_json::Error> {
    match serde_json::from_str::<Value>(json)? {
        Value::Array(_) => serde_json::from_str(json),
        Value::Object(map) if map.contains_key("turns") => {
            serde_json::from_str::<TurnsDocument>(json).map(|d| d.turns)
        }
        _ => Err(serde_json::Error::custom(
            "expected an array of turns or an object with `turns`",
        )),
    }
}
