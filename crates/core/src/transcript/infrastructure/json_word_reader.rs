use std::fs;
use std::path::{Path, PathBuf};

use serde::de::Error as _;
use serde::Deserialize;
use serde_json::Value;

use crate::shared::input_error::InputError;
use crate::shared::interval::validate_span;
use crate::transcript::domain::speech_recognizer::SpeechRecognizer;
use crate::transcript::domain::word::Word;

#[derive(Deserialize)]
struct WordRecord {
    #[serde(alias = "word")]
    text: String,
    start: f64,
    end: f64,
}

#[derive(Deserialize)]
struct SegmentRecord {
    words: Vec<WordRecord>,
}

#[derive(Deserialize)]
struct WordsDocument {
    words: Vec<WordRecord>,
}

#[derive(Deserialize)]
struct SegmentsDocument {
    segments: Vec<SegmentRecord>,
}

/// Accepted document layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordLayout {
    Flat,
    Words,
    Segments,
}

impl WordLayout {
    fn detect(document: &Value) -> Option<Self> {
        match document {
            Value::Array(_) => Some(WordLayout::Flat),
            Value::Object(map) if map.contains_key("words") => Some(WordLayout::Words),
            Value::Object(map) if map.contains_key("segments") => Some(WordLayout::Segments),
            _ => None,
        }
    }
}

/// Speech recognizer backed by a word-timestamp JSON file written by an
/// external transcription run.
///
/// Accepts a flat array of words, an object with a `words` array, or a
/// whisper-style object with `segments[].words[]`. Each word carries
/// `text` (or `word`), `start` and `end` in seconds.
#[derive(Debug)]
pub struct JsonWordReader {
    path: PathBuf,
}

impl JsonWordReader {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn load(&self) -> Result<Vec<Word>, InputError> {
        let json = fs::read_to_string(&self.path).map_err(|e| InputError::io(&self.path, e))?;
        parse_words(&json, &self.path)
    }
}

impl SpeechRecognizer for JsonWordReader {
    fn transcribe(&self, _source: &Path) -> Result<Vec<Word>, Box<dyn std::error::Error>> {
        Ok(self.load()?)
    }
}

/// Parse and validate words, dropping blank tokens and sorting by start time.
///
/// `origin` is only used to label errors.
pub fn parse_words(json: &str, origin: &Path) -> Result<Vec<Word>, InputError> {
    let records = read_records(json).map_err(|e| InputError::json(origin, e))?;

    let mut words = Vec::new();
    for (index, record) in records.into_iter().enumerate() {
        validate_span(record.start, record.end).map_err(|reason| InputError::InvalidRecord {
            path: origin.to_path_buf(),
            index,
            reason,
        })?;
        let text = record.text.trim();
        if text.is_empty() {
            continue;
        }
        words.push(Word::new(text, record.start, record.end));
    }

    words.sort_by(|a, b| a.start.total_cmp(&b.start));
    log::debug!("Loaded {} words from {}", words.len(), origin.display());
    Ok(words)
}

/// Pick the layout from the document's shape, then deserialize only that
/// layout so field errors keep their name and position.
fn read_records(json: &str) -> Result<Vec<WordRecord>, serde_json::Error> {
    let document: Value = serde_json::from_str(json)?;
    match WordLayout::detect(&document) {
        Some(WordLayout::Flat) => serde_json::from_str(json),
        Some(WordLayout::Words) => {
            serde_json::from_str::<WordsDocument>(json).map(|d| d.words)
        }
        Some(WordLayout::Segments) => serde_json::from_str::<SegmentsDocument>(json)
            .map(|d| d.segments.into_iter().flat_map(|s| s.words).collect()),
        None => Err(serde_json::Error::custom(
            "expected an array of words or an object with `words` or `segments`",
        )),
    }
}
