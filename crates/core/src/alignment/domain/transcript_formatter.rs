use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::timestamp::format_timestamp;

use super::transcript_segment::TranscriptSegment;

/// Layout of the rendered transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// `name:` line, text line, blank line between segments.
    #[default]
    Plain,
    /// One `[HH:MM:SS] name: text` line per segment.
    Timestamped,
}

impl std::fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputStyle::Plain => write!(f, "plain"),
            OutputStyle::Timestamped => write!(f, "timestamped"),
        }
    }
}

impl FromStr for OutputStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(OutputStyle::Plain),
            "timestamped" => Ok(OutputStyle::Timestamped),
            other => Err(format!(
                "Style must be 'plain' or 'timestamped', got '{other}'"
            )),
        }
    }
}

pub struct TranscriptFormatter;

impl TranscriptFormatter {
    /// Render segments as text. Lines are `\n`-separated with no trailing newline.
    pub fn format(segments: &[TranscriptSegment], style: OutputStyle) -> String {
        let mut lines: Vec<String> = Vec::new();
        match style {
            OutputStyle::Plain => {
                for (idx, segment) in segments.iter().enumerate() {
                    if idx > 0 {
                        lines.push(String::new());
                    }
                    lines.push(format!("{}:", segment.speaker_name));
                    lines.push(segment.text.trim().to_string());
                }
            }
            OutputStyle::Timestamped => {
                for segment in segments {
                    lines.push(format!(
                        "[{}] {}: {}",
                        format_timestamp(segment.start.unwrap_or(0.0)),
                        segment.speaker_name,
                        segment.text.trim()
                    ));
                }
            }
        }
        lines.join("\n")
    }

    /// Recover `(speaker_name, text)` pairs from plain-style output.
    ///
    /// Blocks are separated by blank lines; the first line of each block is
    /// the speaker name followed by `:`. Blocks without that header are skipped.
    pub fn parse_plain(text: &str) -> Vec<(String, String)> {
        text.split("\n\n")
            .filter(|block| !block.trim().is_empty())
            .filter_map(|block| {
                let block = block.trim_matches('\n');
                let (header, body) = block.split_once('\n').unwrap_or((block, ""));
                let name = header.strip_suffix(':')?;
                Some((name.to_string(), body.trim().to_string()))
            })
            .collect()
    }
}
