use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use diarscribe_core::alignment::domain::speaker_assigner::AssignmentStrategy;
use diarscribe_core::alignment::domain::transcript_formatter::OutputStyle;
use diarscribe_core::diarization::infrastructure::diarizer_factory::create_diarizer;
use diarscribe_core::output::infrastructure::text_file_writer::TextFileWriter;
use diarscribe_core::pipeline::align_transcript_use_case::AlignTranscriptUseCase;
use diarscribe_core::pipeline::pipeline_logger::StdoutPipelineLogger;
use diarscribe_core::shared::settings::AlignmentSettings;
use diarscribe_core::transcript::infrastructure::json_word_reader::JsonWordReader;

/// Merge word timestamps and speaker turns into a speaker-labeled transcript.
#[derive(Parser)]
#[command(name = "diarscribe")]
struct Cli {
    /// Recording the transcript belongs to; its basename names the output file.
    audio: PathBuf,

    /// Word timestamps (JSON) from the transcription run.
    #[arg(long)]
    words: PathBuf,

    /// Speaker turns from the diarization run (.rttm or JSON).
    #[arg(long)]
    turns: PathBuf,

    /// Names for the speakers, matched to the sorted speaker labels.
    #[arg(long, num_args = 1..)]
    speaker_names: Option<Vec<String>>,

    /// Name a specific speaker label, e.g. SPEAKER_01=Bob. Repeatable;
    /// wins over --speaker-names.
    #[arg(long = "speaker-map", value_name = "LABEL=NAME", value_parser = parse_speaker_entry)]
    speaker_map: Vec<(String, String)>,

    /// Output style: plain or timestamped.
    #[arg(long)]
    style: Option<String>,

    /// Word-to-speaker assignment: sweep or overlap.
    #[arg(long)]
    assignment: Option<String>,

    /// Directory the transcript is written to.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Settings file (JSON). Defaults to the user config directory.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let settings = resolve_settings(&cli)?;
    log::info!(
        "Assignment: {}, style: {}",
        settings.assignment,
        settings.style
    );

    let mut use_case = AlignTranscriptUseCase::new(
        Box::new(JsonWordReader::new(&cli.words)),
        create_diarizer(&cli.turns),
        Box::new(TextFileWriter::new(&cli.output_dir)),
        settings,
        Box::new(StdoutPipelineLogger::new()),
    );
    let outcome = use_case.run(&cli.audio)?;

    eprintln!(
        "\nTranscription complete. Output saved to '{}'",
        outcome.output_path.display()
    );
    Ok(())
}

/// Settings file values, overridden by any flags given on the command line.
fn resolve_settings(cli: &Cli) -> Result<AlignmentSettings, Box<dyn std::error::Error>> {
    let mut settings = AlignmentSettings::resolve(cli.config.as_deref())?;
    if let Some(style) = &cli.style {
        settings.style = style.parse::<OutputStyle>()?;
    }
    if let Some(assignment) = &cli.assignment {
        settings.assignment = assignment.parse::<AssignmentStrategy>()?;
    }
    if let Some(names) = &cli.speaker_names {
        settings.speaker_names = names.clone();
    }
    settings.speaker_map.extend(cli.speaker_map.iter().cloned());
    Ok(settings)
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    require_file(&cli.words, "Word timestamps file")?;
    require_file(&cli.turns, "Speaker turns file")?;
    if cli.audio.file_stem().is_none() {
        return Err(format!(
            "Cannot derive a transcript name from '{}'",
            cli.audio.display()
        )
        .into());
    }
    if let Some(names) = &cli.speaker_names {
        if names.iter().any(|n| n.trim().is_empty()) {
            return Err("Speaker names must not be empty".into());
        }
    }
    Ok(())
}

fn parse_speaker_entry(entry: &str) -> Result<(String, String), String> {
    let (label, name) = entry
        .split_once('=')
        .ok_or_else(|| format!("expected LABEL=NAME, got '{entry}'"))?;
    let (label, name) = (label.trim(), name.trim());
    if label.is_empty() || name.is_empty() {
        return Err(format!("expected LABEL=NAME, got '{entry}'"));
    }
    Ok((label.to_string(), name.to_string()))
}

fn require_file(path: &Path, what: &str) -> Result<(), Box<dyn std::error::Error>> {
    if !path.is_file() {
        return Err(format!("{what} not found at '{}'", path.display()).into());
    }
    Ok(())
}
