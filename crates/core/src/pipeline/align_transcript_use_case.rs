use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::alignment::domain::aligner::Aligner;
use crate::alignment::domain::speaker_names::SpeakerNames;
use crate::alignment::domain::transcript_formatter::TranscriptFormatter;
use crate::alignment::domain::transcript_segment::TranscriptSegment;
use crate::diarization::domain::speaker_diarizer::SpeakerDiarizer;
use crate::diarization::domain::speaker_turn::distinct_labels;
use crate::output::domain::transcript_writer::TranscriptWriter;
use crate::shared::settings::AlignmentSettings;
use crate::transcript::domain::speech_recognizer::SpeechRecognizer;

use super::pipeline_logger::PipelineLogger;

const TOTAL_STAGES: usize = 4;

/// Result of one pipeline run.
#[derive(Debug)]
pub struct AlignmentOutcome {
    pub segments: Vec<TranscriptSegment>,
    pub output_path: PathBuf,
    /// Distinct diarization labels, in the order speaker names map onto them.
    pub speaker_labels: Vec<String>,
}

/// Produces a speaker-labeled transcript for one recording:
/// diarize, transcribe, align, then format and write.
pub struct AlignTranscriptUseCase {
    recognizer: Box<dyn SpeechRecognizer>,
    diarizer: Box<dyn SpeakerDiarizer>,
    writer: Box<dyn TranscriptWriter>,
    settings: AlignmentSettings,
    logger: Box<dyn PipelineLogger>,
}

impl AlignTranscriptUseCase {
    pub fn new(
        recognizer: Box<dyn SpeechRecognizer>,
        diarizer: Box<dyn SpeakerDiarizer>,
        writer: Box<dyn TranscriptWriter>,
        settings: AlignmentSettings,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            recognizer,
            diarizer,
            writer,
            settings,
            logger,
        }
    }

    pub fn run(&mut self, source: &Path) -> Result<AlignmentOutcome, Box<dyn std::error::Error>> {
        // 1. Speaker turns
        self.logger.stage(1, TOTAL_STAGES, "Performing speaker diarization");
        let started = Instant::now();
        let turns = self.diarizer.diarize(source)?;
        self.logger.timing("diarize", elapsed_ms(started));
        self.logger.metric("turns", turns.len() as f64);

        // 2. Words
        self.logger.stage(2, TOTAL_STAGES, "Transcribing");
        let started = Instant::now();
        let mut words = self.recognizer.transcribe(source)?;
        self.logger.timing("transcribe", elapsed_ms(started));
        self.logger.metric("words", words.len() as f64);

        // 3. Attribute words and merge into segments
        self.logger
            .stage(3, TOTAL_STAGES, "Aligning transcription with speakers");
        let started = Instant::now();
        let speaker_labels = distinct_labels(&turns);
        let mut names = SpeakerNames::positional(&speaker_labels, &self.settings.speaker_names);
        if self.settings.speaker_names.len() > speaker_labels.len() {
            log::warn!(
                "{} speaker names given but only {} speakers found; extra names ignored",
                self.settings.speaker_names.len(),
                speaker_labels.len()
            );
        }
        for (label, name) in &self.settings.speaker_map {
            names.insert(label.as_str(), name.as_str());
        }
        if !names.is_empty() {
            log::debug!("{} of {} speakers named", names.len(), speaker_labels.len());
        }
        let aligner = Aligner::new(self.settings.assignment, names);
        let segments = aligner.align(&mut words, &turns);
        self.logger.timing("align", elapsed_ms(started));
        self.logger.metric("speakers", speaker_labels.len() as f64);
        self.logger.metric("segments", segments.len() as f64);

        let unlabeled = words.iter().filter(|w| w.speaker.is_none()).count();
        if unlabeled > 0 {
            log::debug!("{unlabeled} of {} words matched no speaker turn", words.len());
        }

        // 4. Render and persist
        self.logger.stage(4, TOTAL_STAGES, "Writing transcript");
        let started = Instant::now();
        let text = TranscriptFormatter::format(&segments, self.settings.style);
        let output_path = self.writer.write_transcript(source, &text)?;
        self.logger.timing("write", elapsed_ms(started));
        self.logger
            .info(&format!("Output saved to '{}'", output_path.display()));
        self.logger.summary();

        Ok(AlignmentOutcome {
            segments,
            output_path,
            speaker_labels,
        })
    }
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::domain::speaker_assigner::AssignmentStrategy;
    use crate::alignment::domain::transcript_formatter::OutputStyle;
    use crate::diarization::domain::speaker_turn::SpeakerTurn;
    use crate::output::infrastructure::text_file_writer::TextFileWriter;
    use crate::pipeline::pipeline_logger::NullPipelineLogger;
    use crate::transcript::domain::word::Word;
    use std::fs;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    // ─── Stubs ───

    struct StubRecognizer {
        words: Vec<Word>,
    }

    impl SpeechRecognizer for StubRecognizer {
        fn transcribe(&self, _: &Path) -> Result<Vec<Word>, Box<dyn std::error::Error>> {
            Ok(self.words.clone())
        }
    }

    struct StubDiarizer {
        turns: Vec<SpeakerTurn>,
    }

    impl SpeakerDiarizer for StubDiarizer {
        fn diarize(&self, _: &Path) -> Result<Vec<SpeakerTurn>, Box<dyn std::error::Error>> {
            Ok(self.turns.clone())
        }
    }

    struct FailingDiarizer;

    impl SpeakerDiarizer for FailingDiarizer {
        fn diarize(&self, _: &Path) -> Result<Vec<SpeakerTurn>, Box<dyn std::error::Error>> {
            Err("diarization unavailable".into())
        }
    }

    struct StubWriter {
        written: Arc<Mutex<Option<String>>>,
    }

    impl TranscriptWriter for StubWriter {
        fn write_transcript(
            &self,
            _: &Path,
            contents: &str,
        ) -> Result<PathBuf, Box<dyn std::error::Error>> {
            *self.written.lock().unwrap() = Some(contents.to_string());
            Ok(PathBuf::from("stub_transcript.txt"))
        }
    }

    #[derive(Default)]
    struct Recorded {
        stages: Vec<String>,
        timings: Vec<String>,
    }

    struct RecordingLogger {
        recorded: Arc<Mutex<Recorded>>,
    }

    impl PipelineLogger for RecordingLogger {
        fn stage(&mut self, _current: usize, _total: usize, name: &str) {
            self.recorded.lock().unwrap().stages.push(name.to_string());
        }
        fn timing(&mut self, stage: &str, _duration_ms: f64) {
            self.recorded.lock().unwrap().timings.push(stage.to_string());
        }
        fn metric(&mut self, _name: &str, _value: f64) {}
        fn info(&mut self, _message: &str) {}
    }

    fn scenario_words() -> Vec<Word> {
        vec![
            Word::new("hi", 0.0, 0.5),
            Word::new("there", 0.5, 1.0),
            Word::new("bye", 2.0, 2.5),
        ]
    }

    fn scenario_turns() -> Vec<SpeakerTurn> {
        vec![
            SpeakerTurn::new(0.0, 1.2, "SPEAKER_00"),
            SpeakerTurn::new(1.8, 3.0, "SPEAKER_01"),
        ]
    }

    fn use_case(
        words: Vec<Word>,
        turns: Vec<SpeakerTurn>,
        settings: AlignmentSettings,
    ) -> (AlignTranscriptUseCase, Arc<Mutex<Option<String>>>) {
        let written = Arc::new(Mutex::new(None));
        let uc = AlignTranscriptUseCase::new(
            Box::new(StubRecognizer { words }),
            Box::new(StubDiarizer { turns }),
            Box::new(StubWriter {
                written: written.clone(),
            }),
            settings,
            Box::new(NullPipelineLogger),
        );
        (uc, written)
    }

    #[test]
    fn test_plain_transcript_written() {
        let (mut uc, written) =
            use_case(scenario_words(), scenario_turns(), AlignmentSettings::default());
        let outcome = uc.run(Path::new("meeting.wav")).unwrap();

        assert_eq!(outcome.segments.len(), 2);
        assert_eq!(outcome.output_path, PathBuf::from("stub_transcript.txt"));
        assert_eq!(
            written.lock().unwrap().as_deref(),
            Some("SPEAKER_00:\nhi there\n\nSPEAKER_01:\nbye")
        );
    }

    #[test]
    fn test_speaker_names_map_positionally_with_fallback() {
        let settings = AlignmentSettings {
            speaker_names: vec!["Alice".to_string()],
            ..AlignmentSettings::default()
        };
        let (mut uc, _) = use_case(scenario_words(), scenario_turns(), settings);
        let outcome = uc.run(Path::new("meeting.wav")).unwrap();

        assert_eq!(outcome.speaker_labels, vec!["SPEAKER_00", "SPEAKER_01"]);
        assert_eq!(outcome.segments[0].speaker_name, "Alice");
        assert_eq!(outcome.segments[1].speaker_name, "SPEAKER_01");
    }

    #[test]
    fn test_explicit_speaker_map_overrides_positional_names() {
        let settings = AlignmentSettings {
            speaker_names: vec!["Alice".to_string(), "Bob".to_string()],
            speaker_map: [("SPEAKER_01".to_string(), "Carol".to_string())].into(),
            ..AlignmentSettings::default()
        };
        let (mut uc, written) = use_case(scenario_words(), scenario_turns(), settings);
        uc.run(Path::new("meeting.wav")).unwrap();
        assert_eq!(
            written.lock().unwrap().as_deref(),
            Some("Alice:\nhi there\n\nCarol:\nbye")
        );
    }

    #[test]
    fn test_timestamped_style() {
        let settings = AlignmentSettings {
            style: OutputStyle::Timestamped,
            ..AlignmentSettings::default()
        };
        let (mut uc, written) = use_case(scenario_words(), scenario_turns(), settings);
        uc.run(Path::new("meeting.wav")).unwrap();
        assert_eq!(
            written.lock().unwrap().as_deref(),
            Some("[00:00:00] SPEAKER_00: hi there\n[00:00:02] SPEAKER_01: bye")
        );
    }

    #[test]
    fn test_overlap_strategy_recovers_unordered_turns() {
        let turns = vec![
            SpeakerTurn::new(1.8, 3.0, "SPEAKER_01"),
            SpeakerTurn::new(0.0, 1.2, "SPEAKER_00"),
        ];
        let settings = AlignmentSettings {
            assignment: AssignmentStrategy::Overlap,
            ..AlignmentSettings::default()
        };
        let (mut uc, _) = use_case(scenario_words(), turns, settings);
        let outcome = uc.run(Path::new("meeting.wav")).unwrap();
        let names: Vec<&str> = outcome
            .segments
            .iter()
            .map(|s| s.speaker_name.as_str())
            .collect();
        assert_eq!(names, vec!["SPEAKER_00", "SPEAKER_01"]);
    }

    #[test]
    fn test_no_words_writes_empty_transcript() {
        let (mut uc, written) = use_case(vec![], scenario_turns(), AlignmentSettings::default());
        let outcome = uc.run(Path::new("meeting.wav")).unwrap();
        assert!(outcome.segments.is_empty());
        assert_eq!(written.lock().unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_no_turns_yields_unknown_speaker() {
        let words = vec![Word::new("x", 0.0, 1.0)];
        let (mut uc, written) = use_case(words, vec![], AlignmentSettings::default());
        uc.run(Path::new("meeting.wav")).unwrap();
        assert_eq!(written.lock().unwrap().as_deref(), Some("UNKNOWN:\nx"));
    }

    #[test]
    fn test_diarizer_failure_propagates_and_skips_write() {
        let written = Arc::new(Mutex::new(None));
        let mut uc = AlignTranscriptUseCase::new(
            Box::new(StubRecognizer {
                words: scenario_words(),
            }),
            Box::new(FailingDiarizer),
            Box::new(StubWriter {
                written: written.clone(),
            }),
            AlignmentSettings::default(),
            Box::new(NullPipelineLogger),
        );
        let err = uc.run(Path::new("meeting.wav")).unwrap_err();
        assert!(err.to_string().contains("diarization unavailable"));
        assert!(written.lock().unwrap().is_none());
    }

    #[test]
    fn test_logger_sees_every_stage() {
        let recorded = Arc::new(Mutex::new(Recorded::default()));
        let mut uc = AlignTranscriptUseCase::new(
            Box::new(StubRecognizer {
                words: scenario_words(),
            }),
            Box::new(StubDiarizer {
                turns: scenario_turns(),
            }),
            Box::new(StubWriter {
                written: Arc::new(Mutex::new(None)),
            }),
            AlignmentSettings::default(),
            Box::new(RecordingLogger {
                recorded: recorded.clone(),
            }),
        );
        uc.run(Path::new("meeting.wav")).unwrap();

        let recorded = recorded.lock().unwrap();
        assert_eq!(recorded.stages.len(), TOTAL_STAGES);
        assert_eq!(
            recorded.timings,
            vec!["diarize", "transcribe", "align", "write"]
        );
    }

    #[test]
    fn test_writes_file_named_after_recording() {
        let tmp = TempDir::new().unwrap();
        let mut uc = AlignTranscriptUseCase::new(
            Box::new(StubRecognizer {
                words: scenario_words(),
            }),
            Box::new(StubDiarizer {
                turns: scenario_turns(),
            }),
            Box::new(TextFileWriter::new(tmp.path())),
            AlignmentSettings::default(),
            Box::new(NullPipelineLogger),
        );
        let outcome = uc.run(Path::new("/recordings/standup.m4a")).unwrap();

        assert_eq!(outcome.output_path, tmp.path().join("standup_transcript.txt"));
        let text = fs::read_to_string(&outcome.output_path).unwrap();
        assert_eq!(text, "SPEAKER_00:\nhi there\n\nSPEAKER_01:\nbye");
    }
}
