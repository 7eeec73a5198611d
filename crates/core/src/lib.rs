pub mod alignment {
    pub mod domain {
        pub mod aligner;
        pub mod speaker_assigner;
        pub mod speaker_grouper;
        pub mod speaker_names;
        pub mod transcript_formatter;
        pub mod transcript_segment;
    }
}

pub mod transcript {
    pub mod domain {
        pub mod speech_recognizer;
        pub mod word;
    }
    pub mod infrastructure {
        pub mod json_word_reader;
    }
}

pub mod diarization {
    pub mod domain {
        pub mod speaker_diarizer;
        pub mod speaker_turn;
    }
    pub mod infrastructure {
        pub mod diarizer_factory;
        pub mod json_turn_reader;
        pub mod rttm_diarizer;
    }
}

pub mod output {
    pub mod domain {
        pub mod transcript_writer;
    }
    pub mod infrastructure {
        pub mod text_file_writer;
    }
}

pub mod pipeline {
    pub mod align_transcript_use_case;
    pub mod pipeline_logger;
}

pub mod shared {
    pub mod constants;
    pub mod input_error;
    pub mod interval;
    pub mod settings;
    pub mod timestamp;
}
