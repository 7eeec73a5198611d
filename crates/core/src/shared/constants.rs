/// Label given to words that no speaker turn covers.
pub const UNKNOWN_SPEAKER: &str = "UNKNOWN";

/// Appended to the recording's file stem to name the transcript file.
pub const TRANSCRIPT_SUFFIX: &str = "_transcript.txt";

pub const RTTM_EXTENSION: &str = "rttm";

/// Directory under the platform config dir that holds `settings.json`.
pub const SETTINGS_DIR_NAME: &str = "diarscribe";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
