use std::time::Duration;

pub const GOOGLE_API_KEY_ENV: &str = "GOOGLE_API_KEY";
pub const DEFAULT_PROVIDER: &str = "gemini";
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const CONFIG_DIR_NAME: &str = "code-explainer";
pub const CONFIG_FILE_NAME: &str = "config.toml";

// Generation settings sent with every analysis request
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_TOP_P: f64 = 1.0;
pub const DEFAULT_TOP_K: u32 = 1;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 8192;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_RATE_LIMIT_PER_MINUTE: u32 = 50;
pub const BURST_LIMIT_PER_SECOND: u32 = 5;

pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_BASE_DELAY_MS: u64 = 1000;
pub const DEFAULT_MAX_DELAY_MS: u64 = 30_000;
pub const DEFAULT_JITTER_MS: u64 = 250;

pub const DEFAULT_HISTORY_CAPACITY: usize = 20;
pub const DEFAULT_HISTORY_DISPLAY_WINDOW: usize = 5;
pub const HISTORY_PREVIEW_CHARS: usize = 150;

pub const MIN_SNIPPET_CHARS: usize = 10;
pub const MAX_SNIPPET_CHARS: usize = 50_000;

pub const AUTO_DETECT_LABEL: &str = "Auto-detect";
pub const UNKNOWN_LABEL: &str = "Unknown";

pub const EMPTY_RESPONSE_MESSAGE: &str = "AI returned an empty response. Please try again.";
pub const STATUS_PROBE_PROMPT: &str = "Ping";

pub const EXPORT_FILE_PREFIX: &str = "code_analysis_";

/// Languages offered for manual selection, in display order.
pub const SUPPORTED_LANGUAGES: [&str; 30] = [
    "Auto-detect", "Python", "JavaScript", "TypeScript", "Java", "C++", "C", "C#",
    "Go", "Rust", "Swift", "Kotlin", "PHP", "Ruby", "SQL", "HTML", "CSS",
    "Shell", "PowerShell", "R", "Dart", "Scala", "Haskell", "Lua", "Perl",
    "Objective-C", "Assembly", "MATLAB", "Fortran", "COBOL",
];

/// Grammar-name fragments mapped to catalog labels. Checked in order, first hit wins.
pub const GRAMMAR_NORMALIZATION: &[(&str, &str)] = &[
    ("Python", "Python"),
    ("JavaScript", "JavaScript"),
    ("TypeScript", "TypeScript"),
    ("C++", "C++"),
    ("Java", "Java"),
    ("C#", "C#"),
    ("Go", "Go"),
    ("Rust", "Rust"),
    ("SQL", "SQL"),
    ("HTML", "HTML"),
    ("CSS", "CSS"),
];

pub fn millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}

pub fn seconds(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
