use crate::config::constants::{
    DEFAULT_BASE_DELAY_MS, DEFAULT_GEMINI_BASE_URL, DEFAULT_HISTORY_CAPACITY,
    DEFAULT_HISTORY_DISPLAY_WINDOW, DEFAULT_JITTER_MS, DEFAULT_MAX_DELAY_MS,
    DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_MAX_RETRIES, DEFAULT_MODEL, DEFAULT_PROVIDER,
    DEFAULT_RATE_LIMIT_PER_MINUTE, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_TEMPERATURE,
    DEFAULT_TOP_K, DEFAULT_TOP_P, GOOGLE_API_KEY_ENV,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_provider() -> String {
        DEFAULT_PROVIDER.to_string()
    }

    pub fn default_model() -> String {
        DEFAULT_MODEL.to_string()
    }

    pub fn default_api_key_env() -> String {
        GOOGLE_API_KEY_ENV.to_string()
    }

    pub fn default_base_url() -> String {
        DEFAULT_GEMINI_BASE_URL.to_string()
    }

    pub fn default_temperature() -> f64 {
        DEFAULT_TEMPERATURE
    }

    pub fn default_top_p() -> f64 {
        DEFAULT_TOP_P
    }

    pub fn default_top_k() -> u32 {
        DEFAULT_TOP_K
    }

    pub fn default_max_output_tokens() -> u32 {
        DEFAULT_MAX_OUTPUT_TOKENS
    }

    pub fn default_request_timeout_secs() -> u64 {
        DEFAULT_REQUEST_TIMEOUT_SECS
    }

    pub fn default_rate_limit_per_minute() -> u32 {
        DEFAULT_RATE_LIMIT_PER_MINUTE
    }

    pub fn default_max_retries() -> u32 {
        DEFAULT_MAX_RETRIES
    }

    pub fn default_base_delay_ms() -> u64 {
        DEFAULT_BASE_DELAY_MS
    }

    pub fn default_max_delay_ms() -> u64 {
        DEFAULT_MAX_DELAY_MS
    }

    pub fn default_jitter_ms() -> u64 {
        DEFAULT_JITTER_MS
    }

    pub fn default_history_capacity() -> usize {
        DEFAULT_HISTORY_CAPACITY
    }

    pub fn default_display_window() -> usize {
        DEFAULT_HISTORY_DISPLAY_WINDOW
    }

    pub fn default_output_dir() -> String {
        ".".to_string()
    }

    pub fn default_save_markdown() -> bool {
        false
    }
}
