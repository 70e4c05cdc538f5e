use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AiConfig {
    #[serde(default = "ConfigHelper::default_provider")]
    pub provider: String,

    #[serde(default = "ConfigHelper::default_model")]
    pub model: String,

    #[serde(default = "ConfigHelper::default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_temperature")]
    pub temperature: f64,

    #[serde(default = "ConfigHelper::default_top_p")]
    pub top_p: f64,

    #[serde(default = "ConfigHelper::default_top_k")]
    pub top_k: u32,

    #[serde(default = "ConfigHelper::default_max_output_tokens")]
    pub max_output_tokens: u32,

    #[serde(default = "ConfigHelper::default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_rate_limit_per_minute")]
    pub rate_limit_per_minute: u32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: ConfigHelper::default_provider(),
            model: ConfigHelper::default_model(),
            api_key_env: ConfigHelper::default_api_key_env(),
            base_url: ConfigHelper::default_base_url(),
            temperature: ConfigHelper::default_temperature(),
            top_p: ConfigHelper::default_top_p(),
            top_k: ConfigHelper::default_top_k(),
            max_output_tokens: ConfigHelper::default_max_output_tokens(),
            request_timeout_secs: ConfigHelper::default_request_timeout_secs(),
            rate_limit_per_minute: ConfigHelper::default_rate_limit_per_minute(),
        }
    }
}
