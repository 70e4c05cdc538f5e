use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    #[serde(default = "ConfigHelper::default_max_retries")]
    pub max_retries: u32,

    #[serde(default = "ConfigHelper::default_base_delay_ms")]
    pub base_delay_ms: u64,

    #[serde(default = "ConfigHelper::default_max_delay_ms")]
    pub max_delay_ms: u64,

    #[serde(default = "ConfigHelper::default_jitter_ms")]
    pub jitter_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: ConfigHelper::default_max_retries(),
            base_delay_ms: ConfigHelper::default_base_delay_ms(),
            max_delay_ms: ConfigHelper::default_max_delay_ms(),
            jitter_ms: ConfigHelper::default_jitter_ms(),
        }
    }
}
