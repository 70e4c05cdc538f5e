use serde::{Deserialize, Serialize};
use crate::structs::config::ai_config::AiConfig;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerationConfig {
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub top_k: Option<u32>,
    pub max_output_tokens: Option<u32>,
}

impl From<&AiConfig> for GeminiGenerationConfig {
    fn from(config: &AiConfig) -> Self {
        Self {
            temperature: Some(config.temperature),
            top_p: Some(config.top_p),
            top_k: Some(config.top_k),
            max_output_tokens: Some(config.max_output_tokens),
        }
    }
}
