use async_trait::async_trait;
use reqwest::Client;
use crate::config::constants::seconds;
use crate::enums::ai_provider_error::AiProviderError;
use crate::errors::ExplainerResult;
use crate::services::rate_limiter::ApiRateLimiter;
use crate::structs::ai::gemini::gemini_content::GeminiContent;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::ai::gemini::gemini_request::GeminiRequest;
use crate::structs::ai::gemini::gemini_response::{GeminiErrorEnvelope, GeminiResponse};
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::AiProvider;

#[derive(Clone)]
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    generation_config: GeminiGenerationConfig,
    rate_limiter: ApiRateLimiter,
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GeminiProvider {
    pub fn new(api_key: String, config: &AiConfig) -> ExplainerResult<Self> {
        let client = Client::builder()
            .timeout(seconds(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            model: config.model.clone(),
            generation_config: GeminiGenerationConfig::from(config),
            rate_limiter: ApiRateLimiter::new(config.rate_limit_per_minute),
        })
    }

    fn get_request(&self, prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent::user(prompt)],
            generation_config: Some(self.generation_config.clone()),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn map_error_response(status: u16, body: &str) -> AiProviderError {
        let message = serde_json::from_str::<GeminiErrorEnvelope>(body)
            .map(|envelope| match envelope.error.status {
                Some(kind) => format!("{} ({})", envelope.error.message, kind),
                None => envelope.error.message,
            })
            .unwrap_or_else(|_| body.trim().to_string());

        AiProviderError::from_status(status, message)
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, AiProviderError> {
        self.rate_limiter.acquire().await;

        log::debug!("📦 Request model: {} ({} prompt chars)", self.model, prompt.chars().count());

        let response = self.client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&self.get_request(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::debug!("❌ Gemini API error response ({}): {}", status, error_text);
            return Err(Self::map_error_response(status.as_u16(), &error_text));
        }

        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))?;

        if let Some(reason) = body.candidates.first().and_then(|c| c.finish_reason.as_deref()) {
            log::debug!("Gemini finish reason: {}", reason);
        }

        Ok(body.text())
    }

    fn model(&self) -> String {
        self.model.clone()
    }
}
