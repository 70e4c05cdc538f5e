use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use crate::config::constants::{EMPTY_RESPONSE_MESSAGE, STATUS_PROBE_PROMPT};
use crate::errors::{ExplainerError, ExplainerResult};
use crate::services::ai_providers::gemini::GeminiProvider;
use crate::services::retry_policy::RetryPolicy;
use crate::structs::analysis_failure::{AnalysisFailure, AnalysisOutcome};
use crate::structs::config::config::Config;
use crate::traits::ai_provider::AiProvider;

/// Sends prompts to the model, retrying transient failures with backoff.
pub struct CodeAnalyzer {
    ai_provider: Arc<dyn AiProvider>,
    retry_policy: RetryPolicy,
}

impl CodeAnalyzer {
    pub fn new(ai_provider: Arc<dyn AiProvider>, retry_policy: RetryPolicy) -> Self {
        Self {
            ai_provider,
            retry_policy,
        }
    }

    /// Builds a Gemini-backed analyzer. The key comes from `api_key` if given and non-blank,
    /// otherwise from the environment variable named by `ai.api_key_env`.
    pub fn from_config(api_key: Option<String>, config: &Config) -> ExplainerResult<Self> {
        let api_key = Self::resolve_api_key(api_key, &config.ai.api_key_env)
            .ok_or_else(|| ExplainerError::missing_credential(&config.ai.api_key_env))?;

        let provider = GeminiProvider::new(api_key, &config.ai)?;
        Ok(Self::new(Arc::new(provider), RetryPolicy::from(&config.retry)))
    }

    pub fn resolve_api_key(explicit: Option<String>, env_var: &str) -> Option<String> {
        explicit
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var(env_var).ok().filter(|key| !key.trim().is_empty()))
            .map(|key| key.trim().to_string())
    }

    pub fn model(&self) -> String {
        self.ai_provider.model()
    }

    /// One remote call. A reply without text becomes the empty-response notice.
    pub async fn analyze(&self, prompt: &str) -> AnalysisOutcome {
        match self.ai_provider.generate(prompt).await {
            Ok(Some(text)) => Ok(text),
            Ok(None) => {
                log::warn!("⚠️ Model returned no text");
                Ok(EMPTY_RESPONSE_MESSAGE.to_string())
            }
            Err(e) => Err(AnalysisFailure::Service(e)),
        }
    }

    /// Calls [`analyze`](Self::analyze) up to `max_retries` times (at least once),
    /// sleeping between attempts. Only transient failures are retried.
    pub async fn analyze_with_retry(&self, prompt: &str, max_retries: u32) -> AnalysisOutcome {
        let policy = self.retry_policy.with_max_retries(max_retries);
        let attempts = policy.attempts();
        let attempt = AtomicU32::new(0);
        let counter = &attempt;

        let outcome = backoff::future::retry_notify(
            policy.backoff(),
            move || async move {
                let current = counter.fetch_add(1, Ordering::SeqCst) + 1;
                log::debug!("🤖 Analysis attempt {}/{}", current, attempts);

                match self.analyze(prompt).await {
                    Ok(text) => Ok(text),
                    Err(AnalysisFailure::Service(error)) if error.is_transient() => {
                        Err(backoff::Error::transient(AnalysisFailure::Service(error)))
                    }
                    Err(failure) => Err(backoff::Error::Permanent(failure)),
                }
            },
            |failure: AnalysisFailure, delay: Duration| {
                log::warn!("⚠️ Attempt failed ({}), retrying in {:.2}s", failure, delay.as_secs_f64());
            },
        )
        .await;

        match outcome {
            Err(AnalysisFailure::Service(error)) if error.is_transient() => {
                let attempts = attempt.load(Ordering::SeqCst);
                log::error!("❌ Giving up after {} attempts: {}", attempts, error);
                Err(AnalysisFailure::Exhausted { attempts, last: error })
            }
            Err(failure) => {
                log::error!("❌ Analysis failed: {}", failure);
                Err(failure)
            }
            Ok(text) => Ok(text),
        }
    }

    /// Default retry budget from the configured policy.
    pub async fn analyze_with_default_retry(&self, prompt: &str) -> AnalysisOutcome {
        self.analyze_with_retry(prompt, self.retry_policy.max_retries).await
    }

    /// Liveness probe: true when a minimal request completes without error.
    pub async fn check_api_status(&self) -> bool {
        match self.ai_provider.generate(STATUS_PROBE_PROMPT).await {
            Ok(_) => true,
            Err(e) => {
                log::debug!("API status probe failed: {}", e);
                false
            }
        }
    }

    /// Upper bound on time spent sleeping between attempts, ignoring jitter.
    pub fn worst_case_backoff(&self, max_retries: u32) -> Duration {
        let policy = self.retry_policy.with_max_retries(max_retries);
        (0..policy.attempts().saturating_sub(1)).map(|i| policy.base_delay_for(i)).sum()
    }
}
