use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use code_explainer::enums::ai_provider_error::AiProviderError;
use code_explainer::services::analysis_session::AnalysisSession;
use code_explainer::services::code_analyzer::CodeAnalyzer;
use code_explainer::services::language_classifier::LanguageClassifier;
use code_explainer::services::retry_policy::RetryPolicy;
use code_explainer::structs::config::history_config::HistoryConfig;
use code_explainer::traits::ai_provider::AiProvider;

type Reply = Result<Option<String>, AiProviderError>;

/// Plays back canned replies in order and records every prompt it receives.
/// Once the script runs out it repeats the last reply.
#[derive(Clone)]
pub struct ScriptedProvider {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedProvider {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn always(reply: Reply) -> Self {
        Self::new(vec![reply])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for ScriptedProvider {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, AiProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        let mut replies = self.replies.lock().unwrap();
        if replies.len() > 1 {
            replies.pop_front().unwrap()
        } else {
            replies.front().cloned().unwrap()
        }
    }

    fn model(&self) -> String {
        "scripted".to_string()
    }
}

pub fn analyzer(provider: &ScriptedProvider) -> CodeAnalyzer {
    CodeAnalyzer::new(Arc::new(provider.clone()), RetryPolicy::default().without_jitter())
}

pub fn session(provider: &ScriptedProvider) -> AnalysisSession {
    AnalysisSession::new(LanguageClassifier::default(), analyzer(provider), &HistoryConfig::default())
}
