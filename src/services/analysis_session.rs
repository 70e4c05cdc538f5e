use crate::enums::validation_error::ValidationError;
use crate::helpers::prompt_generator::generate_prompt;
use crate::services::code_analyzer::CodeAnalyzer;
use crate::services::input_validator::InputValidator;
use crate::services::language_classifier::LanguageClassifier;
use crate::structs::analysis_failure::AnalysisOutcome;
use crate::structs::analysis_history::AnalysisHistory;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::config::history_config::HistoryConfig;
use crate::structs::history_entry::HistoryEntry;
use crate::structs::language_label::LanguageLabel;
use crate::structs::prepared_analysis::PreparedAnalysis;

/// Drives one request at a time through validation, prompt building and the model call,
/// recording every completed call in a bounded history.
pub struct AnalysisSession {
    classifier: LanguageClassifier,
    analyzer: CodeAnalyzer,
    history: AnalysisHistory,
    display_window: usize,
}

impl AnalysisSession {
    pub fn new(classifier: LanguageClassifier, analyzer: CodeAnalyzer, history_config: &HistoryConfig) -> Self {
        Self {
            classifier,
            analyzer,
            history: AnalysisHistory::new(history_config.capacity),
            display_window: history_config.display_window,
        }
    }

    /// Validation and prompt building need no credential, so callers can reject bad
    /// input before an analyzer exists.
    pub fn prepare_with(classifier: &LanguageClassifier, request: &AnalysisRequest) -> Result<PreparedAnalysis, ValidationError> {
        InputValidator::validate_request(request)?;

        let language = classifier.resolve(&request.language, &request.code);
        let prompt = generate_prompt(&request.code, &language, &request.parameters);
        log::debug!("📝 Built {} prompt for {} ({} chars)", request.mode(), language, prompt.len());

        Ok(PreparedAnalysis {
            mode: request.mode(),
            language,
            prompt,
        })
    }

    pub fn prepare(&self, request: &AnalysisRequest) -> Result<PreparedAnalysis, ValidationError> {
        Self::prepare_with(&self.classifier, request)
    }

    /// Sends the prompt and appends the rendered outcome to history, failures included.
    pub async fn execute(&mut self, prepared: PreparedAnalysis, max_retries: u32) -> AnalysisOutcome {
        let outcome = self.analyzer.analyze_with_retry(&prepared.prompt, max_retries).await;
        self.history.push(HistoryEntry::from_outcome(prepared.mode, prepared.language, &outcome));
        outcome
    }

    pub async fn run(&mut self, request: &AnalysisRequest, max_retries: u32) -> Result<AnalysisOutcome, ValidationError> {
        let prepared = self.prepare(request)?;
        Ok(self.execute(prepared, max_retries).await)
    }

    pub fn resolve_language(&self, selected: &LanguageLabel, code: &str) -> LanguageLabel {
        self.classifier.resolve(selected, code)
    }

    pub fn analyzer(&self) -> &CodeAnalyzer {
        &self.analyzer
    }

    pub fn history(&self) -> &AnalysisHistory {
        &self.history
    }

    /// The newest entries, as many as the display window allows.
    pub fn recent_history(&self) -> Vec<&HistoryEntry> {
        self.history.recent(self.display_window)
    }
}
