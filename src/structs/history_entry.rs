use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::config::constants::HISTORY_PREVIEW_CHARS;
use crate::enums::analysis_mode::AnalysisMode;
use crate::structs::analysis_failure::{render_outcome, AnalysisOutcome};
use crate::structs::language_label::LanguageLabel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub mode: AnalysisMode,
    pub language: LanguageLabel,
    pub result: String,
    /// False when `result` is a rendered failure rather than model output.
    pub succeeded: bool,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(mode: AnalysisMode, language: LanguageLabel, result: String, succeeded: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            mode,
            language,
            result,
            succeeded,
            created_at: Utc::now(),
        }
    }

    pub fn from_outcome(mode: AnalysisMode, language: LanguageLabel, outcome: &AnalysisOutcome) -> Self {
        Self::new(mode, language, render_outcome(outcome), outcome.is_ok())
    }

    pub fn title(&self) -> String {
        format!("{} - {}", self.mode, self.language)
    }

    pub fn preview(&self) -> String {
        let preview: String = self.result.chars().take(HISTORY_PREVIEW_CHARS).collect();
        format!("{}...", preview)
    }
}
