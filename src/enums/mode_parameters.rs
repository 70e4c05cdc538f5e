use serde::{Deserialize, Serialize};
use crate::enums::analysis_mode::AnalysisMode;
use crate::enums::detail_level::DetailLevel;

/// Extra inputs each analysis mode needs on top of the primary snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeParameters {
    Explain { detail_level: DetailLevel },
    AskQuestion { question: String },
    Debug { error_message: Option<String> },
    Optimize,
    Compare { second_code: String },
}

impl ModeParameters {
    pub fn mode(&self) -> AnalysisMode {
        match self {
            ModeParameters::Explain { .. } => AnalysisMode::Explain,
            ModeParameters::AskQuestion { .. } => AnalysisMode::AskQuestion,
            ModeParameters::Debug { .. } => AnalysisMode::Debug,
            ModeParameters::Optimize => AnalysisMode::Optimize,
            ModeParameters::Compare { .. } => AnalysisMode::Compare,
        }
    }
}
