use serde::{Deserialize, Serialize};
use crate::enums::analysis_mode::AnalysisMode;
use crate::enums::mode_parameters::ModeParameters;
use crate::structs::language_label::LanguageLabel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub code: String,
    pub language: LanguageLabel,
    pub parameters: ModeParameters,
}

impl AnalysisRequest {
    pub fn new(code: impl Into<String>, language: LanguageLabel, parameters: ModeParameters) -> Self {
        Self {
            code: code.into(),
            language,
            parameters,
        }
    }

    pub fn mode(&self) -> AnalysisMode {
        self.parameters.mode()
    }
}
