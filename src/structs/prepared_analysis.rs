use crate::enums::analysis_mode::AnalysisMode;
use crate::structs::language_label::LanguageLabel;

/// A validated request whose prompt has been built and is ready to send once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedAnalysis {
    pub mode: AnalysisMode,
    pub language: LanguageLabel,
    pub prompt: String,
}
