use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum AnalysisMode {
    #[value(alias = "explain-code")]
    Explain,
    #[value(name = "ask", alias = "ask-question")]
    AskQuestion,
    #[value(alias = "debug-code")]
    Debug,
    #[value(alias = "optimize-code")]
    Optimize,
    #[value(alias = "compare-code")]
    Compare,
}

impl AnalysisMode {
    pub const ALL: [AnalysisMode; 5] = [
        AnalysisMode::Explain,
        AnalysisMode::AskQuestion,
        AnalysisMode::Debug,
        AnalysisMode::Optimize,
        AnalysisMode::Compare,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            AnalysisMode::Explain => "Explain Code",
            AnalysisMode::AskQuestion => "Ask Question",
            AnalysisMode::Debug => "Debug Code",
            AnalysisMode::Optimize => "Optimize Code",
            AnalysisMode::Compare => "Compare Code",
        }
    }

    /// Lowercased display name with spaces replaced by underscores, e.g. `explain_code`.
    pub fn slug(&self) -> String {
        self.display_name().to_lowercase().replace(' ', "_")
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_follows_display_name() {
        assert_eq!(AnalysisMode::Explain.slug(), "explain_code");
        assert_eq!(AnalysisMode::AskQuestion.slug(), "ask_question");
        assert_eq!(AnalysisMode::Compare.slug(), "compare_code");
    }
}
