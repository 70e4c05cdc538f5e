use std::fmt;
use crate::enums::ai_provider_error::AiProviderError;

/// Terminal failure of an analysis request after the retry policy has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisFailure {
    /// A failure that retrying would not fix (bad request, auth, malformed body).
    Service(AiProviderError),
    /// Every attempt hit a transient failure.
    Exhausted {
        attempts: u32,
        last: AiProviderError,
    },
}

pub type AnalysisOutcome = Result<String, AnalysisFailure>;

impl AnalysisFailure {
    pub fn is_transient(&self) -> bool {
        match self {
            AnalysisFailure::Service(error) => error.is_transient(),
            AnalysisFailure::Exhausted { .. } => true,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            AnalysisFailure::Service(error) => format!("Error during analysis: {}", error),
            AnalysisFailure::Exhausted { attempts, last } => {
                format!("Failed after {} attempts: {}", attempts, last)
            }
        }
    }
}

impl fmt::Display for AnalysisFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for AnalysisFailure {}

/// Display adapter: markdown on success, a readable error line otherwise.
pub fn render_outcome(outcome: &AnalysisOutcome) -> String {
    match outcome {
        Ok(text) => text.clone(),
        Err(failure) => failure.user_message(),
    }
}
