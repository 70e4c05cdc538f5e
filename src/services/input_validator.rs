use crate::config::constants::{MAX_SNIPPET_CHARS, MIN_SNIPPET_CHARS};
use crate::enums::mode_parameters::ModeParameters;
use crate::enums::validation_error::ValidationError;
use crate::structs::analysis_request::AnalysisRequest;

pub struct InputValidator;

impl InputValidator {
    /// Checks a snippet's trimmed length against the accepted bounds.
    pub fn validate(code: &str) -> Result<(), ValidationError> {
        let length = code.trim().chars().count();

        if length == 0 {
            return Err(ValidationError::EmptyInput);
        }
        if length < MIN_SNIPPET_CHARS {
            return Err(ValidationError::TooShort { length });
        }
        if length > MAX_SNIPPET_CHARS {
            return Err(ValidationError::TooLong { length });
        }
        Ok(())
    }

    /// Validates the primary snippet, then the mode-specific inputs.
    pub fn validate_request(request: &AnalysisRequest) -> Result<(), ValidationError> {
        Self::validate(&request.code)?;

        match &request.parameters {
            ModeParameters::Compare { second_code } => {
                if second_code.trim().is_empty() {
                    return Err(ValidationError::MissingSecondSnippet);
                }
                Self::validate(second_code)
                    .map_err(|e| ValidationError::InvalidSecondSnippet(Box::new(e)))
            }
            ModeParameters::AskQuestion { question } if question.trim().is_empty() => {
                Err(ValidationError::MissingQuestion)
            }
            _ => Ok(()),
        }
    }
}
