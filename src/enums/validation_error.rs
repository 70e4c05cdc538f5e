use thiserror::Error;
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Code snippet cannot be empty.")]
    EmptyInput,

    #[error("Code snippet is too short to analyze (minimum 10 characters).")]
    TooShort { length: usize },

    #[error("Code snippet is too long (maximum 50,000 characters).")]
    TooLong { length: usize },

    #[error("Please provide the second code snippet for comparison.")]
    MissingSecondSnippet,

    #[error("Second code snippet: {0}")]
    InvalidSecondSnippet(Box<ValidationError>),

    #[error("Please enter a question to ask.")]
    MissingQuestion,
}
