use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexerError {
    #[error("no grammar accepts the input: {0}")]
    NoMatch(String),
    #[error("lexer failure: {0}")]
    Internal(String),
}

/// Best-effort guess of the grammar a piece of source text is written in.
pub trait LexerGuesser: Send + Sync {
    /// Returns the guessed grammar's name, e.g. `"Python"` or `"Transact-SQL"`.
    fn guess_grammar(&self, code: &str) -> Result<String, LexerError>;
}
