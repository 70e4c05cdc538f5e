pub mod ai_providers;
pub mod analysis_session;
pub mod code_analyzer;
pub mod heuristic_lexer;
pub mod input_validator;
pub mod language_classifier;
pub mod rate_limiter;
pub mod retry_policy;
