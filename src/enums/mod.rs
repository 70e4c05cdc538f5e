pub mod ai_provider_error;
pub mod analysis_mode;
pub mod commands;
pub mod complexity;
pub mod detail_level;
pub mod mode_parameters;
pub mod repl_command;
pub mod validation_error;
