pub mod ai;
pub mod analysis_failure;
pub mod analysis_history;
pub mod analysis_request;
pub mod cli;
pub mod code_stats;
pub mod config;
pub mod history_entry;
pub mod language_label;
pub mod prepared_analysis;
