pub mod ai_config;
pub mod config;
pub mod history_config;
pub mod output_config;
pub mod retry_config;
