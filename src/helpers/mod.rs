pub mod code_stats;
pub mod config_helper;
pub mod export;
pub mod prompt_generator;
pub mod source_reader;
