pub mod prompts;
pub mod samples;
