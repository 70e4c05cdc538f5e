pub mod command_runner;
pub mod interactive_session;
