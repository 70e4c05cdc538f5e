pub mod ai_provider;
pub mod lexer_guesser;
