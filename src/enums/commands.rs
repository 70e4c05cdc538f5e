use std::path::PathBuf;
use clap::{Args, Subcommand};
use crate::enums::analysis_mode::AnalysisMode;
use crate::enums::detail_level::DetailLevel;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a snippet to the model and print the markdown analysis
    Analyze(AnalyzeArgs),
    /// Guess the language of a snippet
    Detect {
        #[clap(short, long)]
        file: Option<PathBuf>,
    },
    /// Print line, character, complexity and function statistics
    Stats {
        #[clap(short, long)]
        file: Option<PathBuf>,
    },
    /// List the selectable languages
    Languages,
    /// List built-in sample snippets, or print one
    Samples {
        name: Option<String>,
    },
    /// Check that the API key works and the service is reachable
    Status {
        #[clap(long)]
        api_key: Option<String>,
    },
    /// Run several analyses in one session with history
    Interactive {
        #[clap(long)]
        api_key: Option<String>,
    },
    Init,
    Validate,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[clap(short, long, value_enum, default_value_t = AnalysisMode::Explain)]
    pub mode: AnalysisMode,

    /// Read the snippet from a file instead of stdin
    #[clap(short, long, conflicts_with = "sample")]
    pub file: Option<PathBuf>,

    /// Use a built-in sample snippet as input
    #[clap(long)]
    pub sample: Option<String>,

    /// Second snippet for compare mode
    #[clap(long)]
    pub second_file: Option<PathBuf>,

    #[clap(short, long)]
    pub question: Option<String>,

    /// Error message or symptom for debug mode
    #[clap(short, long)]
    pub error: Option<String>,

    #[clap(short, long, value_enum, default_value_t = DetailLevel::Medium)]
    pub detail: DetailLevel,

    #[clap(short, long, default_value = "Auto-detect")]
    pub language: String,

    #[clap(short, long)]
    pub retries: Option<u32>,

    #[clap(long)]
    pub api_key: Option<String>,

    /// Also write the result to code_analysis_<mode>.md
    #[clap(long)]
    pub export: bool,
}
