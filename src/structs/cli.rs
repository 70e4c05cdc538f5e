use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "code-explainer", version)]
#[clap(about = "Expert AI-powered code analysis, debugging, and optimization", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
