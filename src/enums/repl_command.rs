use std::path::PathBuf;
use clap::ValueEnum;
use crate::enums::analysis_mode::AnalysisMode;
use crate::enums::detail_level::DetailLevel;

/// A line typed at the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Mode(AnalysisMode),
    Language(String),
    Detail(DetailLevel),
    Load(PathBuf),
    Sample(String),
    Paste,
    Run,
    Stats,
    History,
    Show(usize),
    Export,
    Status,
    Quit,
}

fn require<'a>(name: &str, argument: &'a str, what: &str) -> Result<&'a str, String> {
    if argument.is_empty() {
        Err(format!("'{}' needs {}", name, what))
    } else {
        Ok(argument)
    }
}

impl ReplCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (name, argument) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name.trim_start_matches(':').to_lowercase().as_str() {
            "help" | "h" | "?" => Ok(Self::Help),
            "mode" | "m" => {
                let value = require(name, argument, "a mode (explain, ask, debug, optimize, compare)")?;
                AnalysisMode::from_str(value, true)
                    .map(Self::Mode)
                    .map_err(|_| format!("Unknown mode: {}", value))
            }
            "lang" | "language" | "l" => Ok(Self::Language(require(name, argument, "a language name")?.to_string())),
            "detail" | "d" => {
                let value = require(name, argument, "a level (basic, medium, advanced)")?;
                DetailLevel::from_str(value, true)
                    .map(Self::Detail)
                    .map_err(|_| format!("Unknown detail level: {}", value))
            }
            "load" => Ok(Self::Load(PathBuf::from(require(name, argument, "a file path")?))),
            "sample" => Ok(Self::Sample(require(name, argument, "a sample name")?.to_string())),
            "paste" | "p" => Ok(Self::Paste),
            "run" | "r" | "analyze" => Ok(Self::Run),
            "stats" => Ok(Self::Stats),
            "history" => Ok(Self::History),
            "show" => {
                let value = require(name, argument, "a history number")?;
                value
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .map(Self::Show)
                    .ok_or_else(|| format!("Not a history number: {}", value))
            }
            "export" => Ok(Self::Export),
            "status" => Ok(Self::Status),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            "" => Err("Empty command".to_string()),
            other => Err(format!("Unknown command: {} (type 'help')", other)),
        }
    }
}
