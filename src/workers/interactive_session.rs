use std::io::{self, BufRead, Write};
use std::path::Path;
use crate::constants::samples::{find_sample, SAMPLE_CODES};
use crate::enums::analysis_mode::AnalysisMode;
use crate::enums::detail_level::DetailLevel;
use crate::enums::mode_parameters::ModeParameters;
use crate::enums::repl_command::ReplCommand;
use crate::errors::{ErrorHandler, ExplainerError, ExplainerResult};
use crate::helpers::code_stats::get_code_stats;
use crate::helpers::export::write_markdown;
use crate::helpers::source_reader::read_file;
use crate::logger::result_logger::ResultLogger;
use crate::services::analysis_session::AnalysisSession;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::config::config::Config;
use crate::structs::language_label::LanguageLabel;
use crate::workers::command_runner::CommandRunner;

const PASTE_TERMINATOR: &str = ".";

const HELP: &str = "\
Commands:
  paste               enter code, finish with a line containing only '.'
  load <path>         read code from a file
  sample <name>       use a built-in sample
  mode <mode>         explain | ask | debug | optimize | compare
  detail <level>      basic | medium | advanced (explain mode)
  lang <language>     set the language, or 'Auto-detect'
  run                 analyze the current code
  stats               show code statistics
  history             list recent analyses
  show <n>            print a history entry in full
  export              save the last result as markdown
  status              check the API
  quit                leave";

/// Line-oriented front end over one [`AnalysisSession`]; state carries over between runs.
pub struct InteractiveSession {
    session: AnalysisSession,
    config: Config,
    input: Box<dyn BufRead>,
    code: String,
    mode: AnalysisMode,
    detail: DetailLevel,
    language: LanguageLabel,
    last_result: Option<(AnalysisMode, String)>,
}

impl InteractiveSession {
    pub fn new(session: AnalysisSession, config: Config) -> Self {
        Self::with_input(session, config, Box::new(io::BufReader::new(io::stdin())))
    }

    pub fn with_input(session: AnalysisSession, config: Config, input: Box<dyn BufRead>) -> Self {
        Self {
            session,
            config,
            input,
            code: String::new(),
            mode: AnalysisMode::Explain,
            detail: DetailLevel::default(),
            language: LanguageLabel::auto_detect(),
            last_result: None,
        }
    }

    pub fn session(&self) -> &AnalysisSession {
        &self.session
    }

    /// `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> ExplainerResult<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn read_block(&mut self) -> ExplainerResult<String> {
        println!("Paste code, then a line with only '{}':", PASTE_TERMINATOR);
        let mut lines = Vec::new();
        while let Some(line) = self.read_line("")? {
            if line.trim() == PASTE_TERMINATOR {
                break;
            }
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }

    pub async fn run(&mut self) -> ExplainerResult<()> {
        log::info!("🧑‍🏫 Interactive mode. Type 'help' for commands.");

        loop {
            let prompt = format!("\n[{} | {}] > ", self.mode, self.language);
            let Some(line) = self.read_line(&prompt)? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let command = match ReplCommand::parse(&line) {
                Ok(command) => command,
                Err(message) => {
                    println!("⚠️ {}", message);
                    continue;
                }
            };

            if command == ReplCommand::Quit {
                break;
            }

            if let Err(error) = self.handle(command).await {
                ErrorHandler::handle_error(&error);
            }
        }

        log::info!("👋 Session ended with {} analyses", self.session.history().len());
        Ok(())
    }

    async fn handle(&mut self, command: ReplCommand) -> ExplainerResult<()> {
        match command {
            ReplCommand::Help => println!("{}", HELP),
            ReplCommand::Mode(mode) => {
                self.mode = mode;
                println!("Mode: {}", mode);
            }
            ReplCommand::Detail(detail) => {
                self.detail = detail;
                println!("Detail level: {}", detail);
            }
            ReplCommand::Language(name) => {
                self.language = CommandRunner::parse_language(&name)?;
                println!("Language: {}", self.language);
            }
            ReplCommand::Load(path) => {
                self.code = read_file(&path).await?;
                println!("Loaded {} lines from {}", self.code.lines().count(), path.display());
            }
            ReplCommand::Sample(name) => {
                let (sample, _, code) = find_sample(&name).ok_or_else(|| {
                    let names: Vec<&str> = SAMPLE_CODES.iter().map(|(sample, _, _)| *sample).collect();
                    ExplainerError::user_input_error(&name, "a sample name", &format!("Available: {}", names.join(", ")))
                })?;
                self.code = (*code).to_string();
                println!("Loaded sample '{}'", sample);
            }
            ReplCommand::Paste => {
                self.code = self.read_block()?;
            }
            ReplCommand::Run => self.run_analysis().await?,
            ReplCommand::Stats => {
                let language = self.session.resolve_language(&self.language, &self.code);
                ResultLogger::print_stats(&get_code_stats(&self.code), &language);
            }
            ReplCommand::History => ResultLogger::print_history(&self.session.recent_history()),
            ReplCommand::Show(n) => {
                let entries = self.session.recent_history();
                let entry = entries.get(n - 1).ok_or_else(|| {
                    ExplainerError::user_input_error(&n.to_string(), "a number from 'history'", "Run 'history' to list entries")
                })?;
                let (mode, title, result, succeeded) = (entry.mode, entry.title(), entry.result.clone(), entry.succeeded);
                ResultLogger::print_analysis(&title, &result);
                if succeeded {
                    self.last_result = Some((mode, result));
                }
            }
            ReplCommand::Export => {
                let (mode, text) = self.last_result.as_ref().ok_or_else(|| {
                    ExplainerError::user_input_error("export", "a finished analysis", "Run an analysis first")
                })?;
                let path = write_markdown(Path::new(&self.config.output.output_dir), *mode, text)?;
                println!("📥 Saved to {}", path.display());
            }
            ReplCommand::Status => {
                if self.session.analyzer().check_api_status().await {
                    println!("✅ API is reachable");
                } else {
                    println!("❌ API is not reachable");
                }
            }
            ReplCommand::Quit => {}
        }
        Ok(())
    }

    fn mode_parameters(&mut self) -> ExplainerResult<ModeParameters> {
        Ok(match self.mode {
            AnalysisMode::Explain => ModeParameters::Explain { detail_level: self.detail },
            AnalysisMode::AskQuestion => ModeParameters::AskQuestion {
                question: self.read_line("Question: ")?.unwrap_or_default(),
            },
            AnalysisMode::Debug => ModeParameters::Debug {
                error_message: self
                    .read_line("Error message or symptoms (optional): ")?
                    .filter(|message| !message.trim().is_empty()),
            },
            AnalysisMode::Optimize => ModeParameters::Optimize,
            AnalysisMode::Compare => {
                println!("Second snippet:");
                ModeParameters::Compare { second_code: self.read_block()? }
            }
        })
    }

    async fn run_analysis(&mut self) -> ExplainerResult<()> {
        let parameters = self.mode_parameters()?;
        let request = AnalysisRequest::new(self.code.clone(), self.language.clone(), parameters);
        let prepared = self.session.prepare(&request)?;

        let mode = prepared.mode;
        let title = format!("{} - {}", prepared.mode, prepared.language);
        let max_retries = self.config.retry.max_retries;

        let outcome = CommandRunner::execute_with_spinner(&mut self.session, prepared, max_retries).await;
        let text = outcome?;

        ResultLogger::print_analysis(&title, &text);
        if self.config.output.save_markdown {
            let path = write_markdown(Path::new(&self.config.output.output_dir), mode, &text)?;
            log::info!("📥 Saved analysis to {}", path.display());
        }
        self.last_result = Some((mode, text));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;
    use super::*;
    use crate::enums::ai_provider_error::AiProviderError;
    use crate::services::code_analyzer::CodeAnalyzer;
    use crate::services::language_classifier::LanguageClassifier;
    use crate::services::retry_policy::RetryPolicy;
    use crate::traits::ai_provider::MockAiProvider;
    use tempfile::TempDir;

    fn scripted(mock: MockAiProvider, config: Config, script: &str) -> InteractiveSession {
        let analyzer = CodeAnalyzer::new(Arc::new(mock), RetryPolicy::default().without_jitter());
        let session = AnalysisSession::new(LanguageClassifier::default(), analyzer, &config.history);
        InteractiveSession::with_input(session, config, Box::new(Cursor::new(script.to_string())))
    }

    #[tokio::test]
    async fn runs_a_sample_and_exports_the_result() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.output.output_dir = temp_dir.path().display().to_string();

        let mut mock = MockAiProvider::new();
        mock.expect_generate()
            .withf(|prompt| prompt.contains("```Python\ndef bubble_sort(arr):"))
            .times(1)
            .returning(|_| Ok(Some("## Bubble sort explained".to_string())));

        let mut repl = scripted(mock, config, "sample bubble\ndetail basic\nrun\nhistory\nexport\nquit\n");
        repl.run().await.unwrap();

        assert_eq!(repl.session().history().len(), 1);
        let exported = std::fs::read_to_string(temp_dir.path().join("code_analysis_explain_code.md")).unwrap();
        assert_eq!(exported, "## Bubble sort explained");
    }

    #[tokio::test]
    async fn failed_history_entry_is_never_exported() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.output.output_dir = temp_dir.path().display().to_string();

        let mut mock = MockAiProvider::new();
        mock.expect_generate()
            .times(1)
            .returning(|_| Err(AiProviderError::AuthenticationError("bad key".into())));

        let mut repl = scripted(mock, config, "sample bubble\nrun\nshow 1\nexport\nquit\n");
        repl.run().await.unwrap();

        let history = repl.session().history();
        assert_eq!(history.len(), 1);
        assert!(!history.latest().unwrap().succeeded);
        assert!(!temp_dir.path().join("code_analysis_explain_code.md").exists());
    }

    #[tokio::test]
    async fn compare_reads_the_second_snippet_block() {
        let mut mock = MockAiProvider::new();
        mock.expect_generate()
            .withf(|prompt| prompt.contains("CODE SNIPPET 2:\n```Python\nfor x in range(3): print(x)\n```"))
            .times(1)
            .returning(|_| Ok(Some("| a | b |".to_string())));

        let script = "lang python\nmode compare\npaste\nprint(list(range(3)))\n.\nrun\nfor x in range(3): print(x)\n.\n";
        let mut repl = scripted(mock, Config::default(), script);
        repl.run().await.unwrap();

        assert_eq!(repl.session().history().len(), 1);
    }

    #[tokio::test]
    async fn invalid_input_is_reported_and_the_loop_continues() {
        let mut mock = MockAiProvider::new();
        mock.expect_generate().never();

        // no code loaded, then an unknown command, then end of input
        let mut repl = scripted(mock, Config::default(), "run\nfly away\n");
        repl.run().await.unwrap();

        assert!(repl.session().history().is_empty());
    }
}
