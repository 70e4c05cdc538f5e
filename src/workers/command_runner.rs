use std::path::Path;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::constants::samples::{find_sample, SAMPLE_CODES};
use crate::enums::analysis_mode::AnalysisMode;
use crate::enums::commands::{AnalyzeArgs, Commands};
use crate::enums::mode_parameters::ModeParameters;
use crate::errors::{ExplainerError, ExplainerResult};
use crate::helpers::code_stats::get_code_stats;
use crate::helpers::export::write_markdown;
use crate::helpers::source_reader::{read_file, read_source};
use crate::logger::animated_logger::AnimatedLogger;
use crate::logger::result_logger::ResultLogger;
use crate::services::analysis_session::AnalysisSession;
use crate::services::code_analyzer::CodeAnalyzer;
use crate::services::language_classifier::LanguageClassifier;
use crate::structs::analysis_failure::AnalysisOutcome;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::language_label::LanguageLabel;
use crate::structs::prepared_analysis::PreparedAnalysis;
use crate::workers::interactive_session::InteractiveSession;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> ExplainerResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Analyze(args) => self.analyze_command(args).await,
            Commands::Detect { file } => self.detect_command(file.as_deref()).await,
            Commands::Stats { file } => self.stats_command(file.as_deref()).await,
            Commands::Languages => self.languages_command(),
            Commands::Samples { name } => self.samples_command(name.as_deref()),
            Commands::Status { api_key } => self.status_command(api_key).await,
            Commands::Interactive { api_key } => self.interactive_command(api_key).await,
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::debug!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    /// Resolves a user-typed language against the catalog; `Auto-detect` is a catalog entry.
    pub fn parse_language(name: &str) -> ExplainerResult<LanguageLabel> {
        LanguageLabel::from_catalog(name).ok_or_else(|| {
            ExplainerError::user_input_error(
                name,
                "a supported language",
                "Run 'code-explainer languages' to list them, or use 'Auto-detect'",
            )
        })
    }

    pub fn mode_parameters(args: &AnalyzeArgs, second_code: String) -> ModeParameters {
        match args.mode {
            AnalysisMode::Explain => ModeParameters::Explain { detail_level: args.detail },
            AnalysisMode::AskQuestion => ModeParameters::AskQuestion {
                question: args.question.clone().unwrap_or_default(),
            },
            AnalysisMode::Debug => ModeParameters::Debug { error_message: args.error.clone() },
            AnalysisMode::Optimize => ModeParameters::Optimize,
            AnalysisMode::Compare => ModeParameters::Compare { second_code },
        }
    }

    async fn primary_code(args: &AnalyzeArgs) -> ExplainerResult<String> {
        if let Some(name) = &args.sample {
            let (sample, language, code) = find_sample(name).ok_or_else(|| {
                ExplainerError::user_input_error(name, "a sample name", "Run 'code-explainer samples' to list them")
            })?;
            log::info!("📚 Using sample '{}' ({})", sample, language);
            return Ok((*code).to_string());
        }

        read_source(args.file.as_deref()).await
    }

    pub async fn build_request(args: &AnalyzeArgs) -> ExplainerResult<AnalysisRequest> {
        let language = Self::parse_language(&args.language)?;
        let code = Self::primary_code(args).await?;

        let second_code = match (&args.mode, &args.second_file) {
            (AnalysisMode::Compare, Some(path)) => read_file(path).await?,
            _ => String::new(),
        };

        Ok(AnalysisRequest::new(code, language, Self::mode_parameters(args, second_code)))
    }

    /// Runs the call behind a spinner; the session records it in history either way.
    pub async fn execute_with_spinner(session: &mut AnalysisSession, prepared: PreparedAnalysis, max_retries: u32) -> AnalysisOutcome {
        let mut spinner = AnimatedLogger::new("🤖 AI is thinking... Please wait.");
        spinner.start();

        let outcome = session.execute(prepared, max_retries).await;

        match &outcome {
            Ok(_) => spinner.stop("Analysis complete").await,
            Err(_) => spinner.error("Analysis failed").await,
        }

        outcome
    }

    async fn analyze_command(&self, args: AnalyzeArgs) -> ExplainerResult<()> {
        log::info!("🔍 Starting code analysis...");

        let config = ConfigManager::load()?;
        let request = Self::build_request(&args).await?;

        let classifier = LanguageClassifier::default();
        let prepared = AnalysisSession::prepare_with(&classifier, &request)?;
        log::info!("🧭 Mode: {} | Language: {}", prepared.mode, prepared.language);

        let analyzer = CodeAnalyzer::from_config(args.api_key.clone(), &config)?;
        log::debug!("Using model {}", analyzer.model());

        let mut session = AnalysisSession::new(classifier, analyzer, &config.history);
        let max_retries = args.retries.unwrap_or(config.retry.max_retries);
        let mode = prepared.mode;
        let title = format!("{} - {}", prepared.mode, prepared.language);

        let text = Self::execute_with_spinner(&mut session, prepared, max_retries).await?;
        ResultLogger::print_analysis(&title, &text);

        if args.export || config.output.save_markdown {
            let path = write_markdown(Path::new(&config.output.output_dir), mode, &text)?;
            log::info!("📥 Saved analysis to {}", path.display());
        }

        Ok(())
    }

    async fn detect_command(&self, file: Option<&Path>) -> ExplainerResult<()> {
        let code = read_source(file).await?;
        let language = LanguageClassifier::default().classify(&code);
        println!("{}", language);
        Ok(())
    }

    async fn stats_command(&self, file: Option<&Path>) -> ExplainerResult<()> {
        let code = read_source(file).await?;
        let stats = get_code_stats(&code);
        let language = LanguageClassifier::default().classify(&code);
        ResultLogger::print_stats(&stats, &language);
        Ok(())
    }

    fn languages_command(&self) -> ExplainerResult<()> {
        for language in LanguageLabel::catalog() {
            println!("{}", language);
        }
        Ok(())
    }

    fn samples_command(&self, name: Option<&str>) -> ExplainerResult<()> {
        match name {
            Some(name) => {
                let (sample, language, code) = find_sample(name).ok_or_else(|| {
                    ExplainerError::user_input_error(name, "a sample name", "Run 'code-explainer samples' to list them")
                })?;
                eprintln!("📚 {} ({})", sample, language);
                println!("{}", code);
            }
            None => {
                log::info!("📚 Built-in samples:");
                for (sample, language, _) in SAMPLE_CODES {
                    println!("  {} [{}]", sample, language);
                }
                log::info!("💡 Analyze one with: code-explainer analyze --sample \"<name>\"");
            }
        }
        Ok(())
    }

    async fn status_command(&self, api_key: Option<String>) -> ExplainerResult<()> {
        log::info!("📡 Checking API status...");

        let config = ConfigManager::load()?;
        let analyzer = CodeAnalyzer::from_config(api_key, &config)?;

        if analyzer.check_api_status().await {
            log::info!("✅ API is reachable (model: {})", analyzer.model());
            Ok(())
        } else {
            Err(ExplainerError::NetworkError {
                operation: "API status check".to_string(),
                url: Some(config.ai.base_url.clone()),
                status_code: None,
                reason: "the model did not answer the probe request".to_string(),
            })
        }
    }

    async fn interactive_command(&self, api_key: Option<String>) -> ExplainerResult<()> {
        let config = ConfigManager::load()?;
        let analyzer = CodeAnalyzer::from_config(api_key, &config)?;
        let session = AnalysisSession::new(LanguageClassifier::default(), analyzer, &config.history);

        InteractiveSession::new(session, config).run().await
    }

    fn init_command(&self) -> ExplainerResult<()> {
        log::info!("🚀 Initializing code-explainer configuration...");

        match ConfigManager::create_sample_config() {
            Ok(path) => {
                log::info!("✅ Configuration file created at {}", path.display());
                log::info!("🔧 Run 'code-explainer validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    fn validate_command(&self) -> ExplainerResult<()> {
        log::info!("🔍 Validating code-explainer configuration...");

        let config = match ConfigManager::load() {
            Ok(config) => {
                log::info!("✅ Configuration loaded successfully");
                config
            }
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e);
                log::error!("💡 Run 'code-explainer init' to create a configuration file.");
                return Err(e);
            }
        };

        if let Err(errors) = ConfigManager::validate_config(&config) {
            log::info!("❌ Issues found:");
            for error in &errors {
                log::info!("   - {}", error);
            }
            return Err(ExplainerError::config_error(
                &format!("{} problem(s) in configuration", errors.len()),
                None,
                Some("Fix the fields listed above"),
            ));
        }

        if CodeAnalyzer::resolve_api_key(None, &config.ai.api_key_env).is_none() {
            log::warn!("⚠️ {} is not set; pass --api-key or add it to .env", config.ai.api_key_env);
        }

        log::info!("✅ Configuration is valid");
        Ok(())
    }
}
