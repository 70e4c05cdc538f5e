use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_PROVIDER};
use crate::errors::{ExplainerError, ExplainerResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# Code Explainer configuration

[ai]
provider = "gemini"
model = "gemini-3-pro-preview"
# Environment variable holding the API key (a .env file in the working directory is read too)
api_key_env = "GOOGLE_API_KEY"
base_url = "https://generativelanguage.googleapis.com/v1beta"
temperature = 0.7
top_p = 1.0
top_k = 1
max_output_tokens = 8192
request_timeout_secs = 120
rate_limit_per_minute = 50

[retry]
# Total attempts per analysis; only rate limits, timeouts and server errors are retried
max_retries = 3
base_delay_ms = 1000
max_delay_ms = 30000
jitter_ms = 250

[history]
# Analyses kept per interactive session, and how many are listed
capacity = 20
display_window = 5

[output]
output_dir = "."
# Write every analysis to code_analysis_<mode>.md
save_markdown = false
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn config_path() -> ExplainerResult<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| ExplainerError::system_error("locating config", "home directory not found"))
    }

    /// Loads `~/code-explainer/config.toml`, falling back to defaults when it does not exist.
    pub fn load() -> ExplainerResult<Config> {
        let path = Self::config_path()?;

        if path.exists() {
            log::info!("📋 Loading config from: {}", path.display());
            return Self::load_from(&path);
        }

        log::debug!("No config at {}, using defaults", path.display());
        Ok(Config::default())
    }

    pub fn load_from(path: &Path) -> ExplainerResult<Config> {
        let content = fs::read_to_string(path).map_err(|e| ExplainerError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ExplainerError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })
    }

    pub fn sample_config() -> &'static str {
        SAMPLE_CONFIG
    }

    pub fn create_sample_config() -> ExplainerResult<PathBuf> {
        let path = Self::config_path()?;
        Self::write_sample_config(&path)?;
        Ok(path)
    }

    /// Refuses to overwrite an existing file.
    pub fn write_sample_config(path: &Path) -> ExplainerResult<()> {
        if path.exists() {
            return Err(ExplainerError::config_error(
                &format!("config already exists at {}", path.display()),
                None,
                Some("Edit the existing file or remove it first"),
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ExplainerError::file_error(&parent.display().to_string(), "create directory", &e.to_string())
            })?;
        }

        fs::write(path, SAMPLE_CONFIG)
            .map_err(|e| ExplainerError::file_error(&path.display().to_string(), "write", &e.to_string()))?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !config.ai.provider.eq_ignore_ascii_case(DEFAULT_PROVIDER) {
            errors.push(format!("ai.provider must be '{}', got '{}'", DEFAULT_PROVIDER, config.ai.provider));
        }
        if config.ai.model.trim().is_empty() {
            errors.push("ai.model must not be empty".to_string());
        }
        if config.ai.api_key_env.trim().is_empty() {
            errors.push("ai.api_key_env must name an environment variable".to_string());
        }
        if !(config.ai.base_url.starts_with("http://") || config.ai.base_url.starts_with("https://")) {
            errors.push(format!("ai.base_url must be an http(s) URL: {}", config.ai.base_url));
        }
        if !(0.0..=2.0).contains(&config.ai.temperature) {
            errors.push(format!("ai.temperature must be between 0 and 2, got {}", config.ai.temperature));
        }
        if !(0.0..=1.0).contains(&config.ai.top_p) {
            errors.push(format!("ai.top_p must be between 0 and 1, got {}", config.ai.top_p));
        }
        if config.ai.max_output_tokens == 0 {
            errors.push("ai.max_output_tokens must be at least 1".to_string());
        }
        if config.ai.request_timeout_secs == 0 {
            errors.push("ai.request_timeout_secs must be at least 1".to_string());
        }

        if config.retry.max_retries == 0 {
            errors.push("retry.max_retries must be at least 1".to_string());
        }
        if config.retry.base_delay_ms > config.retry.max_delay_ms {
            errors.push(format!(
                "retry.base_delay_ms ({}) exceeds retry.max_delay_ms ({})",
                config.retry.base_delay_ms, config.retry.max_delay_ms
            ));
        }

        if config.history.capacity == 0 {
            errors.push("history.capacity must be at least 1".to_string());
        }
        if config.history.display_window > config.history.capacity {
            errors.push(format!(
                "history.display_window ({}) exceeds history.capacity ({})",
                config.history.display_window, config.history.capacity
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn sample_config_parses_to_defaults() {
        let config: Config = toml::from_str(ConfigManager::sample_config()).unwrap();
        assert_eq!(config, Config::default());
        assert!(ConfigManager::validate_config(&config).is_ok());
    }

    #[test]
    fn missing_sections_take_defaults() {
        let config: Config = toml::from_str("[retry]\nmax_retries = 5\n").unwrap();
        assert_eq!(config.retry.max_retries, 5);
        assert_eq!(config.retry.base_delay_ms, 1000);
        assert_eq!(config.ai.model, "gemini-3-pro-preview");
        assert_eq!(config.history.capacity, 20);
    }

    #[test]
    fn write_then_load_round_trips_and_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("code-explainer").join("config.toml");

        ConfigManager::write_sample_config(&path).unwrap();
        assert_eq!(ConfigManager::load_from(&path).unwrap(), Config::default());
        assert!(ConfigManager::write_sample_config(&path).is_err());
    }

    #[test]
    fn malformed_file_is_a_configuration_file_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[ai\nmodel = ").unwrap();

        assert!(matches!(
            ConfigManager::load_from(&path),
            Err(ExplainerError::ConfigurationFileError { .. })
        ));
    }

    #[test]
    fn validation_collects_every_problem() {
        let mut config = Config::default();
        config.ai.model = " ".to_string();
        config.ai.temperature = 3.5;
        config.retry.max_retries = 0;
        config.history.display_window = 50;

        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.iter().any(|e| e.contains("ai.temperature")));
        assert!(errors.iter().any(|e| e.contains("history.display_window")));
    }
}
