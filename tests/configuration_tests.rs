use std::fs;
use code_explainer::config::config_manager::ConfigManager;
use code_explainer::errors::ExplainerError;
use code_explainer::services::retry_policy::RetryPolicy;
use code_explainer::structs::config::config::Config;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn sample_config_round_trips_through_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("code-explainer").join("config.toml");

    ConfigManager::write_sample_config(&path).unwrap();
    let loaded = ConfigManager::load_from(&path).unwrap();

    assert_eq!(loaded, Config::default());
    assert_eq!(ConfigManager::validate_config(&loaded), Ok(()));
}

#[test]
fn partial_file_overrides_only_what_it_names() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        "[ai]\nmodel = \"gemini-2.5-flash\"\n\n[retry]\nmax_retries = 5\nbase_delay_ms = 500\njitter_ms = 0\n",
    )
    .unwrap();

    let config = ConfigManager::load_from(&path).unwrap();
    assert_eq!(config.ai.model, "gemini-2.5-flash");
    assert_eq!(config.ai.api_key_env, "GOOGLE_API_KEY");
    assert_eq!(config.history.display_window, 5);

    let policy = RetryPolicy::from(&config.retry);
    assert_eq!(policy.attempts(), 5);
    assert_eq!(policy.jitter, Duration::ZERO);
    assert_eq!(policy.base_delay_for(0), Duration::from_millis(500));
    assert_eq!(policy.base_delay_for(3), Duration::from_secs(4));
    assert_eq!(policy.base_delay_for(20), Duration::from_secs(30));
}

#[test]
fn unreadable_config_reports_the_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.toml");

    match ConfigManager::load_from(&path) {
        Err(ExplainerError::ConfigurationFileError { path: reported, .. }) => {
            assert!(reported.ends_with("missing.toml"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn invalid_values_are_all_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[ai]\nbase_url = \"ftp://example.com\"\n\n[history]\ncapacity = 0\ndisplay_window = 0\n").unwrap();

    let config = ConfigManager::load_from(&path).unwrap();
    let errors = ConfigManager::validate_config(&config).unwrap_err();

    assert_eq!(errors.len(), 2);
    assert!(errors[0].contains("ai.base_url"));
    assert!(errors[1].contains("history.capacity"));
}

#[test]
fn unsupported_provider_is_rejected() {
    let mut config = Config::default();
    config.ai.provider = "openai".to_string();

    let errors = ConfigManager::validate_config(&config).unwrap_err();

    assert_eq!(errors, vec!["ai.provider must be 'gemini', got 'openai'".to_string()]);
}
