use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use code_explainer::config::constants::EMPTY_RESPONSE_MESSAGE;
use code_explainer::enums::ai_provider_error::AiProviderError;
use code_explainer::services::ai_providers::gemini::GeminiProvider;
use code_explainer::services::code_analyzer::CodeAnalyzer;
use code_explainer::structs::config::ai_config::AiConfig;
use code_explainer::structs::config::config::Config;
use code_explainer::traits::ai_provider::AiProvider;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/models/gemini-3-pro-preview:generateContent";

fn ai_config(server: &MockServer) -> AiConfig {
    AiConfig {
        base_url: server.uri(),
        ..AiConfig::default()
    }
}

fn reply(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn successful_reply_returns_candidate_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "contents": [{"role": "user", "parts": [{"text": "explain me"}]}],
            "generationConfig": {"topK": 1, "maxOutputTokens": 8192}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("## Overview")))
        .expect(1)
        .mount(&server)
        .await;

    let provider = GeminiProvider::new("test-key".to_string(), &ai_config(&server)).unwrap();

    assert_eq!(provider.generate("explain me").await, Ok(Some("## Overview".to_string())));
    assert_eq!(provider.model(), "gemini-3-pro-preview");
}

#[tokio::test]
async fn quota_errors_map_to_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "error": {"code": 429, "message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED"}
        })))
        .mount(&server)
        .await;

    let provider = GeminiProvider::new("test-key".to_string(), &ai_config(&server)).unwrap();
    let error = provider.generate("explain me").await.unwrap_err();

    assert_eq!(
        error,
        AiProviderError::RateLimited("Resource has been exhausted (RESOURCE_EXHAUSTED)".to_string())
    );
    assert!(error.is_transient());
}

#[tokio::test]
async fn invalid_key_is_an_authentication_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let provider = GeminiProvider::new("wrong".to_string(), &ai_config(&server)).unwrap();

    assert_eq!(
        provider.generate("explain me").await,
        Err(AiProviderError::AuthenticationError("API key not valid".to_string()))
    );
}

#[tokio::test]
async fn blank_reply_becomes_the_empty_response_notice() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("   ")))
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.ai = ai_config(&server);
    let analyzer = CodeAnalyzer::from_config(Some("test-key".to_string()), &config).unwrap();

    assert_eq!(analyzer.analyze("explain me").await, Ok(EMPTY_RESPONSE_MESSAGE.to_string()));
}

#[tokio::test]
async fn analyzer_retries_a_server_error_over_http() {
    let server = MockServer::start().await;
    let count = Arc::new(AtomicUsize::new(0));

    let count_clone = count.clone();
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(move |_req: &wiremock::Request| {
            if count_clone.fetch_add(1, Ordering::SeqCst) == 0 {
                ResponseTemplate::new(503).set_body_json(serde_json::json!({
                    "error": {"code": 503, "message": "The model is overloaded", "status": "UNAVAILABLE"}
                }))
            } else {
                ResponseTemplate::new(200).set_body_json(reply("## Recovered"))
            }
        })
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.ai = ai_config(&server);
    config.retry.base_delay_ms = 10;
    config.retry.jitter_ms = 0;
    let analyzer = CodeAnalyzer::from_config(Some("test-key".to_string()), &config).unwrap();

    assert_eq!(analyzer.analyze_with_default_retry("explain me").await, Ok("## Recovered".to_string()));
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn unreachable_service_fails_the_status_probe() {
    let server = MockServer::start().await;
    let mut config = Config::default();
    config.ai = ai_config(&server);
    // nothing mounted: wiremock answers 404
    let analyzer = CodeAnalyzer::from_config(Some("test-key".to_string()), &config).unwrap();

    assert!(!analyzer.check_api_status().await);
}

#[tokio::test]
async fn slow_reply_past_the_request_timeout_is_a_transient_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("late")).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let config = AiConfig {
        request_timeout_secs: 1,
        ..ai_config(&server)
    };
    let provider = GeminiProvider::new("test-key".to_string(), &config).unwrap();
    let error = provider.generate("explain me").await.unwrap_err();

    assert!(matches!(error, AiProviderError::Timeout(_)), "unexpected error: {:?}", error);
    assert!(error.is_transient());
}

#[tokio::test]
async fn request_timeout_status_is_retried() {
    let server = MockServer::start().await;
    let count = Arc::new(AtomicUsize::new(0));

    let count_clone = count.clone();
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(move |_req: &wiremock::Request| {
            if count_clone.fetch_add(1, Ordering::SeqCst) == 0 {
                ResponseTemplate::new(408).set_body_string("Request Timeout")
            } else {
                ResponseTemplate::new(200).set_body_json(reply("## On time"))
            }
        })
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.ai = ai_config(&server);
    config.retry.base_delay_ms = 10;
    config.retry.jitter_ms = 0;
    let analyzer = CodeAnalyzer::from_config(Some("test-key".to_string()), &config).unwrap();

    assert_eq!(analyzer.analyze_with_default_retry("explain me").await, Ok("## On time".to_string()));
    assert_eq!(count.load(Ordering::SeqCst), 2);
}
