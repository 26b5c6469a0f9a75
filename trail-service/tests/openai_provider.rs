//! OpenAI provider tests against a local mock server.

use secrecy::Secret;
use serde_json::json;
use trail_service::services::providers::openai::{
    OpenAiConfig, OpenAiImageProvider, OpenAiTextProvider,
};
use trail_service::services::providers::{ImageProvider, ProviderError, TextProvider};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer, model: &str) -> OpenAiConfig {
    OpenAiConfig {
        api_key: Secret::new("test-api-key".to_string()),
        api_base: format!("{}/v1", server.uri()),
        model: model.to_string(),
    }
}

#[tokio::test]
async fn text_generation_sends_system_and_user_messages() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-api-key"))
        .and(body_partial_json(json!({
            "model": "gpt-3.5-turbo",
            "messages": [
                {"role": "system"},
                {"role": "user", "content": "a creekside loop"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Try Willow Creek."},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 20, "completion_tokens": 6, "total_tokens": 26}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = OpenAiTextProvider::new(config_for(&server, "gpt-3.5-turbo"));
    let completion = provider
        .generate("system instruction", "a creekside loop")
        .await
        .unwrap();

    assert_eq!(completion.text, "Try Willow Creek.");
    assert_eq!(completion.input_tokens, 20);
    assert_eq!(completion.output_tokens, 6);
}

#[tokio::test]
async fn rate_limit_maps_to_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let provider = OpenAiTextProvider::new(config_for(&server, "gpt-3.5-turbo"));
    let err = provider.generate("sys", "prompt").await.unwrap_err();
    assert!(matches!(err, ProviderError::RateLimited));
}

#[tokio::test]
async fn server_error_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let provider = OpenAiTextProvider::new(config_for(&server, "gpt-3.5-turbo"));
    let err = provider.generate("sys", "prompt").await.unwrap_err();
    match err {
        ProviderError::ApiError(msg) => assert!(msg.contains("upstream exploded")),
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn content_filter_finish_reason_maps_to_content_filtered() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": null},
                "finish_reason": "content_filter"
            }]
        })))
        .mount(&server)
        .await;

    let provider = OpenAiTextProvider::new(config_for(&server, "gpt-3.5-turbo"));
    let err = provider.generate("sys", "prompt").await.unwrap_err();
    assert!(matches!(err, ProviderError::ContentFiltered));
}

#[tokio::test]
async fn image_generation_returns_the_urls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .and(body_partial_json(json!({
            "model": "dall-e-2",
            "prompt": "creekside trail environment based on a shady loop",
            "n": 2,
            "size": "1024x1024"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "created": 1700000000,
            "data": [
                {"url": "https://img.example/one.png"},
                {"url": "https://img.example/two.png"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = OpenAiImageProvider::new(config_for(&server, "dall-e-2"));
    let urls = provider
        .generate_images(
            "creekside trail environment based on a shady loop",
            2,
            "1024x1024",
        )
        .await
        .unwrap();

    assert_eq!(urls.len(), 2);
    assert_eq!(urls[0], "https://img.example/one.png");
}

#[tokio::test]
async fn empty_api_key_fails_health_check() {
    let server = MockServer::start().await;
    let provider = OpenAiTextProvider::new(OpenAiConfig {
        api_key: Secret::new(String::new()),
        api_base: format!("{}/v1", server.uri()),
        model: "gpt-3.5-turbo".to_string(),
    });

    let err = provider.health_check().await.unwrap_err();
    assert!(matches!(err, ProviderError::NotConfigured(_)));
}
