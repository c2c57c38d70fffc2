use parley::services::chat_api_openai::OpenAiChatApi;
use parley::services::session::ChatSession;
use parley::services::settings::LlmConfig;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

pub async fn mount_completion(server: &MockServer, reply: &str) {
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                { "message": { "role": "assistant", "content": reply } }
            ]
        })))
        .mount(server)
        .await;
}

pub async fn mount_completion_without_candidates(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(server)
        .await;
}

pub async fn mount_completion_failure(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(server)
        .await;
}

pub fn test_llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        model: Some("gpt-3.5-turbo".to_string()),
        base_url: Some(base_url.to_string()),
        api_key: None,
        request_timeout_secs: Some(5),
    }
}

pub fn session_against(base_url: &str) -> ChatSession {
    let api = OpenAiChatApi::from_config(&test_llm_config(base_url), "test-key".to_string())
        .expect("chat api from config");
    ChatSession::new(Arc::new(api))
}
