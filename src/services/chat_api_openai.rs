use crate::models::types::Message;
use crate::services::settings::{self, LlmConfig};
use crate::traits::chat_api::ChatApi;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Returned when the service answers but carries no usable candidate.
pub const FALLBACK_REPLY: &str = "Sorry, I could not process that.";

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    message: Option<CandidateMessage>,
}

#[derive(Deserialize)]
struct CandidateMessage {
    content: Option<String>,
}

/// `ChatApi` over an OpenAI-compatible HTTP endpoint
/// (`POST <base_url>/v1/chat/completions`, bearer credential).
///
/// One call per submission: no retry, no streaming; the client timeout from
/// config is the only bound on the request.
pub struct OpenAiChatApi {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiChatApi {
    pub fn from_config(
        llm: &LlmConfig,
        api_key: String,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let mut builder = Client::builder();
        if let Some(secs) = llm.request_timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
            base_url: settings::resolve_base_url(llm)?,
            api_key,
            model: settings::resolve_model(llm),
        })
    }
}

#[async_trait]
impl ChatApi for OpenAiChatApi {
    async fn request_completion(
        &self,
        messages: &[Message],
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        info!(
            model = %self.model,
            turns = messages.len(),
            "chat api: completion request"
        );

        let body = ChatCompletionRequest {
            model: &self.model,
            messages,
        };
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        let parsed: ChatCompletionResponse = response.json().await?;

        // First candidate only; empty content counts as unusable.
        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| FALLBACK_REPLY.to_string());

        info!(reply_len = text.len(), "chat api: completion response");
        Ok(text)
    }
}
