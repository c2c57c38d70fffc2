use crate::models::types::Message;
use async_trait::async_trait;

/// Defines the interface for a chat-based completion API.
///
/// This trait allows consumers to abstract over different backend
/// implementations (real HTTP clients, mocks for testing).
///
/// Any implementation must be thread-safe (`Send + Sync`) and provide an
/// asynchronous method for sending the ordered conversation and receiving
/// the model-generated continuation.
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Sends the full ordered conversation to the completion service and
    /// returns the first candidate's text.
    async fn request_completion(
        &self,
        messages: &[Message],
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}
