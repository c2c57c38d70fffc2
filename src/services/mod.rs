pub mod chat_api_openai;
pub mod conversation;
pub mod session;
pub mod settings;
pub mod transcript;
