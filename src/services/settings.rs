use derive_more::Display;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Environment variable holding the completion-service credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub llm: LlmConfig,
    pub ui: Option<UiConfig>,
    pub log: Option<LogConfig>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LlmConfig {
    pub model: Option<String>,            // defaults to DEFAULT_MODEL
    pub base_url: Option<String>,         // OpenAI-compatible endpoint root
    pub api_key: Option<String>,          // overrides the environment variable
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    pub width: Option<usize>, // transcript width in columns
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    pub dir: Option<String>,
    pub level: Option<String>, // fallback when RUST_LOG is not set
}

#[derive(Debug, Display)]
pub enum ConfigError {
    #[display("OpenAI API key is missing: set the {} environment variable", API_KEY_VAR)]
    MissingApiKey,
    #[display("{_0}")]
    Invalid(String),
}

impl std::error::Error for ConfigError {}

pub fn load_config<P: AsRef<Path>>(
    path: P,
) -> Result<AppConfig, Box<dyn std::error::Error + Send + Sync>> {
    let content = fs::read_to_string(path)?;
    let cfg: AppConfig = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Loads the YAML config, falling back to defaults when the file does not
/// exist. The credential may still come from the environment.
pub fn load_config_or_default<P: AsRef<Path>>(
    path: P,
) -> Result<AppConfig, Box<dyn std::error::Error + Send + Sync>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    load_config(path)
}

/// Resolves the completion-service credential: `llm.api_key` from the config
/// file wins, otherwise the `OPENAI_API_KEY` environment variable.
pub fn resolve_api_key(llm: &LlmConfig) -> Result<String, ConfigError> {
    if let Some(key) = llm.api_key.as_ref().filter(|k| !k.trim().is_empty()) {
        return Ok(key.clone());
    }
    std::env::var(API_KEY_VAR)
        .ok()
        .filter(|k| !k.trim().is_empty())
        .ok_or(ConfigError::MissingApiKey)
}

/// Validates and normalizes the endpoint root (no trailing slash).
pub fn resolve_base_url(llm: &LlmConfig) -> Result<String, ConfigError> {
    let raw = llm
        .base_url
        .clone()
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let parsed = url::Url::parse(&raw)
        .map_err(|e| ConfigError::Invalid(format!("llm.base_url is not a valid URL: {}", e)))?;
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

pub fn resolve_model(llm: &LlmConfig) -> String {
    llm.model
        .clone()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}
