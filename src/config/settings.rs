//! Client configuration settings
//!
//! Defines the configuration structure and loading logic

use anyhow::{Context, Result};

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default chat completion model
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o";

/// Canonical default moderation model
pub const DEFAULT_MODERATION_MODEL: &str = "text-moderation-latest";

/// Default audio transcription model
pub const DEFAULT_AUDIO_MODEL: &str = "whisper-1";

/// Client configuration
///
/// Immutable after construction; façades keep a shared read-only copy, so
/// concurrent calls need no locking.
#[derive(Debug, Clone)]
pub struct Settings {
    /// API key used for the bearer authorization header
    pub api_key: String,
    /// API base URL (no trailing slash)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout: u64,
    /// Default model for chat completion convenience calls
    pub default_chat_model: String,
    /// Default model for moderation convenience calls
    pub default_moderation_model: String,
    /// Default model for audio transcription
    pub default_audio_model: String,
}

impl Settings {
    /// Create a configuration with the given API key and defaults for
    /// everything else
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: 30,
            default_chat_model: DEFAULT_CHAT_MODEL.to_string(),
            default_moderation_model: DEFAULT_MODERATION_MODEL.to_string(),
            default_audio_model: DEFAULT_AUDIO_MODEL.to_string(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// Reads `OPENAI_API_KEY`, `OPENAI_BASE_URL`, `REQUEST_TIMEOUT` and the
    /// `DEFAULT_*_MODEL` overrides. A missing API key is not an error here:
    /// the dispatcher rejects an empty key before any request is sent, which
    /// keeps key-less construction usable in tests.
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let settings = Self {
            api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            base_url: get_env_or_default("OPENAI_BASE_URL", DEFAULT_BASE_URL),
            timeout: get_env_or_default("REQUEST_TIMEOUT", "30")
                .parse()
                .context("Invalid timeout value")?,
            default_chat_model: get_env_or_default("DEFAULT_CHAT_MODEL", DEFAULT_CHAT_MODEL),
            default_moderation_model: get_env_or_default(
                "DEFAULT_MODERATION_MODEL",
                DEFAULT_MODERATION_MODEL,
            ),
            default_audio_model: get_env_or_default("DEFAULT_AUDIO_MODEL", DEFAULT_AUDIO_MODEL),
        };

        settings.validate()?;

        Ok(settings)
    }

    /// Override the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout in seconds
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the default chat model
    pub fn with_chat_model(mut self, model: impl Into<String>) -> Self {
        self.default_chat_model = model.into();
        self
    }

    /// Override the default moderation model
    pub fn with_moderation_model(mut self, model: impl Into<String>) -> Self {
        self.default_moderation_model = model.into();
        self
    }

    /// Validate configuration validity
    pub fn validate(&self) -> Result<()> {
        // An empty key is allowed at construction time; a configured key must
        // at least look like one
        if !self.api_key.is_empty() {
            if self.api_key.contains(char::is_whitespace) {
                anyhow::bail!("API key cannot contain whitespace characters");
            }
            if self.api_key.len() < 8 {
                anyhow::bail!("API key must be at least 8 characters long");
            }
        }

        if !self.base_url.starts_with("http") {
            anyhow::bail!("Invalid base URL format, should start with 'http'");
        }

        if self.timeout == 0 {
            anyhow::bail!("Timeout value cannot be 0");
        }

        Ok(())
    }
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
