//! AI API Client Library
//!
//! Provides typed async access to OpenAI-style provider HTTP APIs
//! (chat completions, moderation, audio transcription, threads/messages)

pub mod config;
pub mod models;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::Settings;
pub use models::common::{ApiResponse, DeletionStatus, ResponseMetadata};
pub use services::{
    ApiDispatcher, AudioApi, AudioClient, ChatApi, ChatClient, ModerationApi, ModerationClient,
    ThreadsApi, ThreadsClient,
};
pub use utils::error::{ClientError, ClientResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Fixed user agent sent with every outbound request
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Get version information
pub fn version_info() -> String {
    format!("{} v{}", NAME, VERSION)
}
