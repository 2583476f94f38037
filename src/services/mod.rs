//! Service layer module
//!
//! Contains the shared request dispatcher and one façade per API capability

pub mod audio;
pub mod chat;
pub mod dispatch;
pub mod moderation;
pub mod threads;

pub use audio::{AudioApi, AudioClient};
pub use chat::{ChatApi, ChatClient};
pub use dispatch::ApiDispatcher;
pub use moderation::{ModerationApi, ModerationClient};
pub use threads::{ThreadsApi, ThreadsClient};
