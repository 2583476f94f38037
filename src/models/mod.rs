//! Data models module
//!
//! Defines request and response data structures for each API capability

pub mod audio;
pub mod chat;
pub mod common;
pub mod moderation;
pub mod threads;
