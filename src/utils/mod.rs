//! Utilities module
//!
//! Contains error handling tools

pub mod error;
