//! Configuration management module
//!
//! Responsible for loading and validating client configuration from explicit
//! values or environment variables

pub mod settings;

pub use settings::Settings;
