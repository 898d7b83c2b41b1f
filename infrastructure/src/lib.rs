//! Infrastructure layer for bac-tutor
//!
//! External adapters: the Gemini gateway and configuration loading.

pub mod config;
pub mod providers;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, FileConfig, FileGeminiConfig};
pub use providers::GeminiGateway;
