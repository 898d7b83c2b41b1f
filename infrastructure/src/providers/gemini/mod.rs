//! Gemini provider adapter

pub mod adapter;
pub mod types;

pub use adapter::GeminiGateway;
