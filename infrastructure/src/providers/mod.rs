//! Provider adapters implementing the application ports

pub mod gemini;

pub use gemini::GeminiGateway;
