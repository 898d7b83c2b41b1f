//! Application layer for bac-tutor
//!
//! This crate contains the solve use case and the port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    model_gateway::{GatewayError, ModelGateway},
    progress::{NoProgress, SolveProgressNotifier},
};
pub use use_cases::solve::{SolveError, SolveInput, SolveUseCase};
