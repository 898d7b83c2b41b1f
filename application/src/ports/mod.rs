//! Ports (interfaces) for external collaborators

pub mod model_gateway;
pub mod progress;
