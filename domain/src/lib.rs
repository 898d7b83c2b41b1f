//! Domain layer for bac-tutor
//!
//! This crate contains the core value objects and the prompt template.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Problem**: the student's submission — free text and/or an image
//!   file, with the invariant that at least one is present.
//! - **Options**: the three fixed-choice customizations (answer language,
//!   academic track, explanation length) whose Arabic labels are embedded
//!   literally in the prompt.
//! - **PromptTemplate**: pure, deterministic construction of the
//!   instruction string sent to the multimodal endpoint.

pub mod core;
pub mod options;
pub mod prompt;
pub mod reply;

// Re-export commonly used types
pub use self::core::{
    error::DomainError,
    image::{ImageFormat, ProblemImage},
    problem::{IMAGE_ONLY_PLACEHOLDER, Problem},
};
pub use options::{Language, Track, Verbosity};
pub use prompt::PromptTemplate;
pub use reply::TutorReply;
