//! Presentation layer for bac-tutor
//!
//! CLI definition, interactive form, progress spinner and console output.

pub mod cli;
pub mod form;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::{Cli, OutputFormat};
pub use form::{
    EMPTY_SUBMISSION_WARNING, FormDisposition, FormError, FormSubmission, SolveForm,
    load_problem_image,
};
pub use output::ConsoleFormatter;
pub use progress::{SimpleProgress, SpinnerReporter};
