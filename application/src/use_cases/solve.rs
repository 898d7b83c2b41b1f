//! Solve use case.
//!
//! Executes one submission end to end: validate the inputs, build the
//! instruction string, make the single gateway call, return the reply.
//! Each execution is stateless and independent.

use crate::ports::model_gateway::{GatewayError, ModelGateway};
use crate::ports::progress::SolveProgressNotifier;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};
use tutor_domain::{
    DomainError, Language, Problem, ProblemImage, PromptTemplate, Track, TutorReply, Verbosity,
};

/// Errors that can occur during Solve execution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// Input validation failed; no remote call was attempted
    #[error("invalid submission: {0}")]
    Problem(#[from] DomainError),

    /// The gateway call failed
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Input for the [`SolveUseCase`].
///
/// Carries the raw form fields; validation happens inside `execute`.
#[derive(Debug, Clone, Default)]
pub struct SolveInput {
    /// Free-text problem statement, if entered
    pub text: Option<String>,
    /// Uploaded problem image, if any
    pub image: Option<ProblemImage>,
    /// Language the answer must be written in
    pub language: Language,
    /// Academic track of the student
    pub track: Track,
    /// Desired explanation length
    pub verbosity: Verbosity,
}

impl SolveInput {
    pub fn new(text: Option<String>, image: Option<ProblemImage>) -> Self {
        Self {
            text,
            image,
            ..Default::default()
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_track(mut self, track: Track) -> Self {
        self.track = track;
        self
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }
}

/// Use case for one tutoring submission.
///
/// 1. Construct the [`Problem`] (at-least-one-input invariant)
/// 2. Build the prompt with [`PromptTemplate`]
/// 3. Make the single gateway call
/// 4. Return the [`TutorReply`]
pub struct SolveUseCase {
    gateway: Arc<dyn ModelGateway>,
}

impl SolveUseCase {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    /// Execute the submission with progress callbacks.
    pub async fn execute(
        &self,
        input: SolveInput,
        progress: &dyn SolveProgressNotifier,
    ) -> Result<TutorReply, SolveError> {
        let problem = Problem::new(input.text, input.image)?;

        let prompt =
            PromptTemplate::solve(&problem, input.language, input.track, input.verbosity);

        let model = self.gateway.model().to_string();
        info!(
            model = %model,
            has_image = problem.has_image(),
            "sending problem to tutor model"
        );
        debug!(prompt_bytes = prompt.len(), "built instruction string");

        progress.on_request_start(&model);
        let result = self.gateway.generate(&prompt, problem.image()).await;
        progress.on_request_end(result.is_ok());

        let text = result?;
        info!(reply_bytes = text.len(), "received tutor reply");

        Ok(TutorReply::new(text, model, chrono::Utc::now().to_rfc3339()))
    }
}
