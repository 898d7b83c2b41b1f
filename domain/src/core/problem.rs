//! Problem value object

use super::error::DomainError;
use super::image::ProblemImage;

/// Fixed sentence substituted for the question text when the problem
/// arrives as an image only.
pub const IMAGE_ONLY_PLACEHOLDER: &str = "تم إرسال المسألة في الصورة المرفقة.";

/// A problem submitted by the student (Value Object)
///
/// Holds the free-text statement and/or the uploaded image. At least one
/// of the two must be present; whitespace-only text counts as absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    text: Option<String>,
    image: Option<ProblemImage>,
}

impl Problem {
    /// Create a problem, enforcing the at-least-one-input invariant
    pub fn new(
        text: Option<String>,
        image: Option<ProblemImage>,
    ) -> Result<Self, DomainError> {
        let text = text.filter(|t| !t.trim().is_empty());
        if text.is_none() && image.is_none() {
            return Err(DomainError::EmptyProblem);
        }
        Ok(Self { text, image })
    }

    /// Create a text-only problem
    pub fn from_text(text: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(Some(text.into()), None)
    }

    /// The question text embedded in the prompt: the literal statement,
    /// or the fixed placeholder sentence for image-only submissions.
    pub fn question_text(&self) -> &str {
        self.text.as_deref().unwrap_or(IMAGE_ONLY_PLACEHOLDER)
    }

    /// The uploaded image, if any
    pub fn image(&self) -> Option<&ProblemImage> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}
