//! Interactive terminal form
//!
//! Three selection controls (language, track, explanation length), a
//! free-text box and an image path. The session returns to the form
//! after a failed attempt so the student can correct and resubmit.

use colored::Colorize;
use inquire::{InquireError, Select, Text};
use std::path::Path;
use thiserror::Error;
use tutor_domain::{ImageFormat, Language, ProblemImage, Track, Verbosity};

/// Warning shown when neither an image nor question text was supplied
pub const EMPTY_SUBMISSION_WARNING: &str = "الرجاء إما تحميل صورة أو كتابة نص المسألة أولاً.";

/// Errors raised while collecting form input
#[derive(Error, Debug)]
pub enum FormError {
    #[error("form cancelled")]
    Cancelled,

    #[error("prompt failed: {0}")]
    Prompt(String),

    #[error("could not read image file {path}: {source}")]
    ImageRead {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    UnsupportedImage(#[from] tutor_domain::DomainError),
}

/// What the interactive session should do after a failed form pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormDisposition {
    /// The student cancelled; leave the session cleanly
    Quit,
    /// The terminal itself failed; retrying would fail the same way
    Fatal,
    /// An input mistake; show the message and return to the form
    Retry,
}

impl FormError {
    pub fn disposition(&self) -> FormDisposition {
        match self {
            FormError::Cancelled => FormDisposition::Quit,
            FormError::Prompt(_) => FormDisposition::Fatal,
            FormError::ImageRead { .. } | FormError::UnsupportedImage(_) => FormDisposition::Retry,
        }
    }
}

impl From<InquireError> for FormError {
    fn from(err: InquireError) -> Self {
        match err {
            InquireError::OperationCanceled | InquireError::OperationInterrupted => {
                FormError::Cancelled
            }
            other => FormError::Prompt(other.to_string()),
        }
    }
}

/// One completed form submission
#[derive(Debug, Clone)]
pub struct FormSubmission {
    pub text: Option<String>,
    pub image: Option<ProblemImage>,
    pub language: Language,
    pub track: Track,
    pub verbosity: Verbosity,
}

/// Interactive form with preselected option defaults
pub struct SolveForm {
    default_language: Language,
    default_track: Track,
    default_verbosity: Verbosity,
}

impl SolveForm {
    pub fn new(language: Language, track: Track, verbosity: Verbosity) -> Self {
        Self {
            default_language: language,
            default_track: track,
            default_verbosity: verbosity,
        }
    }

    /// Run the form once and collect a submission
    pub fn fill(&self) -> Result<FormSubmission, FormError> {
        println!();
        println!("{}", "👨‍🏫 مُعلِّم الرياضيات والفيزياء المغربي الذكي".bold());
        println!();

        let language = Self::select(
            "اختر لغة الإجابة:",
            Language::all(),
            self.default_language,
        )?;
        let track = Self::select("المستوى الدراسي:", Track::all(), self.default_track)?;
        let verbosity = Self::select(
            "طول الشرح المطلوب:",
            Verbosity::all(),
            self.default_verbosity,
        )?;

        let text = Text::new("اكتب المسألة مباشرة هنا:")
            .with_help_message("أدخل نص المسألة الرياضية أو الفيزيائية، أو اترك الحقل فارغاً")
            .prompt()
            .map(|t| {
                let t = t.trim().to_string();
                if t.is_empty() { None } else { Some(t) }
            })?;

        let image_path = Text::new("مسار صورة المسألة (jpg/jpeg/png):")
            .with_help_message("مثل تمرين من كتاب أو ورقة؛ اترك الحقل فارغاً إن لم توجد صورة")
            .prompt()
            .map(|p| {
                let p = p.trim().to_string();
                if p.is_empty() { None } else { Some(p) }
            })?;

        let image = match image_path {
            Some(path) => Some(load_problem_image(Path::new(&path))?),
            None => None,
        };

        Ok(FormSubmission {
            text,
            image,
            language,
            track,
            verbosity,
        })
    }

    fn select<T: Copy + Eq + std::fmt::Display>(
        label: &str,
        choices: &[T],
        default: T,
    ) -> Result<T, FormError> {
        let cursor = choices.iter().position(|c| *c == default).unwrap_or(0);
        let chosen = Select::new(label, choices.to_vec())
            .with_starting_cursor(cursor)
            .prompt()?;
        Ok(chosen)
    }
}

/// Read a problem image from disk, enforcing the jpg/jpeg/png restriction
pub fn load_problem_image(path: &Path) -> Result<ProblemImage, FormError> {
    let format = ImageFormat::from_path(path)?;
    let data = std::fs::read(path).map_err(|source| FormError::ImageRead {
        path: path.display().to_string(),
        source,
    })?;
    Ok(ProblemImage::new(data, format))
}
