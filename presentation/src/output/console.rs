//! Console output formatting for tutor replies and errors

use crate::form::EMPTY_SUBMISSION_WARNING;
use colored::Colorize;
use tutor_application::{GatewayError, SolveError};
use tutor_domain::{Language, Track, TutorReply, Verbosity};

/// Fixed operator string for the uninitialized-client case
pub const SERVICE_UNAVAILABLE: &str = "تعذر الاتصال بخدمة Gemini.";

/// Formats tutor replies and errors for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete answer with its summary header
    pub fn format(
        reply: &TutorReply,
        language: Language,
        track: Track,
        verbosity: Verbosity,
    ) -> String {
        let mut output = String::new();

        output.push_str(&format!("\n{}\n\n", "✅ الحل والشرح المُفصَّل".green().bold()));
        output.push_str(&format!(
            "{}\n\n",
            Self::summary_line(language, track, verbosity).cyan()
        ));
        // The model's text is rendered unmodified
        output.push_str(&reply.text);
        output.push('\n');

        output
    }

    /// Summary line echoing the three selected labels
    pub fn summary_line(language: Language, track: Track, verbosity: Verbosity) -> String {
        format!(
            "المستوى: {} | اللغة: {} | الطول: {}",
            track.label(),
            language.label(),
            verbosity.label()
        )
    }

    /// Format as JSON
    pub fn format_json(reply: &TutorReply) -> String {
        serde_json::to_string_pretty(reply).unwrap_or_else(|_| "{}".to_string())
    }

    /// The fixed operator-facing text for a failed submission
    ///
    /// Every failure is terminal for that single request and requires a
    /// new manual submission; none aborts the process.
    pub fn error_text(error: &SolveError) -> String {
        match error {
            SolveError::Problem(e) if e.is_empty_problem() => {
                EMPTY_SUBMISSION_WARNING.to_string()
            }
            SolveError::Problem(e) => e.to_string(),
            SolveError::Gateway(GatewayError::Unavailable) => SERVICE_UNAVAILABLE.to_string(),
            SolveError::Gateway(GatewayError::Api(e)) => {
                format!("حدث خطأ في واجهة API: {}", e)
            }
            SolveError::Gateway(e) => format!("حدث خطأ غير متوقع: {}", e),
        }
    }

    /// Colorized error rendering
    pub fn format_error(error: &SolveError) -> String {
        let text = Self::error_text(error);
        if matches!(error, SolveError::Problem(e) if e.is_empty_problem()) {
            format!("{}", text.yellow().bold())
        } else {
            format!("{}", text.red().bold())
        }
    }
}
