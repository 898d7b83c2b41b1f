//! Prompt template for the tutoring flow

use crate::core::problem::Problem;
use crate::options::{Language, Track, Verbosity};

/// Template for the instruction string sent to the model
pub struct PromptTemplate;

impl PromptTemplate {
    /// Fixed persona preamble: Moroccan math/physics teacher, step-by-step
    /// pedagogy following the Moroccan secondary-school methodology.
    pub fn persona() -> &'static str {
        "أنت أستاذ رياضيات وفيزياء مغربي متميز. طريقة شرحك تعتمد على المنهجية المغربية \
         المتبعة في الثانويات المغربية (باك، علوم رياضية). \
         يجب أن تكون إجابتك تعليمية، خطوة بخطوة، وتستخدم مصطلحات المنهج."
    }

    /// Constraint block listing the three selected options
    pub fn constraints(language: Language, track: Track, verbosity: Verbosity) -> String {
        format!(
            "المستوى الدراسي للطالب: **{}**.\n\
             اللغة المطلوبة للإجابة: **{}**.\n\
             طول الشرح المطلوب: **{}**.\n",
            track.label(),
            language.label(),
            verbosity.label(),
        )
    }

    /// Fixed task instruction preceding the question text
    pub fn task_instruction() -> &'static str {
        "حل المسألة الرياضية أو الفيزيائية المرفقة (نص أو صورة). \
         ابدأ بعبارة تشجيعية، ثم قدّم الحل المُفصَّل وفقاً للقيود المذكورة. \
         المسألة هي: "
    }

    /// Build the full instruction string for a submission.
    ///
    /// Deterministic concatenation: persona, constraint block, task
    /// instruction, then the literal question text. No branching on
    /// content, no sanitization, no length limit; cannot fail.
    pub fn solve(
        problem: &Problem,
        language: Language,
        track: Track,
        verbosity: Verbosity,
    ) -> String {
        Self::solve_text(problem.question_text(), language, track, verbosity)
    }

    /// Build the instruction string from a raw question text.
    ///
    /// Total over all string inputs, including the empty string.
    pub fn solve_text(
        question_text: &str,
        language: Language,
        track: Track,
        verbosity: Verbosity,
    ) -> String {
        format!(
            "{}\n\n---\n\n{}\n\n---\n\n{}\n{}",
            Self::persona(),
            Self::constraints(language, track, verbosity),
            Self::task_instruction(),
            question_text,
        )
    }
}
