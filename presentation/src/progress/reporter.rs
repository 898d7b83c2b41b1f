//! Progress reporting around the single model call

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use tutor_application::SolveProgressNotifier;

/// Spinner shown while the remote call blocks.
///
/// The call offers no cancellation; the spinner only signals that the
/// submission is being processed.
pub struct SpinnerReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl SpinnerReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }
}

impl Default for SpinnerReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SolveProgressNotifier for SpinnerReporter {
    fn on_request_start(&self, model: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!(
            "🧠 الذكاء الاصطناعي يُعالج المسألة ويُعِد الشرح... ({})",
            model
        ));
        pb.enable_steady_tick(Duration::from_millis(100));
        *self.bar.lock().unwrap() = Some(pb);
    }

    fn on_request_end(&self, success: bool) {
        if let Some(pb) = self.bar.lock().unwrap().take() {
            if success {
                pb.finish_and_clear();
            } else {
                pb.abandon_with_message(format!("{}", "x".red()));
            }
        }
    }
}

/// Plain-text progress for non-interactive output (pipes, redirects)
pub struct SimpleProgress;

impl SolveProgressNotifier for SimpleProgress {
    fn on_request_start(&self, model: &str) {
        println!("{} {}", "->".cyan(), model.bold());
    }

    fn on_request_end(&self, success: bool) {
        if success {
            println!("  {}", "v".green());
        } else {
            println!("  {} (failed)", "x".red());
        }
    }
}
