//! CLI entrypoint for bac-tutor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tutor_application::{NoProgress, SolveInput, SolveProgressNotifier, SolveUseCase};
use tutor_domain::{Language, Track, TutorReply, Verbosity};
use tutor_infrastructure::{ConfigLoader, FileConfig, GeminiGateway};
use tutor_presentation::{
    Cli, ConsoleFormatter, FormDisposition, OutputFormat, SimpleProgress, SolveForm,
    SpinnerReporter, load_problem_image,
};

fn render(
    reply: &TutorReply,
    language: Language,
    track: Track,
    verbosity: Verbosity,
    output: OutputFormat,
) -> String {
    match output {
        OutputFormat::Text => ConsoleFormatter::format(reply, language, track, verbosity),
        OutputFormat::Json => ConsoleFormatter::format_json(reply),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting bac-tutor");

    // Load configuration
    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };

    // Option selection: CLI flags override config defaults
    let language: Language = match &cli.language {
        Some(s) => s.parse().map_err(|e| anyhow::anyhow!("{e}"))?,
        None => config.defaults.language,
    };
    let track: Track = match &cli.track {
        Some(s) => s.parse().map_err(|e| anyhow::anyhow!("{e}"))?,
        None => config.defaults.track,
    };
    let verbosity: Verbosity = match &cli.verbosity {
        Some(s) => s.parse().map_err(|e| anyhow::anyhow!("{e}"))?,
        None => config.defaults.verbosity,
    };

    // === Dependency Injection ===
    // One gateway handle for the process lifetime, read-only after init
    let gateway = Arc::new(GeminiGateway::from_config(&config.gemini));
    let use_case = SolveUseCase::new(gateway);

    // Progress: spinner on a terminal, plain text when piped, nothing in quiet mode
    let spinner = SpinnerReporter::new();
    let quiet = NoProgress;
    let plain = SimpleProgress;
    let progress: &dyn SolveProgressNotifier = if cli.quiet {
        &quiet
    } else if std::io::stderr().is_terminal() {
        &spinner
    } else {
        &plain
    };

    // Interactive mode: keep returning to the form until a submission
    // succeeds or the student cancels
    if cli.form {
        let form = SolveForm::new(language, track, verbosity);
        loop {
            let submission = match form.fill() {
                Ok(submission) => submission,
                Err(e) => match e.disposition() {
                    FormDisposition::Quit => {
                        println!("Bye!");
                        return Ok(());
                    }
                    FormDisposition::Fatal => {
                        eprintln!("{}", e);
                        std::process::exit(1);
                    }
                    FormDisposition::Retry => {
                        eprintln!("{}", e);
                        continue;
                    }
                },
            };

            let input = SolveInput::new(submission.text, submission.image)
                .with_language(submission.language)
                .with_track(submission.track)
                .with_verbosity(submission.verbosity);
            let selected = (input.language, input.track, input.verbosity);

            match use_case.execute(input, progress).await {
                Ok(reply) => {
                    println!(
                        "{}",
                        render(&reply, selected.0, selected.1, selected.2, cli.output)
                    );
                    return Ok(());
                }
                Err(error) => {
                    // Show the message and offer the form again
                    eprintln!("{}", ConsoleFormatter::format_error(&error));
                }
            }
        }
    }

    // One-shot mode
    let image = match &cli.image {
        Some(path) => match load_problem_image(path) {
            Ok(image) => Some(image),
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
        None => None,
    };
    let input = SolveInput::new(cli.question.clone(), image)
        .with_language(language)
        .with_track(track)
        .with_verbosity(verbosity);

    match use_case.execute(input, progress).await {
        Ok(reply) => {
            println!("{}", render(&reply, language, track, verbosity, cli.output));
            Ok(())
        }
        Err(error) => {
            eprintln!("{}", ConsoleFormatter::format_error(&error));
            std::process::exit(1);
        }
    }
}
