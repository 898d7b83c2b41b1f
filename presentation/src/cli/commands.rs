//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the tutor's answer
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Formatted console output with a summary header
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for bac-tutor
#[derive(Parser, Debug)]
#[command(name = "bac-tutor")]
#[command(author, version, about = "AI math & physics tutor for the Moroccan baccalaureate")]
#[command(long_about = r#"
bac-tutor sends a math or physics problem (text and/or an image of the
exercise) to a multimodal Gemini model and prints a step-by-step,
pedagogy-first answer following the Moroccan secondary-school methodology.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./tutor.toml        Project-level config
3. ~/.config/bac-tutor/config.toml   Global config

The API key is read from the GEMINI_API_KEY environment variable (or the
[gemini] section of the config file).

Example:
  bac-tutor "أوجد نهاية المتتالية un = n/(n+1)"
  bac-tutor --image exercise.png --language french --verbosity detailed
  bac-tutor --form
"#)]
pub struct Cli {
    /// The problem text to solve (omit when using --image or --form)
    pub question: Option<String>,

    /// Path to an image of the problem (jpg, jpeg or png)
    #[arg(short, long, value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// Start the interactive form
    #[arg(short, long)]
    pub form: bool,

    /// Answer language (arabic, french)
    #[arg(short, long, value_name = "LANGUAGE")]
    pub language: Option<String>,

    /// Academic track (sciences-maths, sciences-exp, lettres, tronc-commun)
    #[arg(short, long, value_name = "TRACK")]
    pub track: Option<String>,

    /// Explanation length (short, medium, detailed)
    #[arg(long, value_name = "VERBOSITY")]
    pub verbosity: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level of logs (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
