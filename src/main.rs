//! style-quiz CLI
//!
//! Learning-style self-assessment quiz for the terminal.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use style_quiz::assets::{BuiltinIcons, IconDir, default_icon_dir};
use style_quiz::bank::QuestionSet;
use style_quiz::quiz::Quiz;
use style_quiz::report::{ResultReport, format_questions, format_report};
use style_quiz::score::score;
use style_quiz::tui::run::{self, SharedIcons};
use style_quiz::types::{OutputFormat, QuizConfig};

#[derive(Parser)]
#[command(name = "style-quiz")]
#[command(about = "Find out whether you learn best by seeing, hearing or doing")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the quiz interactively (default)
    Run(RunArgs),

    /// Print the question set
    Questions {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Score a complete answer string, one letter (a, b or c) per question
    Score {
        /// Answers in question order, e.g. abcabcabcabcab
        answers: String,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,

        /// Include the predominant style in the report
        #[arg(long)]
        style_label: bool,
    },
}

#[derive(Args, Default)]
struct RunArgs {
    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,

    /// Draw an icon for the predominant style over the result chart
    #[arg(long)]
    icon: bool,

    /// Directory holding eyes.txt, ears.txt and hands.txt
    #[arg(long, value_name = "DIR")]
    icon_dir: Option<PathBuf>,

    /// Name the predominant style on the result screen
    #[arg(long)]
    style_label: bool,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None => cmd_run(RunArgs::default()),
        Some(Commands::Run(args)) => cmd_run(args),
        Some(Commands::Questions { format }) => cmd_questions(format.into()),
        Some(Commands::Score {
            answers,
            format,
            style_label,
        }) => cmd_score(&answers, format.into(), style_label),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// LOGGING
// ============================================================================

/// Log to a file, leaving the terminal to the TUI.
fn init_file_logging(path: &Path) -> Result<(), String> {
    let file = File::create(path)
        .map_err(|e| format!("Cannot open log file {}: {}", path.display(), e))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Log warnings to stderr so they don't interfere with stdout reports.
fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .init();
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_run(args: RunArgs) -> Result<(), String> {
    if let Some(path) = &args.log_file {
        init_file_logging(path)?;
    }

    let config = QuizConfig {
        show_progress: !args.no_progress,
        show_result_icon: args.icon,
        show_style_label: args.style_label,
    };

    let quiz = Quiz::new(QuestionSet::learning_style(), config);
    run::run(quiz, icon_source(args.icon_dir)).map_err(|e| e.to_string())
}

fn cmd_questions(format: OutputFormat) -> Result<(), String> {
    init_stderr_logging();

    emit(format_questions(&QuestionSet::learning_style(), format));
    Ok(())
}

fn cmd_score(answers: &str, format: OutputFormat, style_label: bool) -> Result<(), String> {
    init_stderr_logging();

    let config = QuizConfig {
        show_style_label: style_label,
        ..QuizConfig::default()
    };
    let mut quiz = Quiz::new(QuestionSet::learning_style(), config);
    let tally = score(&mut quiz, answers).map_err(|e| e.to_string())?;

    emit(format_report(&ResultReport::new(tally, style_label), format));
    Ok(())
}

// ============================================================================
// HELPERS
// ============================================================================

/// An explicit directory wins over installed icons. Built-in icons otherwise.
fn icon_source(icon_dir: Option<PathBuf>) -> SharedIcons {
    match icon_dir {
        Some(dir) => Arc::new(IconDir::new(dir)),
        None if default_icon_dir().is_dir() => Arc::new(IconDir::default()),
        None => Arc::new(BuiltinIcons),
    }
}

/// Print a report, ending with exactly one newline.
fn emit(text: String) {
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
}
