use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::{Value, json};
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use semver_engine::config::{EngineConfig, LogConfig, LogFormat};
use semver_engine::range::{Range, max_satisfying};
use semver_engine::{coerce, compare, intersects, min_version, parse_version, satisfies};

#[derive(Parser)]
#[command(name = "semver-engine")]
#[command(version, about = "Semantic version parsing, comparison and range solving")]
struct Cli {
    /// Path to a JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a version strictly and print its canonical form
    Parse {
        #[arg(value_name = "VERSION")]
        text: String,
    },
    /// Compare two versions (-1, 0, 1)
    Compare { left: String, right: String },
    /// Check if a version satisfies a range
    Satisfies {
        #[arg(value_name = "VERSION")]
        subject: String,
        range: String,
    },
    /// Lowest version satisfying a range
    MinVersion { range: String },
    /// Check if two ranges overlap
    Intersects { left: String, right: String },
    /// Extract a version from loosely formatted text
    Coerce { input: String },
    /// Print the normalized comparator form of a range
    Range { range: String },
    /// Highest of the given versions satisfying a range
    MaxSatisfying {
        range: String,
        #[arg(required = true)]
        versions: Vec<String>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = EngineConfig::load_or_default(cli.config.as_deref())?;
    let _guard = init_tracing(&config.log)?;

    let value = run(cli.command);
    debug!("Result: {}", value);

    if cli.json || config.output.json {
        println!("{}", serde_json::to_string(&value)?);
    } else if let Some(text) = render_text(&value) {
        println!("{text}");
    }

    Ok(if value.is_null() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn run(command: Command) -> Value {
    match command {
        Command::Parse { text } => json!(parse_version(&text)),
        Command::Compare { left, right } => json!(compare(&left, &right) as i8),
        Command::Satisfies { subject, range } => json!(satisfies(&subject, &range)),
        Command::MinVersion { range } => json!(min_version(&range)),
        Command::Intersects { left, right } => json!(intersects(&left, &right)),
        Command::Coerce { input } => json!(coerce(&input)),
        Command::Range { range } => json!(Range::parse(&range).to_string()),
        Command::MaxSatisfying { range, versions } => {
            json!(max_satisfying(versions.as_slice(), &Range::parse(&range)))
        }
    }
}

/// Absent results print nothing
fn render_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn init_tracing(config: &LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .with_context(|| format!("Invalid log level '{}'", config.level))?;

    let (writer, guard) = match &config.file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("Log file path {path:?} has no file name"))?;
            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(writer), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(config.file.is_none());

    match config.format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }

    Ok(guard)
}
