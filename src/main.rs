//! CLI entry point for the bikeshare explorer.
//!
//! Prompts for a city and optional month/day filters, prints descriptive
//! statistics for the matching trips, and offers the raw rows page by page.

use anyhow::Result;
use bikeshare_stats::{
    output::OutputFormat,
    prompt::Console,
    registry::DatasetRegistry,
    session::{DEFAULT_PAGE_SIZE, Session, SessionConfig},
};
use clap::Parser;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_stats")]
#[command(about = "Explore US bikeshare trip data interactively", long_about = None)]
struct Cli {
    /// Directory containing chicago.csv, new_york_city.csv and washington.csv
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    data_dir: PathBuf,

    /// Rows shown per page of raw data
    #[arg(short = 'n', long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: quiet stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bikeshare.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    info!(data_dir = %cli.data_dir.display(), page_size = cli.page_size, "Starting session");

    let registry = DatasetRegistry::new(&cli.data_dir);
    let config = SessionConfig {
        page_size: cli.page_size,
        format: cli.format,
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());

    Session::new(console, registry, config).run()?;

    Ok(())
}
