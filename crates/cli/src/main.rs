//! Taskboard CLI

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use commands::{ApiOptions, Commands};
use std::time::Duration;
use tracing::{Level, debug, error};

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "Taskboard command-line client")]
#[command(version)]
struct Cli {
    /// Set logging level
    #[arg(short = 'l', long, global = true, default_value = "warn")]
    log_level: LogLevel,

    /// Directory holding the persisted session
    #[arg(short = 'd', long, global = true)]
    data_dir: Option<std::path::PathBuf>,

    /// API base URL
    #[arg(long, global = true, env = "TASKBOARD_API_URL")]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(short = 't', long, global = true, default_value = "30")]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level: Level = cli.log_level.into();
    taskboard_session::telemetry::init_tracing(&level.as_str().to_lowercase())?;

    debug!("Starting Taskboard CLI");

    let api = ApiOptions {
        base_url: cli.base_url,
        timeout: Duration::from_secs(cli.timeout),
    };

    if let Err(e) = cli.command.execute(cli.data_dir, api).await {
        error!("Command failed: {e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    Ok(())
}

#[derive(Clone, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}
