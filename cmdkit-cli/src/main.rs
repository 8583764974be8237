// cmdkit-cli/src/main.rs
mod config;
mod models;
mod rendering;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cmdkit_core::{CmdkitError, Command, JsonFile};

use crate::config::{load_cli_config, CliConfig};
use crate::models::cli::{Cli, Commands};
use crate::rendering::{print_json, print_raw};

const LOG_FILE_NAME: &str = "cmdkit.log";

fn log_dir(config: &CliConfig) -> Option<PathBuf> {
    config.logging.dir.clone().or_else(|| {
        dirs::cache_dir()
            .or_else(|| Some(env::temp_dir()))
            .map(|d| d.join("cmdkit"))
    })
}

/// Installs the tracing subscriber. The returned guard flushes the file log
/// on drop and must live until the end of `main`.
fn init_logging(verbose: u8, config: &CliConfig) -> Result<Option<WorkerGuard>> {
    let default_level = match verbose {
        0 => config.level().unwrap_or(Level::WARN),
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(default_level.into()));

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true);

    let mut guard = None;
    let file_layer = match log_dir(config).filter(|_| config.logging.file) {
        Some(dir) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
            let (writer, worker_guard) = tracing_appender::non_blocking(file_appender);
            guard = Some(worker_guard);
            Some(
                fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false) // No colors in file
                    .with_target(true)
                    .with_line_number(true),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    info!(
        "Logging initialized. Level determined by RUST_LOG or -v flags (default: {}).",
        default_level
    );
    Ok(guard)
}

fn run_command(command: Command, raw: bool, pretty: bool) -> Result<()> {
    if raw {
        let stdout = cmdkit_core::capture(command)?;
        return print_raw(&stdout);
    }
    let value = cmdkit_core::run(command)?;
    print_json(&value, pretty)
}

fn handle(cli: Cli, config: &CliConfig) -> Result<()> {
    let pretty = config.output.pretty && !cli.compact;
    match cli.command {
        Commands::Run { line, raw } => {
            debug!(%line, raw, "Running command string");
            run_command(Command::Raw(line), raw, pretty)
        }
        Commands::Exec { args, raw } => {
            debug!(?args, raw, "Running argument list");
            run_command(Command::List(args), raw, pretty)
        }
        Commands::Read { file } => {
            let value = JsonFile::new(&file).read()?;
            print_json(&value, pretty)
        }
        Commands::Write { file, json } => {
            let value: serde_json::Value = serde_json::from_str(&json)
                .context("The JSON argument is not a valid JSON document")?;
            JsonFile::new(&file).write(&value)?;
            info!("Wrote {}", file.display());
            Ok(())
        }
    }
}

/// Child exit status to pass through, when the failure came from the child.
fn child_status(e: &anyhow::Error) -> Option<u8> {
    e.downcast_ref::<CmdkitError>()
        .and_then(CmdkitError::exit_status)
        .and_then(|status| u8::try_from(status).ok())
        .filter(|status| *status != 0)
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let cwd = match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{} Failed to get current directory: {}", "Error:".red(), e);
            return ExitCode::FAILURE;
        }
    };
    let (config, config_path) = match load_cli_config(&cwd) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            return ExitCode::FAILURE;
        }
    };

    let _guard = match init_logging(cli.verbose, &config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            return ExitCode::FAILURE;
        }
    };
    match &config_path {
        Some(path) => info!("Using configuration file at: {:?}", path),
        None => debug!("No configuration file found, using defaults."),
    }

    match handle(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Operation failed: {:#}", e);
            eprintln!("{} {:#}", "Error:".red(), e);
            child_status(&e).map(ExitCode::from).unwrap_or(ExitCode::FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_status_passed_through() {
        let err = anyhow::Error::new(CmdkitError::ProcessExecution {
            program: "grep".to_string(),
            status: 2,
            stdout: String::new(),
            stderr: String::new(),
        });
        assert_eq!(child_status(&err), Some(2));
    }

    #[test]
    fn test_child_status_absent() {
        let err = anyhow::Error::new(CmdkitError::EmptyCommand);
        assert_eq!(child_status(&err), None);
        let killed = anyhow::Error::new(CmdkitError::ProcessExecution {
            program: "sleep".to_string(),
            status: -1,
            stdout: String::new(),
            stderr: String::new(),
        });
        assert_eq!(child_status(&killed), None);
    }
}
