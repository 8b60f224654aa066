//! `noteskins` command line entry point.
//!
//! # Responsibility
//! - Parse global options and dispatch one subcommand.
//! - Start file logging when a log directory is given.
//!
//! # Invariants
//! - Every failure exits with status 1 and one message on stderr.
//! - Rendered HTML goes to stdout or the requested file, never to logs.

mod demo;
mod render;
mod styles;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Render the shared notes page under any of the built-in skins.
#[derive(Debug, Parser)]
#[command(name = "noteskins", version)]
struct Cli {
    /// Log verbosity: trace|debug|info|warn|error
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Directory for rolling log files. Logging is off when omitted.
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every style with its theme tokens
    Styles(styles::StylesArgs),
    /// Render the notes page under one style
    Render(render::RenderArgs),
    /// Render the notes page under every style into a directory
    RenderAll(render::RenderAllArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(log_dir) = &cli.log_dir {
        let level = cli
            .log_level
            .clone()
            .unwrap_or_else(|| noteskins_core::default_log_level().to_string());
        let log_dir = absolute(log_dir)?;
        noteskins_core::init_logging(&level, &log_dir)
            .map_err(|err| anyhow!(err))
            .context("failed to start logging")?;
        info!(
            "event=cli_start module=cli status=ok version={}",
            noteskins_core::core_version()
        );
    }

    match cli.command {
        Command::Styles(args) => args.execute(),
        Command::Render(args) => args.execute(),
        Command::RenderAll(args) => args.execute(),
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    Ok(cwd.join(path))
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_log_options_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "noteskins",
            "render",
            "--style",
            "zen",
            "--log-level",
            "warn",
            "--log-dir",
            "/tmp/noteskins-logs",
        ])
        .expect("valid arguments");

        assert_eq!(cli.log_level.as_deref(), Some("warn"));
        assert!(matches!(cli.command, Command::Render(_)));
    }
}
