//! Command-line interface module for downsort.
//!
//! This module handles argument parsing and hands a finished
//! [`OrganizerConfig`] plus the dry-run flag to the organizer.

use crate::config::OrganizerConfig;
use crate::file_organizer::{Organizer, RunSummary};
use crate::output::OutputFormatter;
use anyhow::{Context, Result};
use clap::{Parser, ValueHint};
use std::path::{Path, PathBuf};

/// Sort the top level of a downloads folder into category subfolders.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Directory to organize (defaults to ~/Downloads).
    #[arg(value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub dir: Option<PathBuf>,

    /// Simulate the organization without moving any files or folders.
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug diagnostics on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Builds the organizer configuration for these arguments.
    pub fn config(&self) -> Result<OrganizerConfig> {
        match &self.dir {
            Some(dir) => Ok(OrganizerConfig::new(dir)),
            None => OrganizerConfig::for_downloads().context("no directory given"),
        }
    }
}

/// Represents a CLI command to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrganizeCommand {
    /// Organize files in a directory.
    Organize {
        /// If true, simulate the operation without making changes.
        dry_run: bool,
    },
}

impl From<&Args> for OrganizeCommand {
    fn from(args: &Args) -> Self {
        OrganizeCommand::Organize {
            dry_run: args.dry_run,
        }
    }
}

/// Runs the CLI application with the given command and directory path.
///
/// # Examples
///
/// ```no_run
/// use downsort::cli::{run_cli, OrganizeCommand};
/// use std::path::Path;
///
/// let result = run_cli(OrganizeCommand::Organize { dry_run: true }, Path::new("/path/to/directory"));
/// match result {
///     Ok(summary) => println!("{} moves planned", summary.planned.len()),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn run_cli(command: OrganizeCommand, dir_path: &Path) -> Result<RunSummary> {
    run_cli_with_config(command, OrganizerConfig::new(dir_path))
}

/// Runs a command against an explicit configuration.
pub fn run_cli_with_config(command: OrganizeCommand, config: OrganizerConfig) -> Result<RunSummary> {
    match command {
        OrganizeCommand::Organize { dry_run } => {
            let target = config.target_dir().to_path_buf();
            if dry_run {
                OutputFormatter::info(&format!("DRY RUN: Analyzing contents of: {}", target.display()));
            } else {
                OutputFormatter::info(&format!("Organizing contents of: {}", target.display()));
            }

            let summary = Organizer::new(config)
                .run(dry_run)
                .with_context(|| format!("could not organize {}", target.display()))?;

            if dry_run {
                if summary.planned.is_empty() {
                    OutputFormatter::info("Nothing to organize.");
                } else {
                    OutputFormatter::info(&format!(
                        "Dry run complete: {} item(s) would be moved. No files were modified.",
                        summary.planned.len()
                    ));
                }
            } else if !summary.failures.is_empty() {
                OutputFormatter::error(&format!(
                    "{} item(s) could not be moved. Please review errors above.",
                    summary.failures.len()
                ));
            }

            Ok(summary)
        }
    }
}
