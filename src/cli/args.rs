//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all Destyle
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `check`: Report unused style properties without editing anything
//! - `clean`: Delete the source lines of unused style properties
//! - `init`: Initialize destyle configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        self.command
            .as_ref()
            .and_then(Command::common_args)
            .is_some_and(|common| common.verbose)
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Files or directories to check (default: config includes)
    pub paths: Vec<PathBuf>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Parser)]
pub struct CleanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually delete lines (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    /// Files or directories to clean (default: config includes)
    pub paths: Vec<PathBuf>,
    #[command(flatten)]
    pub args: CleanArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report unused StyleSheet style properties
    Check(CheckCommand),
    /// Delete the source lines of unused StyleSheet style properties
    Clean(CleanCommand),
    /// Initialize a new .destylerc.json configuration file
    Init,
}

impl Command {
    fn common_args(&self) -> Option<&CommonArgs> {
        match self {
            Command::Check(cmd) => Some(&cmd.args.common),
            Command::Clean(cmd) => Some(&cmd.args.common),
            Command::Init => None,
        }
    }
}
