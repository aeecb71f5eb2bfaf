//! CLI for the DRW download rename watcher.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use drw_core::relocate::CollisionPolicy;
use std::path::PathBuf;

use commands::{run_completions, run_sanitize, run_watch};

/// Top-level CLI for the DRW download rename watcher.
#[derive(Debug, Parser)]
#[command(name = "drw")]
#[command(about = "DRW: browser-aware download renaming watcher", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Watch a downloads directory and rename new files after the active browser tab.
    Watch {
        /// Directory to watch (default: the user's Downloads directory).
        #[arg(long, value_name = "DIR")]
        watch_dir: Option<PathBuf>,

        /// Directory renamed files are moved into (default: <watch-dir>/renamed).
        #[arg(long, value_name = "DIR")]
        dest_dir: Option<PathBuf>,

        /// Give up waiting for an in-progress download after this many seconds.
        #[arg(long, default_value = "60", value_name = "SECS")]
        timeout_secs: u64,

        /// Poll interval while waiting for a download to finish, in milliseconds.
        #[arg(long, default_value = "1000", value_name = "MS")]
        poll_ms: u64,

        /// Settle delay after a file stabilizes, before it is renamed.
        #[arg(long, default_value = "2", value_name = "SECS")]
        settle_secs: u64,

        /// What to do when the destination name is taken: overwrite or suffix.
        #[arg(long, default_value = "overwrite", value_name = "POLICY")]
        on_collision: CollisionPolicy,

        /// Shell command whose stdout becomes the context string, overriding
        /// the platform default (Safari via AppleScript on macOS, none elsewhere).
        #[arg(long, value_name = "CMD")]
        context_cmd: Option<String>,
    },

    /// Print the filesystem-safe name derived from a string.
    Sanitize {
        /// Raw context string, e.g. a URL.
        input: String,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Watch {
                watch_dir,
                dest_dir,
                timeout_secs,
                poll_ms,
                settle_secs,
                on_collision,
                context_cmd,
            } => run_watch(
                watch_dir,
                dest_dir,
                timeout_secs,
                poll_ms,
                settle_secs,
                on_collision,
                context_cmd,
            ),
            CliCommand::Sanitize { input } => run_sanitize(&input),
            CliCommand::Completions { shell } => run_completions(shell),
        }
    }
}

#[cfg(test)]
mod tests;
