// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use difftree_core::ReopenPolicy;

/// Normalize and inspect path-addressed differentials.
#[derive(Debug, Parser)]
#[command(name = "difftree", version, about)]
pub struct Cli {
    /// Directory holding difftree settings (defaults to the platform config dir).
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` wins.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fill skipped ancestors with synthetic placeholder elements.
    Normalize {
        /// Differential JSON file, or `-` for stdin.
        input: PathBuf,
        /// Write the result here instead of stdout.
        #[arg(long, short)]
        out: Option<PathBuf>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        #[command(flatten)]
        rules: RuleOverrides,
    },
    /// Report elements whose parent does not appear before them.
    Check {
        /// Differential JSON file, or `-` for stdin.
        input: PathBuf,
        #[command(flatten)]
        rules: RuleOverrides,
    },
    /// Inspect or change stored normalizer settings.
    Config {
        /// Settings action.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `config` actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective settings as JSON.
    Show,
    /// Update and persist settings.
    Set(RuleOverrides),
}

/// Flags that override stored normalizer settings.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct RuleOverrides {
    /// Path segment delimiter.
    #[arg(long, value_name = "CHAR")]
    pub delimiter: Option<char>,
    /// What to do when a path re-opens an already emitted branch.
    #[arg(long, value_enum)]
    pub reopen: Option<ReopenArg>,
}

/// Output format for `normalize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Pretty-printed JSON array.
    Json,
    /// Human-readable table.
    Table,
}

/// CLI spelling of [`ReopenPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReopenArg {
    /// Insert a fresh synthetic ancestor.
    Allow,
    /// Fail the run.
    Reject,
}

impl From<ReopenArg> for ReopenPolicy {
    fn from(arg: ReopenArg) -> Self {
        match arg {
            ReopenArg::Allow => Self::Allow,
            ReopenArg::Reject => Self::Reject,
        }
    }
}
