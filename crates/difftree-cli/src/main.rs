// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! difftree CLI entrypoint.
//!
//! Normalizes path-addressed differentials read as JSON, reports missing
//! ancestors, and manages the stored normalizer settings.
//!
//! # Usage
//! ```text
//! difftree [--config-dir DIR] [-v...] <normalize|check|config> [options]
//! ```
//!
//! Exits with code `0` on success and non-zero on error (including `check`
//! finding gaps). Logs go to stderr; data goes to stdout or `--out`.

mod cli;
mod cmd;
mod io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cmd::run(cli)
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
