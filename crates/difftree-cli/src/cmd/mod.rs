// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Subcommand implementations.

mod check;
mod config;
mod normalize;

use std::path::Path;

use anyhow::{Context, Result};
use difftree_settings::{NormalizerSettings, SettingsService};
use difftree_settings_fs::FsSettingsStore;

use crate::cli::{Cli, Command, RuleOverrides};

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let service = settings_service(cli.config_dir.as_deref())?;
    match cli.command {
        Command::Normalize {
            input,
            out,
            format,
            rules,
        } => normalize::run(&service, &input, out.as_deref(), format, rules),
        Command::Check { input, rules } => check::run(&service, &input, rules),
        Command::Config { action } => config::run(&service, action),
    }
}

fn settings_service(config_dir: Option<&Path>) -> Result<SettingsService<FsSettingsStore>> {
    let store = match config_dir {
        Some(dir) => FsSettingsStore::at(dir),
        None => FsSettingsStore::new().context("failed to locate settings directory")?,
    };
    Ok(SettingsService::new(store))
}

/// Stored settings with command-line overrides applied on top.
fn effective_settings(
    service: &SettingsService<FsSettingsStore>,
    rules: RuleOverrides,
) -> Result<NormalizerSettings> {
    let stored = service.normalizer_settings().with_context(|| {
        format!(
            "failed to load settings from {}",
            service.store().base().display()
        )
    })?;
    Ok(rules.apply(stored))
}

impl RuleOverrides {
    fn apply(self, mut settings: NormalizerSettings) -> NormalizerSettings {
        if let Some(delimiter) = self.delimiter {
            settings.delimiter = delimiter;
        }
        if let Some(reopen) = self.reopen {
            settings.reopen = reopen.into();
        }
        settings
    }
}
