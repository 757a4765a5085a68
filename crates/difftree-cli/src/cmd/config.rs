// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::io::{self, Write};

use anyhow::{Context, Result};
use difftree_settings::{NormalizerSettings, SettingsService};
use difftree_settings_fs::FsSettingsStore;
use tracing::info;

use crate::cli::{ConfigAction, RuleOverrides};

pub fn run(service: &SettingsService<FsSettingsStore>, action: ConfigAction) -> Result<()> {
    let settings = match action {
        ConfigAction::Show => super::effective_settings(service, RuleOverrides::default())?,
        ConfigAction::Set(rules) => {
            let updated = rules.apply(super::effective_settings(service, RuleOverrides::default())?);
            service
                .save_normalizer_settings(&updated)
                .context("refusing to save settings")?;
            info!(dir = %service.store().base().display(), "saved normalizer settings");
            updated
        }
    };
    print_settings(&settings)
}

fn print_settings(settings: &NormalizerSettings) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, settings)?;
    writeln!(stdout)?;
    Ok(())
}
