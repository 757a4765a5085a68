// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use difftree_core::insertions;
use difftree_settings::SettingsService;
use difftree_settings_fs::FsSettingsStore;

use crate::cli::RuleOverrides;
use crate::io::read_differential;

/// Lists every ancestor `normalize` would insert, then fails unless there are none.
pub fn run(
    service: &SettingsService<FsSettingsStore>,
    input: &Path,
    rules: RuleOverrides,
) -> Result<()> {
    let settings = super::effective_settings(service, rules)?;
    let normalizer = settings.normalizer()?;
    let differential = read_differential(input)?;

    let report = normalizer
        .normalize_with_report(&differential)
        .with_context(|| format!("{} is not a valid differential", input.display()))?;
    let missing = insertions(&report.elements);

    let mut stdout = io::stdout().lock();
    for insertion in &missing {
        writeln!(
            stdout,
            "{}: `{}` is missing ancestor `{}`",
            insertion.needed_by_position, insertion.needed_by, insertion.path
        )?;
    }
    if !missing.is_empty() {
        bail!(
            "{} missing ancestor(s) across {} element(s); run `difftree normalize` to insert them",
            missing.len(),
            differential.len()
        );
    }
    writeln!(
        stdout,
        "complete: {} element(s), max depth {}",
        differential.len(),
        report.max_depth
    )?;
    Ok(())
}
