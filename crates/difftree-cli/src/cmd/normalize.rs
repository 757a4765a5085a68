// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use difftree_core::{DifferentialElement, PathSpec};
use difftree_settings::SettingsService;
use difftree_settings_fs::FsSettingsStore;
use serde_json::Value;
use tracing::info;

use crate::cli::{Format, RuleOverrides};
use crate::io::{open_sink, read_differential};

pub fn run(
    service: &SettingsService<FsSettingsStore>,
    input: &Path,
    out: Option<&Path>,
    format: Format,
    rules: RuleOverrides,
) -> Result<()> {
    let settings = super::effective_settings(service, rules)?;
    let normalizer = settings.normalizer()?;
    let differential = read_differential(input)?;

    let report = normalizer
        .normalize_with_report(&differential)
        .with_context(|| format!("{} is not a valid differential", input.display()))?;
    info!(
        input = %input.display(),
        elements = report.elements.len(),
        synthetic = report.synthetic,
        max_depth = report.max_depth,
        "normalized differential"
    );

    let mut sink = open_sink(out)?;
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut sink, &report.elements)?;
            writeln!(sink)?;
        }
        Format::Table => {
            writeln!(sink, "{}", render_table(normalizer.spec(), &report.elements))?;
        }
    }
    sink.flush()?;
    Ok(())
}

fn render_table(spec: PathSpec, elements: &[DifferentialElement<Value>]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "path", "depth", "kind", "payload"]);
    for (i, element) in elements.iter().enumerate() {
        let kind = if element.synthetic { "synthetic" } else { "original" };
        let payload = element
            .payload
            .as_ref()
            .map_or_else(|| "-".to_owned(), Value::to_string);
        table.add_row(vec![
            i.to_string(),
            element.path.clone(),
            spec.depth(&element.path).to_string(),
            kind.to_owned(),
            payload,
        ]);
    }
    table
}
