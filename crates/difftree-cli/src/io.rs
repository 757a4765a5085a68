// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Reading differentials and choosing where output goes.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use difftree_core::DifferentialElement;
use serde_json::Value;

/// Differential with untyped JSON payloads; the CLI never looks inside them.
pub type JsonDifferential = Vec<DifferentialElement<Value>>;

/// Parse a differential from `input`, or from stdin when `input` is `-`.
pub fn read_differential(input: &Path) -> Result<JsonDifferential> {
    let reader: Box<dyn Read> = if input == Path::new("-") {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(input)
            .with_context(|| format!("failed to open {}", input.display()))?;
        Box::new(BufReader::new(file))
    };
    serde_json::from_reader(reader)
        .with_context(|| format!("{} is not a differential JSON array", input.display()))
}

/// Stdout, or a freshly created file.
pub fn open_sink(out: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match out {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    })
}
