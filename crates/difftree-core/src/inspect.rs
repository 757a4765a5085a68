// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Read-only helpers for consumers of differentials.

use rustc_hash::FxHashSet;

use crate::element::DifferentialElement;
use crate::path::{PathError, PathSpec};

/// An element whose parent has not appeared earlier in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Gap {
    /// Index of the element in the inspected list.
    pub position: usize,
    /// Path of the element.
    pub path: String,
    /// Parent path that is missing.
    pub missing_parent: String,
}

/// Lists every non-root element whose parent path does not occur before it.
///
/// Every list that normalizes without insertions has no gaps. The converse holds
/// for pre-order lists only; use [`insertions`] on the normalized output for the
/// exact placeholders. Roots are not reported; a second root is
/// [`normalize`](crate::normalize)'s concern.
///
/// # Errors
///
/// Fails on the first malformed path.
pub fn find_gaps<P>(
    spec: PathSpec,
    list: &[DifferentialElement<P>],
) -> Result<Vec<Gap>, PathError> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut gaps = Vec::new();
    for (position, element) in list.iter().enumerate() {
        spec.validate(&element.path)?;
        if let Ok(parent) = spec.parent_path(&element.path) {
            if !seen.contains(parent) {
                gaps.push(Gap {
                    position,
                    path: element.path.clone(),
                    missing_parent: parent.to_owned(),
                });
            }
        }
        seen.insert(&element.path);
    }
    Ok(gaps)
}

/// A synthetic placeholder in a normalized list, tied to the original element
/// that required it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Insertion {
    /// Index of the placeholder in the normalized list.
    pub position: usize,
    /// Placeholder path.
    pub path: String,
    /// Index of the requiring element among the originals (its input position).
    pub needed_by_position: usize,
    /// Path of the requiring element.
    pub needed_by: String,
}

/// Pairs every synthetic element of a normalized list with the next original
/// element, which is the one whose classification inserted it.
///
/// Unlike [`find_gaps`], this reflects what [`normalize`](crate::normalize)
/// actually did: a branch that is left and later returned to (`A`, `A.b`,
/// `A.c`, `A.b.d`) has no gaps but still gets a placeholder.
pub fn insertions<P>(normalized: &[DifferentialElement<P>]) -> Vec<Insertion> {
    let mut out = Vec::new();
    let mut pending: Vec<(usize, &str)> = Vec::new();
    let mut original_index = 0;
    for (position, element) in normalized.iter().enumerate() {
        if element.synthetic {
            pending.push((position, element.path.as_str()));
            continue;
        }
        out.extend(pending.drain(..).map(|(position, path)| Insertion {
            position,
            path: path.to_owned(),
            needed_by_position: original_index,
            needed_by: element.path.clone(),
        }));
        original_index += 1;
    }
    out
}

/// Number of synthetic placeholders in `list`.
pub fn synthetic_count<P>(list: &[DifferentialElement<P>]) -> usize {
    list.iter().filter(|e| e.synthetic).count()
}

/// Original (non-synthetic) elements, in order.
pub fn originals<P>(
    list: &[DifferentialElement<P>],
) -> impl Iterator<Item = &DifferentialElement<P>> + '_ {
    list.iter().filter(|e| !e.synthetic)
}

/// Drops synthetic placeholders, returning the original differential.
pub fn strip_synthetic<P>(list: Vec<DifferentialElement<P>>) -> Vec<DifferentialElement<P>> {
    list.into_iter().filter(|e| !e.synthetic).collect()
}
