// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use difftree_core::DifferentialElement;

/// Builds an original differential whose payload echoes each path (`"<path>#payload"`).
pub fn differential(paths: &[&str]) -> Vec<DifferentialElement<String>> {
    paths
        .iter()
        .map(|p| DifferentialElement::new(*p, format!("{p}#payload")))
        .collect()
}

/// Paths of `list`, in order.
pub fn paths<P>(list: &[DifferentialElement<P>]) -> Vec<&str> {
    list.iter().map(DifferentialElement::path).collect()
}

/// Paths of the synthetic elements of `list`, in order.
pub fn synthetic_paths<P>(list: &[DifferentialElement<P>]) -> Vec<&str> {
    list.iter()
        .filter(|e| e.synthetic)
        .map(DifferentialElement::path)
        .collect()
}
