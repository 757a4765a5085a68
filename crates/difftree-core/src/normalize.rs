// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Differential tree constructor.
//!
//! A differential lists path-addressed elements in pre-order but may skip
//! ancestors (`Patient`, `Patient.name.given`). [`Normalizer`] walks the list
//! once and places a synthetic element for every skipped level, so each
//! element in the result is a root, a sibling or direct child of its
//! predecessor, or lies below an ancestor the predecessor already shares.
//!
//! Each examined path is classified against its predecessor:
//!
//! - **root**: accepted only as the first element, otherwise
//!   [`NormalizeError::MultipleRoots`].
//! - **sibling / direct child**: accepted as-is.
//! - **gap**: if the predecessor does not already lie below the path's parent,
//!   the parent is queued as a synthetic element and classified in turn
//!   against the same predecessor. One missing level is fixed per step, which
//!   is what backfills multi-level gaps without lookahead.
//!
//! The working list is append-only: queued ancestors are emitted (shallowest
//! first) right before the element that needed them. The output is identical
//! to a cursor walk that inserts in place, without shifting later elements.

use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::element::DifferentialElement;
use crate::path::{PathError, PathSpec};

/// Fatal normalization failures. Any of these means the input is not a valid
/// differential; no partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// A second root path appeared after the first element.
    #[error("second root `{second}` at position {position} (tree is already rooted at `{first}`)")]
    MultipleRoots {
        /// Root already opening the output.
        first: String,
        /// Root encountered later.
        second: String,
        /// Output position the second root would occupy.
        position: usize,
    },
    /// A path violated the segment contract.
    #[error(transparent)]
    InvalidPath(#[from] PathError),
    /// Under [`ReopenPolicy::Reject`], a path that was already emitted came up again.
    #[error("path `{path}` at position {position} re-opens an already emitted branch")]
    ReopenedBranch {
        /// Repeated path.
        path: String,
        /// Output position the repeat would occupy.
        position: usize,
    },
}

/// What to do when an element (or a synthetic ancestor it needs) has a path
/// that is already present in the output.
///
/// This happens only for inputs that are not in pre-order, e.g. a branch that
/// is closed and later returned to: `A`, `A.b`, `A.c`, `A.b.d`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ReopenPolicy {
    /// Trust the input ordering; a re-opened branch gets a fresh synthetic ancestor.
    #[default]
    Allow,
    /// Fail with [`NormalizeError::ReopenedBranch`]; output paths are unique.
    Reject,
}

/// Output of [`Normalizer::normalize_with_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized<P> {
    /// Normalized elements, synthetic placeholders included.
    pub elements: Vec<DifferentialElement<P>>,
    /// Number of synthetic elements inserted.
    pub synthetic: usize,
    /// Deepest path depth seen (roots are depth 1, empty input is 0).
    pub max_depth: usize,
}

impl<P> Normalized<P> {
    /// Discard the report and keep the elements.
    pub fn into_elements(self) -> Vec<DifferentialElement<P>> {
        self.elements
    }
}

/// Differential tree constructor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalizer {
    spec: PathSpec,
    reopen: ReopenPolicy,
}

enum Step<'a> {
    Accept,
    NeedsParent(&'a str),
}

impl Normalizer {
    /// Creates a normalizer with explicit path rules and reopen policy.
    pub const fn new(spec: PathSpec, reopen: ReopenPolicy) -> Self {
        Self { spec, reopen }
    }

    /// Replace the path rules.
    pub fn with_spec(mut self, spec: PathSpec) -> Self {
        self.spec = spec;
        self
    }

    /// Replace the reopen policy.
    pub fn with_reopen_policy(mut self, reopen: ReopenPolicy) -> Self {
        self.reopen = reopen;
        self
    }

    /// Path rules in use.
    pub fn spec(&self) -> PathSpec {
        self.spec
    }

    /// Reopen policy in use.
    pub fn reopen_policy(&self) -> ReopenPolicy {
        self.reopen
    }

    /// Normalize `input` into a new list. `input` is only read.
    ///
    /// # Errors
    ///
    /// Any [`NormalizeError`]; the input is then not a valid differential.
    pub fn normalize<P: Clone>(
        &self,
        input: &[DifferentialElement<P>],
    ) -> Result<Vec<DifferentialElement<P>>, NormalizeError> {
        self.run(input.to_vec()).map(Normalized::into_elements)
    }

    /// Normalize a list the caller no longer needs, avoiding the payload clones.
    ///
    /// # Errors
    ///
    /// Same as [`normalize`](Self::normalize).
    pub fn normalize_owned<P>(
        &self,
        input: Vec<DifferentialElement<P>>,
    ) -> Result<Vec<DifferentialElement<P>>, NormalizeError> {
        self.run(input).map(Normalized::into_elements)
    }

    /// Like [`normalize`](Self::normalize), also reporting how much was inserted.
    ///
    /// # Errors
    ///
    /// Same as [`normalize`](Self::normalize).
    pub fn normalize_with_report<P: Clone>(
        &self,
        input: &[DifferentialElement<P>],
    ) -> Result<Normalized<P>, NormalizeError> {
        self.run(input.to_vec())
    }

    #[instrument(level = "debug", skip_all, fields(len = input.len()))]
    fn run<P>(
        &self,
        input: Vec<DifferentialElement<P>>,
    ) -> Result<Normalized<P>, NormalizeError> {
        let mut out: Vec<DifferentialElement<P>> = Vec::with_capacity(input.len());
        let mut emitted: FxHashSet<String> = FxHashSet::default();
        let mut missing: Vec<String> = Vec::new();
        let mut synthetic = 0;
        let mut max_depth = 0;

        for element in input {
            self.spec.validate(&element.path)?;
            max_depth = max_depth.max(self.spec.depth(&element.path));

            let mut current = element.path.as_str();
            while let Step::NeedsParent(parent) = self.classify(&out, current)? {
                missing.push(parent.to_owned());
                current = parent;
            }

            // Deepest gap was queued first; emit shallowest first.
            while let Some(path) = missing.pop() {
                self.admit(&mut emitted, &path, out.len())?;
                debug!(path = %path, position = out.len(), "inserted synthetic ancestor");
                out.push(DifferentialElement::synthetic(path));
                synthetic += 1;
            }
            self.admit(&mut emitted, &element.path, out.len())?;
            out.push(element);
        }

        debug!(synthetic, output_len = out.len(), "normalized differential");
        Ok(Normalized {
            elements: out,
            synthetic,
            max_depth,
        })
    }

    fn classify<'a, P>(
        &self,
        out: &[DifferentialElement<P>],
        current: &'a str,
    ) -> Result<Step<'a>, NormalizeError> {
        let previous = out.last().map(DifferentialElement::path);

        if self.spec.is_root(current) {
            return match out.first() {
                None => Ok(Step::Accept),
                Some(first) => Err(NormalizeError::MultipleRoots {
                    first: first.path.clone(),
                    second: current.to_owned(),
                    position: out.len(),
                }),
            };
        }

        if let Some(prev) = previous {
            if self.spec.is_sibling(current, prev) || self.spec.is_direct_child(prev, current) {
                return Ok(Step::Accept);
            }
        }

        let parent = self.spec.parent_path(current)?;
        match previous {
            Some(prev) if self.spec.is_within(parent, prev) => Ok(Step::Accept),
            _ => Ok(Step::NeedsParent(parent)),
        }
    }

    fn admit(
        &self,
        emitted: &mut FxHashSet<String>,
        path: &str,
        position: usize,
    ) -> Result<(), NormalizeError> {
        if self.reopen == ReopenPolicy::Reject && !emitted.insert(path.to_owned()) {
            return Err(NormalizeError::ReopenedBranch {
                path: path.to_owned(),
                position,
            });
        }
        Ok(())
    }
}

/// Normalize with the default `.` delimiter and [`ReopenPolicy::Allow`].
///
/// # Errors
///
/// [`NormalizeError::MultipleRoots`] for a second root and
/// [`NormalizeError::InvalidPath`] for a malformed path.
pub fn normalize<P: Clone>(
    input: &[DifferentialElement<P>],
) -> Result<Vec<DifferentialElement<P>>, NormalizeError> {
    Normalizer::default().normalize(input)
}
