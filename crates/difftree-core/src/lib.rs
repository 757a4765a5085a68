// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Differential tree normalization.
//!
//! A *differential* is an ordered, pre-order list of path-addressed elements
//! that may omit intermediate ancestors for brevity. [`normalize`] produces a
//! structurally complete copy by inserting synthetic placeholder elements for
//! every skipped ancestor, preserving the order and payloads of the original
//! elements. The input is never mutated.
//!
//! # Payload Policy
//!
//! Payloads are opaque generic values. The constructor never inspects them;
//! cloning and equality come from the caller's type. Synthetic elements carry
//! no payload and are tagged `synthetic = true` so merge logic downstream can
//! skip them.
//!
//! # Path Rules
//!
//! Paths are delimiter-segmented strings (`Patient.name.given`). The delimiter
//! is part of [`PathSpec`], injected into [`Normalizer`]; `.` is the default.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::module_name_repetitions,
    clippy::option_if_let_else,
    clippy::use_self
)]

mod element;
/// Read-only helpers: gap detection, insertion reports, synthetic filtering.
pub mod inspect;
mod normalize;
/// Delimiter-aware path utilities.
pub mod path;

/// Path-addressed element type.
pub use element::DifferentialElement;
/// Gap inspection and synthetic filtering.
pub use inspect::{
    find_gaps, insertions, originals, strip_synthetic, synthetic_count, Gap, Insertion,
};
/// Differential tree constructor and its error/policy types.
pub use normalize::{normalize, NormalizeError, Normalized, Normalizer, ReopenPolicy};
/// Path rules and errors.
pub use path::{PathError, PathSpec, DEFAULT_DELIMITER};
