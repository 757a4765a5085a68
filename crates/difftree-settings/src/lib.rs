// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Settings services for difftree tools.
//! Keeps storage adapters thin: they move bytes, this crate owns the schema.

pub mod normalizer;
pub mod store;

pub use normalizer::{NormalizerSettings, NORMALIZER_KEY};
pub use store::{MemorySettingsStore, SettingsError, SettingsService, SettingsStore};
