// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Persisted normalizer settings (delimiter + reopen policy).

use difftree_core::{Normalizer, PathSpec, ReopenPolicy, DEFAULT_DELIMITER};
use serde::{Deserialize, Serialize};

use crate::store::{SettingsError, SettingsService, SettingsStore};

/// Storage key for [`NormalizerSettings`].
pub const NORMALIZER_KEY: &str = "normalizer";

/// Saved configuration for building a [`Normalizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerSettings {
    /// Path segment delimiter.
    pub delimiter: char,
    /// Handling of paths that re-open an already emitted branch.
    pub reopen: ReopenPolicy,
}

impl Default for NormalizerSettings {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            reopen: ReopenPolicy::Allow,
        }
    }
}

impl NormalizerSettings {
    /// Path rules described by these settings.
    pub fn path_spec(&self) -> Result<PathSpec, SettingsError> {
        Ok(PathSpec::new(self.delimiter)?)
    }

    /// Build the normalizer these settings describe.
    pub fn normalizer(&self) -> Result<Normalizer, SettingsError> {
        Ok(Normalizer::new(self.path_spec()?, self.reopen))
    }
}

impl<S> SettingsService<S>
where
    S: SettingsStore,
{
    /// Load [`NormalizerSettings`], defaulting when none are stored.
    pub fn normalizer_settings(&self) -> Result<NormalizerSettings, SettingsError> {
        self.load(NORMALIZER_KEY)
    }

    /// Validate and persist [`NormalizerSettings`].
    pub fn save_normalizer_settings(
        &self,
        settings: &NormalizerSettings,
    ) -> Result<(), SettingsError> {
        settings.path_spec()?;
        self.save(NORMALIZER_KEY, settings)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::store::MemorySettingsStore;
    use difftree_core::DifferentialElement;

    #[test]
    fn defaults_match_core_defaults() {
        let settings = NormalizerSettings::default();
        assert_eq!(settings.normalizer().unwrap(), Normalizer::default());
    }

    #[test]
    fn partial_blob_fills_remaining_fields() {
        let service = SettingsService::new(MemorySettingsStore::default());
        service
            .store()
            .save_raw(NORMALIZER_KEY, br#"{ "reopen": "reject" }"#)
            .unwrap();
        let settings = service.normalizer_settings().unwrap();
        assert_eq!(settings.delimiter, '.');
        assert_eq!(settings.reopen, ReopenPolicy::Reject);
    }

    #[test]
    fn invalid_delimiter_is_not_saved() {
        let service = SettingsService::new(MemorySettingsStore::default());
        let bad = NormalizerSettings {
            delimiter: ' ',
            ..NormalizerSettings::default()
        };
        assert!(matches!(
            service.save_normalizer_settings(&bad),
            Err(SettingsError::InvalidPath(_))
        ));
        assert_eq!(
            service.normalizer_settings().unwrap(),
            NormalizerSettings::default()
        );
    }

    #[test]
    fn stored_delimiter_drives_normalization() {
        let service = SettingsService::new(MemorySettingsStore::default());
        service
            .save_normalizer_settings(&NormalizerSettings {
                delimiter: '/',
                reopen: ReopenPolicy::Allow,
            })
            .unwrap();
        let normalizer = service.normalizer_settings().unwrap().normalizer().unwrap();
        let out = normalizer
            .normalize(&[
                DifferentialElement::<()>::bare("sim"),
                DifferentialElement::bare("sim/inbox/event"),
            ])
            .unwrap();
        assert_eq!(out[1].path, "sim/inbox");
        assert!(out[1].synthetic);
    }
}
