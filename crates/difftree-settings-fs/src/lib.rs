// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! One JSON file per settings key, under the platform config directory or a
//! directory chosen by the caller.

use difftree_settings::{SettingsError, SettingsStore};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// [`SettingsStore`] writing `<key>.json` files into `base`.
#[derive(Debug, Clone)]
pub struct FsSettingsStore {
    base: PathBuf,
}

impl FsSettingsStore {
    /// Store in the per-user difftree config directory (`~/.config/difftree` on Linux).
    pub fn new() -> Result<Self, SettingsError> {
        let proj = ProjectDirs::from("dev", "flyingrobots", "difftree")
            .ok_or_else(|| SettingsError::Other("could not resolve config dir".into()))?;
        Ok(Self::at(proj.config_dir()))
    }

    /// Create a store rooted at `base`. The directory is created on first save.
    pub fn at(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Directory holding the settings files.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// File backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl SettingsStore for FsSettingsStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, SettingsError> {
        let path = self.path_for(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(SettingsError::NotFound),
            Err(err) => Err(SettingsError::Io(err)),
        }
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), SettingsError> {
        fs::create_dir_all(&self.base)?;
        let path = self.path_for(key);
        fs::write(&path, data)?;
        debug!(path = %path.display(), "saved settings");
        Ok(())
    }
}
