// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Settings storage port and the service that encodes values through it.

use std::cell::RefCell;
use std::collections::BTreeMap;

use difftree_core::PathError;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::debug;

/// Where settings bytes live. Implementations know nothing about the schema.
pub trait SettingsStore {
    /// Bytes stored under `key`, or [`SettingsError::NotFound`].
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, SettingsError>;
    /// Replace whatever is stored under `key` with `data`.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), SettingsError>;
}

/// Why a settings read or write failed.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Nothing stored under the requested key.
    #[error("not found")]
    NotFound,
    /// Backing storage could not be read or written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Stored blob could not be encoded/decoded.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Stored settings describe unusable path rules.
    #[error("invalid path settings: {0}")]
    InvalidPath(#[from] PathError),
    /// Store-specific failure described as text.
    #[error("other: {0}")]
    Other(String),
}

/// Typed JSON view over a [`SettingsStore`].
pub struct SettingsService<S> {
    store: S,
}

impl<S> SettingsService<S> {
    /// Wrap `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwrap back into the store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S> SettingsService<S>
where
    S: SettingsStore,
{
    /// Load the value at `key`, falling back to `T::default()` when nothing
    /// (or an empty blob) is stored.
    pub fn load<T>(&self, key: &str) -> Result<T, SettingsError>
    where
        T: DeserializeOwned + Default,
    {
        match self.store.load_raw(key) {
            Ok(bytes) if bytes.is_empty() => Ok(T::default()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(SettingsError::NotFound) => {
                debug!(key, "no stored settings; using defaults");
                Ok(T::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Write `value` under `key` as pretty-printed JSON.
    pub fn save<T>(&self, key: &str, value: &T) -> Result<(), SettingsError>
    where
        T: Serialize,
    {
        let data = serde_json::to_vec_pretty(value)?;
        self.store.save_raw(key, &data)
    }

    /// Load, modify, and persist the value at `key`. Returns the stored value.
    pub fn update<T, F>(&self, key: &str, edit: F) -> Result<T, SettingsError>
    where
        T: Serialize + DeserializeOwned + Default,
        F: FnOnce(&mut T) -> Result<(), SettingsError>,
    {
        let mut value: T = self.load(key)?;
        edit(&mut value)?;
        self.save(key, &value)?;
        Ok(value)
    }
}

/// In-process store; handy for tests and for tools that never persist.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    blobs: RefCell<BTreeMap<String, Vec<u8>>>,
}

impl SettingsStore for MemorySettingsStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, SettingsError> {
        self.blobs
            .borrow()
            .get(key)
            .cloned()
            .ok_or(SettingsError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), SettingsError> {
        self.blobs.borrow_mut().insert(key.to_owned(), data.to_vec());
        Ok(())
    }
}
