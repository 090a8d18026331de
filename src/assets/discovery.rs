//! Manifest-first discovery with a sequential probe fallback.

use std::iter::FusedIterator;

use log::{debug, warn};
use serde_json::Value;

use super::store::AssetStore;
use super::{AssetId, AssetSource};
use crate::core::AssetConfig;

/// Parse a manifest: a JSON array of image names.
///
/// Returns `None` when the bytes are not a JSON array or the array is empty,
/// which tells the caller to fall back to probing. Entries that are not
/// non-empty strings are dropped.
#[must_use]
pub fn parse_manifest(bytes: &[u8]) -> Option<Vec<AssetId>> {
    let entries = match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Array(entries)) if !entries.is_empty() => entries,
        Ok(_) => return None,
        Err(err) => {
            warn!("ignoring malformed manifest: {}", err);
            return None;
        }
    };

    let total = entries.len();
    let ids: Vec<AssetId> = entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::String(name) if !name.is_empty() => Some(AssetId::from(name)),
            _ => None,
        })
        .collect();

    if ids.len() < total {
        warn!("dropped {} invalid manifest entries", total - ids.len());
    }
    Some(ids)
}

/// Probes `img1`, `img2`, ... one candidate per `next()` call.
///
/// Stops for good at the first missing candidate or after
/// `AssetConfig::max_probe` candidates. Dropping the iterator early cancels
/// the remaining probes.
pub struct SequentialProbe<'a, S: AssetStore + ?Sized> {
    store: &'a mut S,
    config: &'a AssetConfig,
    next: usize,
    done: bool,
}

impl<'a, S: AssetStore + ?Sized> SequentialProbe<'a, S> {
    /// Start probing at candidate 1.
    pub fn new(store: &'a mut S, config: &'a AssetConfig) -> Self {
        Self {
            store,
            config,
            next: 1,
            done: false,
        }
    }

    /// Number of candidates tried so far.
    #[must_use]
    pub fn attempts(&self) -> usize {
        if self.done && self.next <= self.config.max_probe {
            self.next
        } else {
            self.next - 1
        }
    }
}

impl<S: AssetStore + ?Sized> Iterator for SequentialProbe<'_, S> {
    type Item = AssetId;

    fn next(&mut self) -> Option<AssetId> {
        if self.done || self.next > self.config.max_probe {
            self.done = true;
            return None;
        }

        let name = self.config.candidate_name(self.next);
        if self.store.exists(&name) {
            self.next += 1;
            Some(AssetId::from(name))
        } else {
            debug!("probe stopped at missing {}", name);
            self.done = true;
            None
        }
    }
}

impl<S: AssetStore + ?Sized> FusedIterator for SequentialProbe<'_, S> {}

/// Two-tier [`AssetSource`]: manifest first, then sequential probing.
#[derive(Clone, Debug)]
pub struct TieredDiscovery<S> {
    store: S,
    config: AssetConfig,
}

impl<S: AssetStore> TieredDiscovery<S> {
    /// Discover images in `store` using `config`.
    pub fn new(store: S, config: AssetConfig) -> Self {
        Self { store, config }
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The discovery configuration.
    #[must_use]
    pub fn config(&self) -> &AssetConfig {
        &self.config
    }

    /// A fresh sequential probe over the store, skipping the manifest.
    pub fn probe(&mut self) -> SequentialProbe<'_, S> {
        SequentialProbe::new(&mut self.store, &self.config)
    }
}

impl<S: AssetStore> AssetSource for TieredDiscovery<S> {
    fn discover(&mut self) -> Vec<AssetId> {
        if let Some(bytes) = self.store.read_manifest(&self.config.manifest_name) {
            if let Some(ids) = parse_manifest(&bytes) {
                debug!("manifest listed {} images", ids.len());
                return ids;
            }
        }

        let ids: Vec<AssetId> = self.probe().collect();
        debug!("probing found {} images", ids.len());
        ids
    }
}
