//! Asset storage backends.

use std::path::{Path, PathBuf};

use log::warn;
use rustc_hash::{FxHashMap, FxHashSet};

/// Storage that can answer manifest reads and existence probes.
pub trait AssetStore {
    /// Raw bytes of the manifest called `name`, or `None` if it can't be read.
    fn read_manifest(&mut self, name: &str) -> Option<Vec<u8>>;

    /// Does an image called `name` exist?
    fn exists(&mut self, name: &str) -> bool;
}

/// Images in a local directory.
#[derive(Clone, Debug)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Look up images under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory being searched.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetStore for DirectoryStore {
    fn read_manifest(&mut self, name: &str) -> Option<Vec<u8>> {
        let path = self.root.join(name);
        match std::fs::read(&path) {
            Ok(bytes) => Some(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                warn!("could not read manifest {}: {}", path.display(), err);
                None
            }
        }
    }

    fn exists(&mut self, name: &str) -> bool {
        self.root.join(name).is_file()
    }
}

/// In-memory store, mostly for tests and embedded asset bundles.
///
/// Records every probe so callers can check that lookups happen one at a
/// time and in order.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    manifests: FxHashMap<String, Vec<u8>>,
    files: FxHashSet<String>,
    probes: Vec<String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a manifest with the given raw contents.
    #[must_use]
    pub fn with_manifest(mut self, name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        self.manifests.insert(name.into(), contents.into());
        self
    }

    /// Add image files.
    #[must_use]
    pub fn with_files<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files.extend(names.into_iter().map(Into::into));
        self
    }

    /// Names passed to `exists`, in call order.
    #[must_use]
    pub fn probes(&self) -> &[String] {
        &self.probes
    }
}

impl AssetStore for MemoryStore {
    fn read_manifest(&mut self, name: &str) -> Option<Vec<u8>> {
        self.manifests.get(name).cloned()
    }

    fn exists(&mut self, name: &str) -> bool {
        self.probes.push(name.to_string());
        self.files.contains(name)
    }
}
