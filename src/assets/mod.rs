//! Image discovery.
//!
//! Both games start from a list of image identifiers. Where the list comes
//! from is the host's business; the engines only see an [`AssetSource`].
//!
//! The bundled [`TieredDiscovery`] mirrors how the shipped games find their
//! pictures:
//! 1. Read a manifest (a JSON array of file names). A non-empty array wins.
//! 2. Otherwise probe `img1`, `img2`, ... one at a time, stopping at the
//!    first missing file or at the probe bound.
//!
//! Discovery fails soft: an empty list is a valid outcome, never an error.
//!
//! ## Example
//!
//! ```
//! use jigsaw_memory::assets::{AssetSource, MemoryStore, TieredDiscovery};
//! use jigsaw_memory::core::AssetConfig;
//!
//! let store = MemoryStore::new().with_files(["img1.png", "img2.png", "img4.png"]);
//! let mut source = TieredDiscovery::new(store, AssetConfig::puzzle());
//!
//! let names: Vec<String> = source.discover().into_iter().map(|id| id.to_string()).collect();
//! assert_eq!(names, ["img1.png", "img2.png"]);
//! ```

mod discovery;
mod store;

pub use discovery::{parse_manifest, SequentialProbe, TieredDiscovery};
pub use store::{AssetStore, DirectoryStore, MemoryStore};

use serde::{Deserialize, Serialize};

/// Opaque image identifier (a file name, URL, or inline data URL).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AssetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Resolves the images available to a game.
pub trait AssetSource {
    /// Discover the available images, in a stable order.
    ///
    /// May return an empty list; callers decide whether that is fatal.
    fn discover(&mut self) -> Vec<AssetId>;
}

/// A fixed list of images.
#[derive(Clone, Debug, Default)]
pub struct StaticAssets {
    assets: Vec<AssetId>,
}

impl StaticAssets {
    /// Serve exactly these identifiers.
    pub fn new<I, A>(assets: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<AssetId>,
    {
        Self {
            assets: assets.into_iter().map(Into::into).collect(),
        }
    }
}

impl AssetSource for StaticAssets {
    fn discover(&mut self) -> Vec<AssetId> {
        self.assets.clone()
    }
}
