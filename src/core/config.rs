//! Game configuration types.
//!
//! Hosts configure the engines at startup by providing:
//! - `PuzzleConfig`: Grid shape and wrong-drop feedback
//! - `MemoryConfig`: Pair count and transition delays
//! - `AssetConfig`: Where and how images are discovered
//! - `Settings`: Combines all configuration, loadable from JSON
//!
//! Every field has a default matching the shipped games, and every struct is
//! `#[serde(default)]`, so a settings file only needs the keys it changes.

use serde::{Deserialize, Serialize};

use super::error::SettingsError;

/// Configuration for the jigsaw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// Rows of tiles in the grid.
    pub rows: usize,

    /// Columns of tiles in the grid.
    pub cols: usize,

    /// Emit `PlacementRejected` when a piece is dropped on the wrong slot.
    ///
    /// Off by default: a wrong drop silently returns the piece to the pool.
    pub wrong_position_feedback: bool,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            rows: 2,
            cols: 4,
            wrong_position_feedback: false,
        }
    }
}

impl PuzzleConfig {
    /// Create a configuration for a `rows` x `cols` grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0, "Puzzle must have at least 1 row");
        assert!(cols > 0, "Puzzle must have at least 1 column");

        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Surface wrong drops as `PlacementRejected` events.
    #[must_use]
    pub fn with_wrong_position_feedback(mut self) -> Self {
        self.wrong_position_feedback = true;
        self
    }

    /// Total number of pieces (and slots).
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.rows * self.cols
    }
}

/// Configuration for the memory game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Pairs on the board, including the user-drawn pair.
    pub total_pairs: usize,

    /// How long a mismatched pair stays face-up.
    pub flip_back_delay_ms: u64,

    /// Pause between the final match and the victory announcement.
    pub victory_delay_ms: u64,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            total_pairs: 6,
            flip_back_delay_ms: 1500,
            victory_delay_ms: 400,
        }
    }
}

impl MemoryConfig {
    /// Create a configuration with `total_pairs` pairs.
    pub fn new(total_pairs: usize) -> Self {
        assert!(total_pairs > 0, "Memory game must have at least 1 pair");

        Self {
            total_pairs,
            ..Self::default()
        }
    }

    /// Set the mismatch flip-back delay.
    #[must_use]
    pub fn with_flip_back_delay_ms(mut self, delay: u64) -> Self {
        self.flip_back_delay_ms = delay;
        self
    }

    /// Set the victory announcement delay.
    #[must_use]
    pub fn with_victory_delay_ms(mut self, delay: u64) -> Self {
        self.victory_delay_ms = delay;
        self
    }

    /// Photo pairs needed besides the user-drawn one.
    #[must_use]
    pub fn photo_pairs(&self) -> usize {
        self.total_pairs - 1
    }

    /// Cards in a full deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.total_pairs * 2
    }
}

/// Where images are looked up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Manifest file listing image names, tried first.
    pub manifest_name: String,

    /// Prefix of probed file names (`img` gives `img1`, `img2`, ...).
    pub name_prefix: String,

    /// Extension of probed file names, without the dot.
    pub extension: String,

    /// Upper bound on sequential probes.
    pub max_probe: usize,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self::puzzle()
    }
}

impl AssetConfig {
    /// Probing setup for the jigsaw (`img1.png`, `img2.png`, ...).
    pub fn puzzle() -> Self {
        Self {
            manifest_name: "manifest.json".to_string(),
            name_prefix: "img".to_string(),
            extension: "png".to_string(),
            max_probe: 100,
        }
    }

    /// Probing setup for the memory game (`img1.jpg`, `img2.jpg`, ...).
    pub fn memory() -> Self {
        Self {
            extension: "jpg".to_string(),
            ..Self::puzzle()
        }
    }

    /// Set the manifest file name.
    #[must_use]
    pub fn with_manifest_name(mut self, name: impl Into<String>) -> Self {
        self.manifest_name = name.into();
        self
    }

    /// Set the probe file extension.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set the probe bound.
    #[must_use]
    pub fn with_max_probe(mut self, max: usize) -> Self {
        self.max_probe = max;
        self
    }

    /// File name of the `n`th probe candidate (1-based).
    #[must_use]
    pub fn candidate_name(&self, n: usize) -> String {
        format!("{}{}.{}", self.name_prefix, n, self.extension)
    }
}

/// Complete settings for both games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub puzzle: PuzzleConfig,
    pub memory: MemoryConfig,
    pub puzzle_assets: AssetConfig,
    pub memory_assets: AssetConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            puzzle: PuzzleConfig::default(),
            memory: MemoryConfig::default(),
            puzzle_assets: AssetConfig::puzzle(),
            memory_assets: AssetConfig::memory(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing keys take their defaults.
    ///
    /// The result is validated, so it can go straight into the engine
    /// constructors.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check the values the engine constructors assert on.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.puzzle.rows == 0 {
            return Err(SettingsError::Invalid("puzzle.rows must be at least 1"));
        }
        if self.puzzle.cols == 0 {
            return Err(SettingsError::Invalid("puzzle.cols must be at least 1"));
        }
        if self.memory.total_pairs == 0 {
            return Err(SettingsError::Invalid("memory.total_pairs must be at least 1"));
        }
        Ok(())
    }
}
