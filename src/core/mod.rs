//! Core types shared by both games: RNG, configuration, errors, events.
//!
//! Nothing here knows about pieces or cards; both game modules build on
//! these types.

pub mod rng;
pub mod shuffle;
pub mod config;
pub mod error;
pub mod event;
pub mod generation;

pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use config::{AssetConfig, MemoryConfig, PuzzleConfig, Settings};
pub use error::{GameError, InvalidOperation, SettingsError};
pub use event::{EventLog, GameEvent};
pub use generation::Generation;
