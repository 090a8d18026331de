//! # jigsaw-memory
//!
//! State engines for two small picture games:
//!
//! - a jigsaw that cuts a random image into a `rows x cols` grid (2x4 by
//!   default) and accepts a piece only in its own slot;
//! - a memory ("pairs") game whose deck holds one pair of the player's own
//!   drawing plus pairs of photos.
//!
//! ## Design Principles
//!
//! 1. **Headless**: Engines never render. A host draws from the session
//!    state and forwards pointer input; [`interaction`] has the glue.
//!
//! 2. **Injectable Randomness**: Every random choice goes through
//!    [`RandomSource`], so a seeded [`GameRng`] or a [`ScriptedRng`] makes
//!    games reproducible.
//!
//! 3. **Replaceable Sessions**: Starting a game swaps in a fresh session
//!    with a new [`Generation`]. Drags and timers from an old session are
//!    refused instead of leaking into the new one.
//!
//! ## Modules
//!
//! - `core`: RNG, shuffling, configuration, errors, events
//! - `assets`: Image identifiers and manifest/probe discovery
//! - `puzzle`: Jigsaw pieces, slots, placement rule, engine
//! - `memory`: Cards, deck construction, comparison state machine, engine
//! - `schedule`: Logical-clock timer queue for delayed transitions
//! - `drawing`: Stroke capture for the player's drawing
//! - `interaction`: Pointer events, hit testing, controllers

pub mod core;
pub mod assets;
pub mod puzzle;
pub mod memory;
pub mod schedule;
pub mod drawing;
pub mod interaction;

// Re-export commonly used types
pub use crate::core::{
    GameRng, RandomSource, ScriptedRng,
    PuzzleConfig, MemoryConfig, AssetConfig, Settings,
    GameError, InvalidOperation, SettingsError,
    GameEvent, EventLog,
    Generation,
};

pub use crate::assets::{AssetId, AssetSource, StaticAssets, TieredDiscovery, DirectoryStore, MemoryStore};

pub use crate::puzzle::{PuzzleEngine, PuzzleSession, PlacementResult, RejectReason, DragHandle};

pub use crate::memory::{MemoryEngine, MemorySession, Card, PairId, RevealResult};

pub use crate::drawing::{DrawingCapture, StrokeCanvas};

pub use crate::interaction::{Point, PointerEvent, Target, HitTest, GridLayout, PuzzleController, MemoryController};
