//! Memory-matching ("pairs") game.
//!
//! The deck holds one pair of the player's own drawing plus photo pairs
//! (six pairs, twelve cards by default). Cards are turned over two at a
//! time; a match stays face-up for good, a mismatch is shown briefly and
//! then turned back. Matching every pair wins.
//!
//! - [`deck`]: pure deck construction
//! - [`MemorySession`]: card state and the comparison state machine
//! - [`MemoryEngine`]: session replacement, delayed transitions, events

mod card;
pub mod deck;
mod engine;
mod session;

pub use card::{Card, CardState, PairId};
pub use engine::{MemoryEngine, Transition};
pub use session::{IgnoreReason, MemorySession, RevealResult, SessionPhase};
