//! Drag-and-drop jigsaw.
//!
//! The image is cut into a `rows x cols` grid (2x4 by default). Pieces start
//! in a shuffled pool around the board; each one can only be dropped into
//! the slot with its own index. Placing the last piece wins.
//!
//! The placement rule lives in [`PuzzleSession::decide`] and
//! [`PuzzleSession::place`], free of any pointer handling. The
//! [`PuzzleEngine`] adds drag tracking, session replacement and events on
//! top.

mod engine;
mod piece;
mod session;

pub use engine::{DragHandle, PuzzleEngine};
pub use piece::{Piece, PieceState, PoolZone, Slot, TileLayout};
pub use session::{Placement, PlacementResult, PuzzleSession, RejectReason};
