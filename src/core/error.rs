//! Error types shared by both engines.
//!
//! Every failure is recoverable by the caller: the engine returns the error
//! and leaves the prior session untouched.

use thiserror::Error;

use super::generation::Generation;

/// Errors returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The asset source produced no images.
    #[error("no images available")]
    NoAssets,

    /// Not enough distinct photos to fill the deck.
    #[error("need at least {required} distinct photos, found {available}")]
    InsufficientAssets { required: usize, available: usize },

    /// The drawing canvas had nothing on it at submission time.
    #[error("the drawing is empty")]
    EmptyDrawing,

    #[error(transparent)]
    InvalidOperation(#[from] InvalidOperation),
}

/// Operations that don't make sense against the current session.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidOperation {
    #[error("no game is in progress")]
    NoActiveSession,

    /// A handle or scheduled transition from a discarded session.
    #[error("session {handle} was discarded (active session is {active})")]
    StaleSession { handle: Generation, active: Generation },

    #[error("piece {index} out of range (board has {count} pieces)")]
    PieceOutOfRange { index: usize, count: usize },

    #[error("slot {index} out of range (board has {count} slots)")]
    SlotOutOfRange { index: usize, count: usize },

    #[error("card {index} out of range (deck has {count} cards)")]
    CardOutOfRange { index: usize, count: usize },

    /// The piece has already been placed.
    #[error("piece {0} is not in the pool")]
    PieceNotPooled(usize),

    /// A drag was started while another piece was still being moved.
    #[error("piece {0} is already being dragged")]
    DragInProgress(usize),

    /// A handle for a drag that was cancelled, finished or superseded.
    #[error("piece {0} is not being dragged")]
    NoSuchDrag(usize),
}

/// Errors loading [`Settings`](super::config::Settings).
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),

    /// Well-formed JSON describing a game that can't be played.
    #[error("invalid settings: {0}")]
    Invalid(&'static str),
}
