//! The jigsaw engine: one active session plus the piece being dragged.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::piece::PieceState;
use super::session::{PlacementResult, PuzzleSession};
use crate::assets::{AssetId, AssetSource};
use crate::core::shuffle::choose;
use crate::core::{
    EventLog, GameError, GameEvent, GameRng, Generation, InvalidOperation, PuzzleConfig, RandomSource,
};

/// Proof that a drag was started on a piece of a particular session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DragHandle {
    pub piece: usize,
    pub generation: Generation,
}

/// Runs jigsaw games.
///
/// At most one session is active; `new_game` replaces it wholesale and bumps
/// the generation so outstanding [`DragHandle`]s go stale.
///
/// ## Example
///
/// ```
/// use jigsaw_memory::assets::AssetId;
/// use jigsaw_memory::core::{GameEvent, GameRng, PuzzleConfig};
/// use jigsaw_memory::puzzle::PuzzleEngine;
///
/// let mut engine = PuzzleEngine::with_rng(PuzzleConfig::default(), GameRng::new(7));
/// engine.new_game(&[AssetId::from("img1.png")]).unwrap();
///
/// for piece in 0..8 {
///     engine.begin_drag(piece).unwrap();
///     engine.attempt_drop(piece, piece).unwrap();
/// }
///
/// assert!(engine.drain_events().contains(&GameEvent::Victory));
/// ```
pub struct PuzzleEngine<R: RandomSource = GameRng> {
    config: PuzzleConfig,
    rng: R,
    generation: Generation,
    session: Option<PuzzleSession>,
    drag: Option<DragHandle>,
    events: EventLog,
}

impl PuzzleEngine<GameRng> {
    /// Create an engine seeded from entropy.
    pub fn new(config: PuzzleConfig) -> Self {
        Self::with_rng(config, GameRng::from_entropy())
    }
}

impl<R: RandomSource> PuzzleEngine<R> {
    /// Create an engine drawing randomness from `rng`.
    pub fn with_rng(config: PuzzleConfig, rng: R) -> Self {
        assert!(config.piece_count() > 0, "Puzzle must have at least 1 piece");

        Self {
            config,
            rng,
            generation: Generation::default(),
            session: None,
            drag: None,
            events: EventLog::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// The active session, if a game has been started.
    #[must_use]
    pub fn session(&self) -> Option<&PuzzleSession> {
        self.session.as_ref()
    }

    /// Generation of the most recent session.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The drag in progress, if any.
    #[must_use]
    pub fn active_drag(&self) -> Option<DragHandle> {
        self.drag
    }

    /// Take the events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    // === Game Setup ===

    /// Start a game on a random image from `images`.
    ///
    /// Fails with [`GameError::NoAssets`] when `images` is empty, leaving any
    /// current game in place.
    pub fn new_game(&mut self, images: &[AssetId]) -> Result<&PuzzleSession, GameError> {
        let Some(image) = choose(&mut self.rng, images).cloned() else {
            warn!("cannot start puzzle: no images available");
            return Err(GameError::NoAssets);
        };
        Ok(self.new_game_with_image(image))
    }

    /// Discover images from `source`, then start a game on one of them.
    pub fn new_game_from(&mut self, source: &mut dyn AssetSource) -> Result<&PuzzleSession, GameError> {
        let images = source.discover();
        self.new_game(&images)
    }

    /// Start a game on a specific image.
    pub fn new_game_with_image(&mut self, image: AssetId) -> &PuzzleSession {
        let generation = self.generation.next();
        let session = PuzzleSession::shuffled(generation, image, &self.config, &mut self.rng);
        info!("puzzle {} started on {}", generation, session.image());

        self.generation = generation;
        self.drag = None;
        self.events.clear();
        self.session.insert(session)
    }

    // === Dragging ===

    /// Pick up a pooled piece.
    pub fn begin_drag(&mut self, piece: usize) -> Result<DragHandle, GameError> {
        let session = self.session.as_ref().ok_or(InvalidOperation::NoActiveSession)?;
        session.check_piece(piece)?;
        if let Some(active) = self.drag {
            return Err(InvalidOperation::DragInProgress(active.piece).into());
        }

        let handle = DragHandle {
            piece,
            generation: session.generation(),
        };
        debug!("dragging piece {}", piece);
        self.drag = Some(handle);
        Ok(handle)
    }

    /// Drop `piece` onto `slot`.
    ///
    /// Succeeds iff the slot is empty and `piece == slot`. A rejected drop
    /// changes nothing: the piece goes back to the pool.
    pub fn attempt_drop(&mut self, piece: usize, slot: usize) -> Result<PlacementResult, GameError> {
        let session = self.session.as_mut().ok_or(InvalidOperation::NoActiveSession)?;
        let result = session.place(piece, slot)?;

        if self.drag.is_some_and(|drag| drag.piece == piece) {
            self.drag = None;
        }

        match result {
            PlacementResult::Placed { piece, slot, completed } => {
                debug!("piece {} placed in slot {}", piece, slot);
                self.events.push(GameEvent::PiecePlaced { slot, piece });
                if completed {
                    info!("puzzle {} complete", session.generation());
                    self.events.push(GameEvent::Victory);
                }
            }
            PlacementResult::Rejected { piece, slot, reason } => {
                debug!("piece {} rejected by slot {}: {:?}", piece, slot, reason);
                if self.config.wrong_position_feedback {
                    self.events.push(GameEvent::PlacementRejected { piece, slot });
                }
            }
        }

        Ok(result)
    }

    /// Finish a drag started with `handle`.
    ///
    /// `Some(slot)` attempts the drop; `None` (released away from every slot)
    /// cancels it. Handles from a discarded session are refused, as are
    /// handles for a drag that is no longer the one in progress.
    pub fn finish_drag(
        &mut self,
        handle: DragHandle,
        slot: Option<usize>,
    ) -> Result<Option<PlacementResult>, GameError> {
        if handle.generation != self.generation {
            return Err(InvalidOperation::StaleSession {
                handle: handle.generation,
                active: self.generation,
            }
            .into());
        }
        if self.drag != Some(handle) {
            return Err(InvalidOperation::NoSuchDrag(handle.piece).into());
        }

        match slot {
            Some(slot) => self.attempt_drop(handle.piece, slot).map(Some),
            None => {
                self.cancel_drag();
                Ok(None)
            }
        }
    }

    /// Abort the drag in progress without touching the session.
    pub fn cancel_drag(&mut self) -> Option<DragHandle> {
        let cancelled = self.drag.take();
        if let Some(handle) = cancelled {
            debug!("drag of piece {} cancelled", handle.piece);
        }
        cancelled
    }

    /// Lifecycle state of `piece`, or `None` without a game or out of range.
    #[must_use]
    pub fn piece_state(&self, piece: usize) -> Option<PieceState> {
        let session = self.session.as_ref()?;
        if piece >= session.piece_count() {
            return None;
        }

        Some(if !session.is_pooled(piece) {
            PieceState::Placed
        } else if self.drag.is_some_and(|drag| drag.piece == piece) {
            PieceState::Dragging
        } else {
            PieceState::Pooled
        })
    }
}
