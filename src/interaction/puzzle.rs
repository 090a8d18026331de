//! Drag-and-drop driver for the jigsaw.

use log::debug;

use super::{HitTest, Point, PointerEvent, Target};
use crate::core::{GameError, GameRng, RandomSource};
use crate::puzzle::{DragHandle, PieceState, PlacementResult, PuzzleEngine};

/// Pointer state for the piece being dragged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragTracker {
    pub handle: DragHandle,
    /// Where the pointer went down.
    pub start: Point,
    /// Where the pointer is now.
    pub pointer: Point,
    /// Empty slot under the pointer, for drop highlighting.
    pub hovered_slot: Option<usize>,
}

impl DragTracker {
    /// How far the floating piece has moved from where it was picked up.
    #[must_use]
    pub fn displacement(&self) -> Point {
        self.pointer.offset_from(self.start)
    }
}

/// Feeds pointer events into a [`PuzzleEngine`].
pub struct PuzzleController<H, R: RandomSource = GameRng> {
    engine: PuzzleEngine<R>,
    slots: H,
    drag: Option<DragTracker>,
}

impl<H: HitTest, R: RandomSource> PuzzleController<H, R> {
    /// Drive `engine`, resolving drop targets with `slots`.
    pub fn new(engine: PuzzleEngine<R>, slots: H) -> Self {
        Self {
            engine,
            slots,
            drag: None,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &PuzzleEngine<R> {
        &self.engine
    }

    /// Direct engine access, e.g. to start a new game.
    pub fn engine_mut(&mut self) -> &mut PuzzleEngine<R> {
        &mut self.engine
    }

    /// The drag in progress.
    #[must_use]
    pub fn drag(&self) -> Option<&DragTracker> {
        self.drag.as_ref()
    }

    /// Handle one pointer event.
    ///
    /// Returns the placement outcome when a drag ends over a slot.
    pub fn handle(&mut self, event: PointerEvent) -> Result<Option<PlacementResult>, GameError> {
        match event {
            PointerEvent::Down {
                target: Target::Piece(piece),
                at,
            } => {
                self.pointer_down(piece, at)?;
                Ok(None)
            }
            PointerEvent::Move(at) => {
                self.pointer_move(at);
                Ok(None)
            }
            PointerEvent::Up(at) => self.pointer_up(at),
            PointerEvent::Down { .. } | PointerEvent::Click(_) => Ok(None),
        }
    }

    fn pointer_down(&mut self, piece: usize, at: Point) -> Result<(), GameError> {
        // Pieces already sitting in a slot are not draggable.
        if self.engine.piece_state(piece) == Some(PieceState::Placed) {
            return Ok(());
        }

        let handle = self.engine.begin_drag(piece)?;
        self.drag = Some(DragTracker {
            handle,
            start: at,
            pointer: at,
            hovered_slot: None,
        });
        Ok(())
    }

    fn pointer_move(&mut self, at: Point) {
        let hovered = self.empty_slot_at(at);
        if let Some(drag) = self.drag.as_mut() {
            drag.pointer = at;
            drag.hovered_slot = hovered;
        }
    }

    fn pointer_up(&mut self, at: Point) -> Result<Option<PlacementResult>, GameError> {
        let Some(drag) = self.drag.take() else {
            return Ok(None);
        };

        let slot = match self.slots.target_at(at) {
            Some(Target::Slot(slot)) => Some(slot),
            _ => None,
        };
        debug!("piece {} released over {:?}", drag.handle.piece, slot);
        self.engine.finish_drag(drag.handle, slot)
    }

    fn empty_slot_at(&self, at: Point) -> Option<usize> {
        let Some(Target::Slot(slot)) = self.slots.target_at(at) else {
            return None;
        };
        let session = self.engine.session()?;
        session
            .slot(slot)
            .filter(|s| !s.is_filled())
            .map(|s| s.index)
    }
}
