//! Click driver for the memory game.

use super::{HitTest, Point, PointerEvent, Target};
use crate::core::{GameError, GameRng, RandomSource};
use crate::memory::{MemoryEngine, RevealResult};

/// Feeds clicks into a [`MemoryEngine`].
pub struct MemoryController<H, R: RandomSource = GameRng> {
    engine: MemoryEngine<R>,
    cards: H,
}

impl<H: HitTest, R: RandomSource> MemoryController<H, R> {
    /// Drive `engine`, resolving clicks by position with `cards`.
    pub fn new(engine: MemoryEngine<R>, cards: H) -> Self {
        Self { engine, cards }
    }

    #[must_use]
    pub fn engine(&self) -> &MemoryEngine<R> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut MemoryEngine<R> {
        &mut self.engine
    }

    /// Handle one pointer event. Only clicks on cards do anything.
    pub fn handle(&mut self, event: PointerEvent) -> Result<Option<RevealResult>, GameError> {
        match event {
            PointerEvent::Click(Target::Card(index)) => self.engine.reveal(index).map(Some),
            _ => Ok(None),
        }
    }

    /// Click at a position rather than on a known target.
    pub fn click_at(&mut self, at: Point) -> Result<Option<RevealResult>, GameError> {
        match self.cards.target_at(at) {
            Some(target) => self.handle(PointerEvent::Click(target)),
            None => Ok(None),
        }
    }

    /// Forward elapsed time to the engine.
    pub fn advance(&mut self, elapsed_ms: u64) -> usize {
        self.engine.advance(elapsed_ms)
    }
}
