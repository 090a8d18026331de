//! The memory engine: one active session plus its pending transitions.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::deck::build_deck;
use super::session::{MemorySession, RevealResult};
use crate::assets::{AssetId, AssetSource};
use crate::core::{
    EventLog, GameError, GameEvent, GameRng, Generation, InvalidOperation, MemoryConfig, RandomSource,
};
use crate::drawing::DrawingCapture;
use crate::schedule::{Scheduled, TimerQueue};

/// A delayed state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    /// Turn a mismatched pair face-down and unlock input.
    FlipBack { first: usize, second: usize },
    /// Tell the presentation layer the game is won.
    AnnounceVictory,
}

/// Runs memory games.
///
/// Time is logical: the host calls [`MemoryEngine::advance`] with the
/// elapsed milliseconds and due transitions fire then. Each transition
/// carries the generation of the session that scheduled it; starting a new
/// game bumps the generation, so transitions left over from the old game
/// are discarded when they come due instead of touching the new one.
///
/// ## Example
///
/// ```
/// use jigsaw_memory::assets::AssetId;
/// use jigsaw_memory::core::{GameRng, MemoryConfig};
/// use jigsaw_memory::memory::MemoryEngine;
///
/// let photos: Vec<AssetId> = (1..=5).map(|i| AssetId::new(format!("img{}.jpg", i))).collect();
/// let mut engine = MemoryEngine::with_rng(MemoryConfig::default(), GameRng::new(3));
/// let session = engine.new_game(AssetId::from("drawing.png"), &photos).unwrap();
/// assert_eq!(session.cards().len(), 12);
/// ```
pub struct MemoryEngine<R: RandomSource = GameRng> {
    config: MemoryConfig,
    rng: R,
    generation: Generation,
    session: Option<MemorySession>,
    timers: TimerQueue<Transition>,
    events: EventLog,
}

impl MemoryEngine<GameRng> {
    /// Create an engine seeded from entropy.
    pub fn new(config: MemoryConfig) -> Self {
        Self::with_rng(config, GameRng::from_entropy())
    }
}

impl<R: RandomSource> MemoryEngine<R> {
    /// Create an engine drawing randomness from `rng`.
    pub fn with_rng(config: MemoryConfig, rng: R) -> Self {
        assert!(config.total_pairs > 0, "Memory game must have at least 1 pair");

        Self {
            config,
            rng,
            generation: Generation::default(),
            session: None,
            timers: TimerQueue::new(),
            events: EventLog::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &MemoryConfig {
        &self.config
    }

    /// The active session, if a game has been started.
    #[must_use]
    pub fn session(&self) -> Option<&MemorySession> {
        self.session.as_ref()
    }

    /// Generation of the most recent session.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Current logical time in milliseconds.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.timers.now()
    }

    /// Transitions waiting to fire, including stale ones.
    #[must_use]
    pub fn pending_transitions(&self) -> usize {
        self.timers.len()
    }

    /// Take the events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    // === Game Setup ===

    /// Start a game with the player's drawing and a pool of photos.
    ///
    /// Needs at least `total_pairs - 1` distinct photos; otherwise fails with
    /// [`GameError::InsufficientAssets`] and the current game stays as it is.
    pub fn new_game(&mut self, drawing: AssetId, photos: &[AssetId]) -> Result<&MemorySession, GameError> {
        let cards = match build_deck(&drawing, photos, self.config.total_pairs, &mut self.rng) {
            Ok(cards) => cards,
            Err(err) => {
                warn!("cannot start memory game: {}", err);
                return Err(err);
            }
        };

        let generation = self.generation.next();
        info!("memory game {} started with {} cards", generation, cards.len());

        self.generation = generation;
        self.events.clear();
        Ok(self.session.insert(MemorySession::new(generation, cards)))
    }

    /// Discover photos from `source`, then start a game.
    pub fn new_game_from(
        &mut self,
        drawing: AssetId,
        source: &mut dyn AssetSource,
    ) -> Result<&MemorySession, GameError> {
        let photos = source.discover();
        self.new_game(drawing, &photos)
    }

    /// Start a game from a drawing capture.
    ///
    /// Fails with [`GameError::EmptyDrawing`] if nothing has been drawn.
    pub fn new_game_with_drawing(
        &mut self,
        drawing: &dyn DrawingCapture,
        photos: &[AssetId],
    ) -> Result<&MemorySession, GameError> {
        if !drawing.has_content() {
            return Err(GameError::EmptyDrawing);
        }
        let image = drawing.export_image().to_asset_id();
        self.new_game(image, photos)
    }

    // === Play ===

    /// Turn a card face-up.
    ///
    /// Ignored (not an error) while input is locked, for matched or face-up
    /// cards, and while two cards wait to be resolved. A match resolves
    /// immediately; a mismatch locks input until the flip-back fires.
    pub fn reveal(&mut self, index: usize) -> Result<RevealResult, GameError> {
        let session = self.session.as_mut().ok_or(InvalidOperation::NoActiveSession)?;
        let generation = session.generation();
        let result = session.reveal(index)?;

        match result {
            RevealResult::Ignored(reason) => {
                debug!("reveal of card {} ignored: {:?}", index, reason);
            }
            RevealResult::Revealed(index) => {
                self.events.push(GameEvent::CardRevealed(index));
            }
            RevealResult::Matched { first, second, completed } => {
                debug!("cards {} and {} matched", first, second);
                self.events.push(GameEvent::CardRevealed(second));
                self.events.push(GameEvent::PairMatched(first, second));
                if completed {
                    info!("memory game {} complete", generation);
                    self.timers
                        .schedule(self.config.victory_delay_ms, generation, Transition::AnnounceVictory);
                }
            }
            RevealResult::Mismatched { first, second } => {
                debug!("cards {} and {} differ, locking input", first, second);
                self.events.push(GameEvent::CardRevealed(second));
                self.events.push(GameEvent::PairMismatched(first, second));
                self.timers.schedule(
                    self.config.flip_back_delay_ms,
                    generation,
                    Transition::FlipBack { first, second },
                );
            }
        }

        Ok(result)
    }

    /// Move the clock forward and fire whatever came due.
    ///
    /// Returns how many transitions were applied; stale ones are dropped.
    pub fn advance(&mut self, elapsed_ms: u64) -> usize {
        self.timers.advance(elapsed_ms);

        let mut applied = 0;
        while let Some(scheduled) = self.timers.pop_due() {
            match self.apply_transition(&scheduled) {
                Ok(()) => applied += 1,
                Err(err) => debug!("dropping {:?}: {}", scheduled.payload, err),
            }
        }
        applied
    }

    /// Apply one scheduled transition to the active session.
    ///
    /// Refuses transitions scheduled by a session that has since been
    /// replaced.
    pub fn apply_transition(&mut self, scheduled: &Scheduled<Transition>) -> Result<(), GameError> {
        let session = self.session.as_mut().ok_or(InvalidOperation::NoActiveSession)?;
        if scheduled.generation != session.generation() {
            return Err(InvalidOperation::StaleSession {
                handle: scheduled.generation,
                active: session.generation(),
            }
            .into());
        }

        match scheduled.payload {
            Transition::FlipBack { first, second } => {
                if session.hide_mismatch(first, second) {
                    debug!("cards {} and {} flipped back", first, second);
                    self.events.push(GameEvent::CardsHidden(first, second));
                }
            }
            Transition::AnnounceVictory => {
                self.events.push(GameEvent::Victory);
            }
        }
        Ok(())
    }
}
