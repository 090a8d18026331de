//! Game events emitted to the presentation layer.
//!
//! The engines never render anything. They record what happened as
//! `GameEvent`s and the host drains them to animate pieces, flip cards and
//! show the victory dialog.

use serde::{Deserialize, Serialize};

/// Something the presentation layer should react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// A piece was dropped into its own slot.
    PiecePlaced { slot: usize, piece: usize },

    /// A piece was dropped onto the wrong slot.
    ///
    /// Only emitted when wrong-position feedback is enabled.
    PlacementRejected { piece: usize, slot: usize },

    /// A card was turned face-up.
    CardRevealed(usize),

    /// Two face-up cards share a pair id.
    PairMatched(usize, usize),

    /// Two face-up cards differ; they flip back after the delay.
    PairMismatched(usize, usize),

    /// Two mismatched cards were turned face-down again.
    CardsHidden(usize, usize),

    /// The game is won.
    Victory,
}

impl GameEvent {
    /// Is this the terminal victory event?
    #[must_use]
    pub fn is_victory(&self) -> bool {
        matches!(self, GameEvent::Victory)
    }
}

/// Ordered buffer of events waiting to be drained by the host.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events recorded since the last drain, oldest first.
    #[must_use]
    pub fn pending(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take every pending event, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Drop all pending events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
