//! Memory session state and the pair-comparison state machine.
//!
//! ## Comparison
//!
//! ```text
//! Idle (0-1 face-up) --second reveal--> match    --> Idle (immediately)
//!                                       mismatch --> Locked --flip back--> Idle
//! ```
//!
//! While locked no card may be revealed. At most two cards are ever waiting
//! in `flipped_indices`.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;
use crate::core::{GameError, Generation, InvalidOperation};

/// Why a reveal did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// A mismatched pair is still on show.
    InputLocked,
    AlreadyMatched,
    AlreadyFaceUp,
    /// Two cards are already face-up waiting to be resolved.
    AwaitingResolution,
}

/// Outcome of a reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevealResult {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// The first card of a pair was turned face-up.
    Revealed(usize),
    /// The second card matched the first. `completed` is set on the last pair.
    Matched { first: usize, second: usize, completed: bool },
    /// The second card did not match; input is locked until they flip back.
    Mismatched { first: usize, second: usize },
}

impl RevealResult {
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, RevealResult::Ignored(_))
    }
}

/// Session-level comparison state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Accepting reveals.
    Idle,
    /// Showing a mismatch; reveals are ignored.
    Locked,
    /// Every pair is matched.
    Complete,
}

/// One memory game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MemorySession {
    generation: Generation,
    cards: Vector<Card>,
    flipped_indices: SmallVec<[usize; 2]>,
    matched_pairs: usize,
    total_pairs: usize,
    input_locked: bool,
}

impl MemorySession {
    /// Start a session on an already shuffled deck.
    pub fn new(generation: Generation, cards: Vec<Card>) -> Self {
        assert!(cards.len() % 2 == 0, "Deck must hold whole pairs");

        let total_pairs = cards.len() / 2;
        Self {
            generation,
            cards: cards.into_iter().collect(),
            flipped_indices: SmallVec::new(),
            matched_pairs: 0,
            total_pairs,
            input_locked: false,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The deck, in board order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Face-up cards awaiting comparison, in reveal order.
    #[must_use]
    pub fn flipped_indices(&self) -> &[usize] {
        &self.flipped_indices
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.total_pairs
    }

    #[must_use]
    pub fn is_input_locked(&self) -> bool {
        self.input_locked
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.matched_pairs == self.total_pairs
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.is_complete() {
            SessionPhase::Complete
        } else if self.input_locked {
            SessionPhase::Locked
        } else {
            SessionPhase::Idle
        }
    }

    // === Transitions ===

    /// Turn a card face-up and compare once two are showing.
    ///
    /// Reveals that can't apply (locked input, matched or face-up card, two
    /// cards already waiting) are ignored rather than failing. Only an
    /// out-of-range index is an error.
    pub fn reveal(&mut self, index: usize) -> Result<RevealResult, GameError> {
        let count = self.cards.len();
        let card = self
            .cards
            .get(index)
            .ok_or(InvalidOperation::CardOutOfRange { index, count })?;

        let ignored = if self.input_locked {
            Some(IgnoreReason::InputLocked)
        } else if card.matched {
            Some(IgnoreReason::AlreadyMatched)
        } else if card.revealed {
            Some(IgnoreReason::AlreadyFaceUp)
        } else if self.flipped_indices.len() >= 2 {
            Some(IgnoreReason::AwaitingResolution)
        } else {
            None
        };
        if let Some(reason) = ignored {
            return Ok(RevealResult::Ignored(reason));
        }

        self.cards[index].revealed = true;
        self.flipped_indices.push(index);

        let [first, second] = match self.flipped_indices[..] {
            [first, second] => [first, second],
            _ => return Ok(RevealResult::Revealed(index)),
        };

        if self.cards[first].pairs_with(&self.cards[second]) {
            self.cards[first].matched = true;
            self.cards[second].matched = true;
            self.matched_pairs += 1;
            self.flipped_indices.clear();
            Ok(RevealResult::Matched {
                first,
                second,
                completed: self.is_complete(),
            })
        } else {
            self.input_locked = true;
            Ok(RevealResult::Mismatched { first, second })
        }
    }

    /// Turn a shown mismatch back face-down and unlock input.
    ///
    /// Returns `false` if the session isn't showing that mismatch.
    pub fn hide_mismatch(&mut self, first: usize, second: usize) -> bool {
        if !self.input_locked || self.flipped_indices[..] != [first, second] {
            return false;
        }

        for index in [first, second] {
            self.cards[index].revealed = false;
        }
        self.flipped_indices.clear();
        self.input_locked = false;
        true
    }
}
