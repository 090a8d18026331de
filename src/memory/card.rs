//! Memory cards.

use serde::{Deserialize, Serialize};

use crate::assets::AssetId;

/// Key shared by the two cards of a pair.
///
/// The user-drawn pair has its own variant, so it can never collide with a
/// photo name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PairId {
    /// The pair showing the player's drawing.
    User,
    /// A pair showing the named photo.
    Photo(AssetId),
}

/// Where a card is in its lifecycle.
///
/// `FaceDown -> FaceUp -> Matched`, or back to `FaceDown` after a mismatch.
/// `Matched` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    FaceDown,
    FaceUp,
    Matched,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub pair_id: PairId,
    /// Image shown when face-up.
    ///
    /// For photos this is the discovered name itself (`img3.jpg`), the same
    /// value the pair is keyed on. Resolving it against the image directory
    /// is up to the host.
    pub image: AssetId,
    pub revealed: bool,
    pub matched: bool,
}

impl Card {
    /// A face-down card.
    #[must_use]
    pub fn new(pair_id: PairId, image: AssetId) -> Self {
        Self {
            pair_id,
            image,
            revealed: false,
            matched: false,
        }
    }

    /// One of the two user-drawn cards.
    #[must_use]
    pub fn user(drawing: AssetId) -> Self {
        Self::new(PairId::User, drawing)
    }

    /// One of the two cards for `photo`.
    #[must_use]
    pub fn photo(photo: AssetId) -> Self {
        Self::new(PairId::Photo(photo.clone()), photo)
    }

    #[must_use]
    pub fn state(&self) -> CardState {
        if self.matched {
            CardState::Matched
        } else if self.revealed {
            CardState::FaceUp
        } else {
            CardState::FaceDown
        }
    }

    /// Does this card pair with `other`?
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.pair_id == other.pair_id
    }
}
