//! Jigsaw session state and the placement rule.
//!
//! ## Invariants
//!
//! - The pool plus the filled slots always hold every piece exactly once.
//! - A slot accepts only the piece with its own index, and only while empty.
//! - Once filled, a slot stays filled for the rest of the session.
//! - `correct_count` equals the number of filled slots; the puzzle is
//!   complete when it reaches the piece count.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PoolZone, Slot, TileLayout};
use crate::assets::AssetId;
use crate::core::shuffle::shuffled_indices;
use crate::core::{GameError, Generation, InvalidOperation, PuzzleConfig, RandomSource};

/// Why a drop was turned down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// The slot belongs to a different piece.
    WrongSlot,
    /// The slot already holds its piece.
    SlotFilled,
}

/// Outcome of the placement rule, before anything is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    Accept,
    Reject(RejectReason),
}

/// Outcome of a drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementResult {
    /// The piece now sits in its slot. `completed` is set on the final piece.
    Placed { piece: usize, slot: usize, completed: bool },
    /// Nothing changed; the piece stays in the pool.
    Rejected { piece: usize, slot: usize, reason: RejectReason },
}

impl PlacementResult {
    #[must_use]
    pub fn is_placed(&self) -> bool {
        matches!(self, PlacementResult::Placed { .. })
    }
}

/// One jigsaw game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PuzzleSession {
    generation: Generation,
    image: AssetId,
    rows: usize,
    cols: usize,
    /// Pieces not yet placed, in deal order.
    pool: Vector<usize>,
    /// Tray each piece was dealt to, indexed by piece.
    zones: Vec<PoolZone>,
    /// Slot index -> placed piece.
    slot_pieces: Vec<Option<usize>>,
    correct_count: usize,
}

impl PuzzleSession {
    /// Start a session with pieces dealt in `order`.
    ///
    /// `order` must be a permutation of `0..rows * cols`.
    pub fn new(generation: Generation, image: AssetId, config: &PuzzleConfig, order: Vec<usize>) -> Self {
        let count = config.piece_count();
        assert_eq!(order.len(), count, "Deal order must cover every piece");

        let mut zones = vec![PoolZone::Top; count];
        for (position, &piece) in order.iter().enumerate() {
            zones[piece] = PoolZone::for_position(position, count);
        }

        Self {
            generation,
            image,
            rows: config.rows,
            cols: config.cols,
            pool: order.into_iter().collect(),
            zones,
            slot_pieces: vec![None; count],
            correct_count: 0,
        }
    }

    /// Start a session with a uniformly shuffled deal.
    pub fn shuffled<R: RandomSource + ?Sized>(
        generation: Generation,
        image: AssetId,
        config: &PuzzleConfig,
        rng: &mut R,
    ) -> Self {
        let order = shuffled_indices(rng, config.piece_count());
        Self::new(generation, image, config, order)
    }

    // === Accessors ===

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The image being assembled.
    #[must_use]
    pub fn image(&self) -> &AssetId {
        &self.image
    }

    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.slot_pieces.len()
    }

    /// Pieces still waiting to be placed, in deal order.
    #[must_use]
    pub fn pool(&self) -> &Vector<usize> {
        &self.pool
    }

    /// Slot index -> placed piece index.
    #[must_use]
    pub fn slot_pieces(&self) -> &[Option<usize>] {
        &self.slot_pieces
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.correct_count == self.piece_count()
    }

    #[must_use]
    pub fn piece(&self, index: usize) -> Option<Piece> {
        (index < self.piece_count()).then(|| Piece::new(index, self.cols))
    }

    #[must_use]
    pub fn slot(&self, index: usize) -> Option<Slot> {
        self.slot_pieces.get(index).map(|&piece| Slot { index, piece })
    }

    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.slot_pieces
            .iter()
            .enumerate()
            .map(|(index, &piece)| Slot { index, piece })
    }

    #[must_use]
    pub fn is_pooled(&self, piece: usize) -> bool {
        self.pool.contains(&piece)
    }

    /// Tray a pooled piece sits in. `None` once placed.
    #[must_use]
    pub fn pool_zone(&self, piece: usize) -> Option<PoolZone> {
        if self.is_pooled(piece) {
            self.zones.get(piece).copied()
        } else {
            None
        }
    }

    #[must_use]
    pub fn tile_layout(&self) -> TileLayout {
        TileLayout::new(self.rows, self.cols)
    }

    // === Placement ===

    /// Ensure `piece` is in range and still in the pool.
    pub fn check_piece(&self, piece: usize) -> Result<(), GameError> {
        let count = self.piece_count();
        if piece >= count {
            return Err(InvalidOperation::PieceOutOfRange { index: piece, count }.into());
        }
        if !self.is_pooled(piece) {
            return Err(InvalidOperation::PieceNotPooled(piece).into());
        }
        Ok(())
    }

    /// The placement rule, without side effects.
    ///
    /// A drop is accepted iff the slot is empty and `piece == slot`.
    pub fn decide(&self, piece: usize, slot: usize) -> Result<Placement, GameError> {
        self.check_piece(piece)?;
        let count = self.piece_count();
        let occupant = self
            .slot_pieces
            .get(slot)
            .ok_or(InvalidOperation::SlotOutOfRange { index: slot, count })?;

        Ok(if occupant.is_some() {
            Placement::Reject(RejectReason::SlotFilled)
        } else if piece != slot {
            Placement::Reject(RejectReason::WrongSlot)
        } else {
            Placement::Accept
        })
    }

    /// Apply the placement rule.
    ///
    /// On acceptance the piece leaves the pool and fills the slot. Rejections
    /// and errors leave the session untouched.
    pub fn place(&mut self, piece: usize, slot: usize) -> Result<PlacementResult, GameError> {
        match self.decide(piece, slot)? {
            Placement::Reject(reason) => Ok(PlacementResult::Rejected { piece, slot, reason }),
            Placement::Accept => {
                self.slot_pieces[slot] = Some(piece);
                if let Some(position) = self.pool.index_of(&piece) {
                    self.pool.remove(position);
                }
                self.correct_count += 1;
                Ok(PlacementResult::Placed {
                    piece,
                    slot,
                    completed: self.is_complete(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedRng;

    fn session() -> PuzzleSession {
        PuzzleSession::new(
            Generation::new(1),
            AssetId::from("img1.png"),
            &PuzzleConfig::default(),
            vec![3, 0, 7, 1, 6, 2, 5, 4],
        )
    }

    #[test]
    fn test_new_session_is_empty() {
        let s = session();
        assert_eq!(s.piece_count(), 8);
        assert_eq!(s.correct_count(), 0);
        assert!(s.slot_pieces().iter().all(Option::is_none));
        assert_eq!(s.pool().iter().copied().collect::<Vec<_>>(), vec![3, 0, 7, 1, 6, 2, 5, 4]);
        assert!(!s.is_complete());
    }

    #[test]
    fn test_zones_follow_deal_order() {
        let s = session();
        assert_eq!(s.pool_zone(3), Some(PoolZone::Top));
        assert_eq!(s.pool_zone(0), Some(PoolZone::Top));
        assert_eq!(s.pool_zone(7), Some(PoolZone::Left));
        assert_eq!(s.pool_zone(4), Some(PoolZone::Bottom));
    }

    #[test]
    fn test_decide() {
        let s = session();
        assert_eq!(s.decide(2, 2).unwrap(), Placement::Accept);
        assert_eq!(s.decide(2, 5).unwrap(), Placement::Reject(RejectReason::WrongSlot));
        assert!(s.decide(8, 0).is_err());
        assert!(s.decide(0, 8).is_err());
    }

    #[test]
    fn test_place_correct() {
        let mut s = session();
        let result = s.place(7, 7).unwrap();
        assert_eq!(result, PlacementResult::Placed { piece: 7, slot: 7, completed: false });
        assert_eq!(s.slot(7), Some(Slot { index: 7, piece: Some(7) }));
        assert!(!s.is_pooled(7));
        assert_eq!(s.pool_zone(7), None);
        assert_eq!(s.correct_count(), 1);
    }

    #[test]
    fn test_place_wrong_leaves_state() {
        let mut s = session();
        let result = s.place(1, 2).unwrap();
        assert_eq!(
            result,
            PlacementResult::Rejected { piece: 1, slot: 2, reason: RejectReason::WrongSlot }
        );
        assert_eq!(s.correct_count(), 0);
        assert!(s.is_pooled(1));
    }

    #[test]
    fn test_placed_piece_cannot_move_again() {
        let mut s = session();
        s.place(0, 0).unwrap();
        assert_eq!(
            s.place(0, 0),
            Err(GameError::InvalidOperation(InvalidOperation::PieceNotPooled(0)))
        );
    }

    #[test]
    fn test_filled_slot_rejects() {
        let mut s = session();
        s.place(4, 4).unwrap();
        let result = s.place(5, 4).unwrap();
        assert_eq!(
            result,
            PlacementResult::Rejected { piece: 5, slot: 4, reason: RejectReason::SlotFilled }
        );
        assert_eq!(s.slot(4).unwrap().piece, Some(4));
    }

    #[test]
    fn test_complete() {
        let mut s = session();
        for i in 0..7 {
            assert!(s.place(i, i).unwrap().is_placed());
        }
        assert_eq!(s.place(7, 7).unwrap(), PlacementResult::Placed { piece: 7, slot: 7, completed: true });
        assert!(s.is_complete());
        assert!(s.pool().is_empty());
    }

    #[test]
    fn test_shuffled_with_script() {
        let mut rng = ScriptedRng::zeros();
        let s = PuzzleSession::shuffled(Generation::new(1), AssetId::from("a"), &PuzzleConfig::default(), &mut rng);
        assert_eq!(s.pool().iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6, 7, 0]);
    }

    #[test]
    fn test_session_serializes() {
        let s = session();
        let json = serde_json::to_string(&s).unwrap();
        let back: PuzzleSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back.pool(), s.pool());
        assert_eq!(back.generation(), s.generation());
    }
}
