//! Pieces, slots, and how they are laid out on screen.

use serde::{Deserialize, Serialize};

/// A jigsaw piece.
///
/// Piece `i` shows tile `(i % cols, i / cols)` of the image and belongs in
/// slot `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub index: usize,
    pub col: usize,
    pub row: usize,
}

impl Piece {
    /// The piece at `index` in a grid `cols` wide.
    #[must_use]
    pub const fn new(index: usize, cols: usize) -> Self {
        Self {
            index,
            col: index % cols,
            row: index / cols,
        }
    }

    /// `(col, row)` of the image tile this piece shows.
    #[must_use]
    pub const fn tile(&self) -> (usize, usize) {
        (self.col, self.row)
    }
}

/// A target position on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub index: usize,
    /// The piece sitting in this slot, once placed.
    pub piece: Option<usize>,
}

impl Slot {
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.piece.is_some()
    }
}

/// Where a piece is in its lifecycle.
///
/// `Pooled -> Dragging -> Placed`, or back to `Pooled` when a drop fails or
/// is cancelled. `Placed` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceState {
    Pooled,
    Dragging,
    Placed,
}

/// The four trays around the board that hold pooled pieces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoolZone {
    Top,
    Left,
    Right,
    Bottom,
}

impl PoolZone {
    /// Tray for the piece dealt at `position` out of `count` pieces.
    ///
    /// Pieces are dealt round the board in shuffle order, `ceil(count / 4)`
    /// to a tray: two per tray on the 2x4 board.
    #[must_use]
    pub fn for_position(position: usize, count: usize) -> Self {
        let per_zone = count.div_ceil(4).max(1);
        match position / per_zone {
            0 => PoolZone::Top,
            1 => PoolZone::Left,
            2 => PoolZone::Right,
            _ => PoolZone::Bottom,
        }
    }
}

/// Background geometry for drawing one tile of the source image.
///
/// Values are percentages in the CSS `background-size` /
/// `background-position` sense.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileLayout {
    pub rows: usize,
    pub cols: usize,
}

impl TileLayout {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Image size relative to one tile: `(cols * 100%, rows * 100%)`.
    #[must_use]
    pub fn background_size(&self) -> (f32, f32) {
        ((self.cols * 100) as f32, (self.rows * 100) as f32)
    }

    /// Offset that brings `piece`'s tile into view.
    ///
    /// With percentage positioning the offset is `col / (cols - 1)`; a single
    /// tile along an axis sits at 0.
    #[must_use]
    pub fn background_position(&self, piece: &Piece) -> (f32, f32) {
        let axis = |at: usize, len: usize| {
            if len > 1 {
                (at * 100) as f32 / (len - 1) as f32
            } else {
                0.0
            }
        };
        (axis(piece.col, self.cols), axis(piece.row, self.rows))
    }
}
