//! Pointer glue between a host UI and the engines.
//!
//! The host forwards raw pointer events; a [`HitTest`] maps coordinates to
//! whatever is under them. Controllers turn that into engine calls:
//!
//! - [`PuzzleController`]: down on a piece starts a drag, moves track it,
//!   up over a slot attempts the drop, up anywhere else cancels.
//! - [`MemoryController`]: a click on a card reveals it.
//!
//! The engines themselves never see coordinates.

mod memory;
mod puzzle;

pub use memory::MemoryController;
pub use puzzle::{DragTracker, PuzzleController};

use serde::{Deserialize, Serialize};

/// A position in host coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Vector from `origin` to this point.
    #[must_use]
    pub fn offset_from(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// Something a pointer can land on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    Piece(usize),
    Slot(usize),
    Card(usize),
}

/// A discrete pointer event from the host.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Primary button pressed on `target`.
    Down { target: Target, at: Point },
    Move(Point),
    Up(Point),
    Click(Target),
}

/// Maps coordinates to the target under them.
pub trait HitTest {
    fn target_at(&self, at: Point) -> Option<Target>;
}

impl<F: Fn(Point) -> Option<Target>> HitTest for F {
    fn target_at(&self, at: Point) -> Option<Target> {
        self(at)
    }
}

/// What a [`GridLayout`] reports its cells as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Slot,
    Card,
}

/// A `rows x cols` grid of equal cells, numbered row-major.
///
/// Fits both boards: the jigsaw's slots and the memory game's cards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub origin: Point,
    pub cell_width: f32,
    pub cell_height: f32,
    pub rows: usize,
    pub cols: usize,
    pub kind: CellKind,
}

impl GridLayout {
    /// A grid anchored at the origin.
    #[must_use]
    pub fn new(rows: usize, cols: usize, cell_width: f32, cell_height: f32, kind: CellKind) -> Self {
        Self {
            origin: Point::default(),
            cell_width,
            cell_height,
            rows,
            cols,
            kind,
        }
    }

    #[must_use]
    pub fn at(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Top-left corner of cell `index`.
    #[must_use]
    pub fn cell_origin(&self, index: usize) -> Option<Point> {
        if index >= self.rows * self.cols {
            return None;
        }
        let (row, col) = (index / self.cols, index % self.cols);
        Some(Point::new(
            self.origin.x + col as f32 * self.cell_width,
            self.origin.y + row as f32 * self.cell_height,
        ))
    }
}

impl HitTest for GridLayout {
    fn target_at(&self, at: Point) -> Option<Target> {
        let local = at.offset_from(self.origin);
        if !local.x.is_finite() || !local.y.is_finite() || local.x < 0.0 || local.y < 0.0 {
            return None;
        }

        let col = (local.x / self.cell_width) as usize;
        let row = (local.y / self.cell_height) as usize;
        if col >= self.cols || row >= self.rows {
            return None;
        }

        let index = row * self.cols + col;
        Some(match self.kind {
            CellKind::Slot => Target::Slot(index),
            CellKind::Card => Target::Card(index),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_hit_test() {
        let grid = GridLayout::new(2, 4, 100.0, 50.0, CellKind::Slot).at(Point::new(10.0, 20.0));

        assert_eq!(grid.target_at(Point::new(10.0, 20.0)), Some(Target::Slot(0)));
        assert_eq!(grid.target_at(Point::new(315.0, 25.0)), Some(Target::Slot(3)));
        assert_eq!(grid.target_at(Point::new(115.0, 75.0)), Some(Target::Slot(5)));
        assert_eq!(grid.target_at(Point::new(409.0, 119.0)), Some(Target::Slot(7)));

        assert_eq!(grid.target_at(Point::new(9.0, 30.0)), None);
        assert_eq!(grid.target_at(Point::new(411.0, 30.0)), None);
        assert_eq!(grid.target_at(Point::new(50.0, 121.0)), None);
    }

    #[test]
    fn test_grid_ignores_non_finite_points() {
        let grid = GridLayout::new(2, 4, 100.0, 50.0, CellKind::Slot);
        assert_eq!(grid.target_at(Point::new(f32::NAN, f32::NAN)), None);
        assert_eq!(grid.target_at(Point::new(f32::NAN, 10.0)), None);
        assert_eq!(grid.target_at(Point::new(10.0, f32::INFINITY)), None);
    }

    #[test]
    fn test_grid_cards() {
        let grid = GridLayout::new(3, 4, 80.0, 80.0, CellKind::Card);
        assert_eq!(grid.target_at(Point::new(250.0, 170.0)), Some(Target::Card(11)));
    }

    #[test]
    fn test_cell_origin() {
        let grid = GridLayout::new(2, 4, 100.0, 50.0, CellKind::Slot).at(Point::new(10.0, 20.0));
        assert_eq!(grid.cell_origin(5), Some(Point::new(110.0, 70.0)));
        assert_eq!(grid.cell_origin(8), None);
    }

    #[test]
    fn test_closure_hit_test() {
        let only_slot_zero = |at: Point| (at.x < 1.0).then_some(Target::Slot(0));
        assert_eq!(only_slot_zero.target_at(Point::new(0.5, 0.0)), Some(Target::Slot(0)));
        assert_eq!(only_slot_zero.target_at(Point::new(2.0, 0.0)), None);
    }
}
