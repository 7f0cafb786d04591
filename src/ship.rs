//! Ship type: a fixed-length segment with an anchor, an orientation and
//! remaining health. Occupied cells are derived, never stored.

use crate::point::Point;

/// Orientation of a ship on the board, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship anchored at a point. Legality of the position is the board's
/// concern; a `Ship` value may describe an illegal placement until
/// [`Board::add_ship`](crate::board::Board::add_ship) accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    anchor: Point,
    orientation: Orientation,
    health: usize,
}

impl Ship {
    /// Create a ship with full health (`health == length`).
    pub fn new(length: usize, anchor: Point, orientation: Orientation) -> Self {
        Self {
            length,
            anchor,
            orientation,
            health: length,
        }
    }

    /// Occupied cells in increasing segment order: cell `i` is the anchor
    /// shifted by `i` along the orientation axis.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        let (dx, dy) = match self.orientation {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        };
        (0..self.length as i32).map(move |i| self.anchor.offset(dx * i, dy * i))
    }

    /// Whether `p` is one of this ship's occupied cells.
    pub fn is_hit_by(&self, p: Point) -> bool {
        self.cells().any(|c| c == p)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Segments not yet hit. Starts at `length`, reaches zero when sunk.
    pub fn health(&self) -> usize {
        self.health
    }

    pub fn is_sunk(&self) -> bool {
        self.health == 0
    }

    /// Remove one segment of health. Only the owning board calls this,
    /// once per distinct cell hit.
    pub(crate) fn take_hit(&mut self) {
        self.health = self.health.saturating_sub(1);
    }
}
