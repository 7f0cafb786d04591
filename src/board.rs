//! Game board: cell grid, ship ownership, placement legality and shot
//! resolution.

use alloc::vec;
use alloc::vec::Vec;

use crate::common::{GameError, ShotOutcome};
use crate::point::Point;
use crate::ship::Ship;

/// Offsets of a cell's 8-neighborhood, plus the cell itself.
const NEIGHBORHOOD: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Unexplored water.
    Empty,
    /// An intact ship segment.
    Ship,
    /// A ship segment that was shot.
    Hit,
    /// A shot that found no ship.
    Miss,
    /// Water revealed around a sunk ship.
    Buffer,
}

/// A side's board. Owns its ships, the cell grid and the visited set — the
/// authoritative set of cells excluded from placement or targeting.
///
/// Lifecycle: created empty, populated via [`Board::add_ship`], then
/// [`Board::begin`] switches it to the play phase; from then on only
/// [`Board::shoot`] mutates it. Callers must not add ships after `begin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    grid: Vec<Cell>,
    ships: Vec<Ship>,
    destroyed: usize,
    visited: Vec<Point>,
    reveal: bool,
}

impl Board {
    /// Create an empty `size`×`size` board with ships rendered visibly.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            grid: vec![Cell::Empty; size * size],
            ships: Vec::new(),
            destroyed: 0,
            visited: Vec::new(),
            reveal: true,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Ships accepted onto this board, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships sunk so far. Monotonically non-decreasing.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// Whether every ship on this board has been sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.destroyed == self.ships.len()
    }

    /// Presentation flag: when false, renderers draw ship cells as hidden.
    /// Has no effect on game logic.
    pub fn reveal(&self) -> bool {
        self.reveal
    }

    pub fn set_reveal(&mut self, reveal: bool) {
        self.reveal = reveal;
    }

    /// State of the cell at `p`, or `None` when `p` is off the board.
    pub fn cell(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.grid[i])
    }

    /// Whether `p` is excluded from further placement or targeting.
    pub fn is_visited(&self, p: Point) -> bool {
        self.visited.contains(&p)
    }

    /// Whether `p.x` or `p.y` lies outside `[0, size)`.
    pub fn is_out_of_bounds(&self, p: Point) -> bool {
        let size = self.size as i32;
        !(0 <= p.x && p.x < size && 0 <= p.y && p.y < size)
    }

    fn index(&self, p: Point) -> Option<usize> {
        if self.is_out_of_bounds(p) {
            None
        } else {
            Some(p.y as usize * self.size + p.x as usize)
        }
    }

    fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.index(p) {
            self.grid[i] = cell;
        }
    }

    /// The 8-neighborhood of every occupied cell of `ship`, excluding
    /// out-of-bounds and already-visited cells. Serves as the
    /// placement-exclusion zone and, after a sinking, the reveal zone.
    fn adjacency_ring(&self, ship: &Ship) -> Vec<Point> {
        let mut ring = Vec::new();
        for cell in ship.cells() {
            for (dx, dy) in NEIGHBORHOOD {
                let p = cell.offset(dx, dy);
                if self.is_out_of_bounds(p) || self.is_visited(p) || ring.contains(&p) {
                    continue;
                }
                ring.push(p);
            }
        }
        ring
    }

    /// Accept `ship` onto the board.
    ///
    /// Fails with [`GameError::WrongShip`] when any occupied cell is out of
    /// bounds or already visited (overlapping another ship or its buffer).
    /// On success every occupied cell is marked [`Cell::Ship`] and visited,
    /// and the ship's adjacency ring is added to the visited set without
    /// any visible marking: the silent buffer enforces the no-touching rule
    /// while the surrounding water still renders as unexplored.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), GameError> {
        for cell in ship.cells() {
            if self.is_out_of_bounds(cell) || self.is_visited(cell) {
                return Err(GameError::WrongShip);
            }
        }
        for cell in ship.cells() {
            self.set(cell, Cell::Ship);
            self.visited.push(cell);
        }
        let ring = self.adjacency_ring(&ship);
        self.visited.extend(ring);
        self.ships.push(ship);
        Ok(())
    }

    /// Resolve a shot at `p`.
    ///
    /// Fails with [`GameError::Used`] when `p` is already visited and with
    /// [`GameError::OutOfBounds`] when it is off the board; neither failure
    /// mutates anything. Otherwise `p` joins the visited set and the shot
    /// resolves to [`ShotOutcome::Hit`], [`ShotOutcome::Sunk`] (the sunk
    /// ship's adjacency ring is revealed as [`Cell::Buffer`]) or
    /// [`ShotOutcome::Miss`].
    pub fn shoot(&mut self, p: Point) -> Result<ShotOutcome, GameError> {
        if self.is_visited(p) {
            return Err(GameError::Used);
        }
        if self.is_out_of_bounds(p) {
            return Err(GameError::OutOfBounds);
        }
        self.visited.push(p);

        if let Some(i) = self.ships.iter().position(|s| s.is_hit_by(p)) {
            self.ships[i].take_hit();
            self.set(p, Cell::Hit);
            if self.ships[i].is_sunk() {
                self.destroyed += 1;
                let ship = self.ships[i];
                self.reveal_ring(&ship);
                return Ok(ShotOutcome::Sunk);
            }
            return Ok(ShotOutcome::Hit);
        }
        self.set(p, Cell::Miss);
        Ok(ShotOutcome::Miss)
    }

    /// Mark a sunk ship's surroundings as explored and untargetable.
    fn reveal_ring(&mut self, ship: &Ship) {
        for p in self.adjacency_ring(ship) {
            self.set(p, Cell::Buffer);
            self.visited.push(p);
        }
    }

    /// Switch from the placement phase to the play phase: the visited set
    /// is emptied so shot tracking starts fresh. The silent placement
    /// buffer is discarded with it; during play only cells actually shot
    /// at, plus post-sink reveal rings, are excluded.
    pub fn begin(&mut self) {
        self.visited.clear();
    }
}
