//! Random fleet placement with a global retry budget.

use rand::Rng;

use crate::board::Board;
use crate::common::GameError;
use crate::config::{FLEET, PLACEMENT_ATTEMPTS};
use crate::point::Point;
use crate::ship::{Orientation, Ship};

/// Places the fixed fleet onto a fresh board by rejection sampling.
///
/// Ships are tried in [`FLEET`] order. Every placement attempt, legal or
/// not, counts against one budget shared by the whole build; exhausting it
/// aborts the build with [`GameError::NoFit`] and the caller starts over
/// from an empty board. No backtracking, only restart-from-scratch.
pub struct FleetPlacer {
    size: usize,
    attempt_budget: usize,
}

impl FleetPlacer {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            attempt_budget: PLACEMENT_ATTEMPTS,
        }
    }

    /// Same placer with a non-default attempt budget.
    pub fn with_budget(size: usize, attempt_budget: usize) -> Self {
        Self {
            size,
            attempt_budget,
        }
    }

    /// Attempt one full fleet build. On success the returned board holds
    /// all seven ships and has already been switched to the play phase via
    /// [`Board::begin`]. Never returns a partially populated board.
    pub fn build_fleet<R: Rng>(&self, rng: &mut R) -> Result<Board, GameError> {
        let mut board = Board::new(self.size);
        let mut attempts = 0usize;
        for &length in FLEET.iter() {
            loop {
                attempts += 1;
                if attempts > self.attempt_budget {
                    log::debug!(
                        "fleet build gave up after {} attempts",
                        self.attempt_budget
                    );
                    return Err(GameError::NoFit);
                }
                let anchor = Point::new(
                    rng.random_range(0..self.size as i32),
                    rng.random_range(0..self.size as i32),
                );
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                match board.add_ship(Ship::new(length, anchor, orientation)) {
                    Ok(()) => break,
                    Err(GameError::WrongShip) => continue,
                    Err(e) => return Err(e),
                }
            }
        }
        log::debug!("fleet placed in {} attempts", attempts);
        board.begin();
        Ok(board)
    }

    /// Build fleets until one fits. Terminates probabilistically: each
    /// failed build discards the whole board and retries.
    pub fn random_board<R: Rng>(&self, rng: &mut R) -> Board {
        loop {
            match self.build_fleet(rng) {
                Ok(board) => return board,
                Err(_) => continue,
            }
        }
    }
}
