use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::player::Player;
use crate::point::Point;

/// Computer actor that guesses uniformly at random. It keeps no memory of
/// earlier shots, so a proposal may target an already-resolved cell; the
/// turn-loop retry absorbs the resulting rejection.
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn select_target(&mut self, rng: &mut SmallRng, target_board: &Board) -> Point {
        let size = target_board.size() as i32;
        Point::new(rng.random_range(0..size), rng.random_range(0..size))
    }
}
