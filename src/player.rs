use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::ShotOutcome;
use crate::point::Point;

/// Interface implemented by different actor types.
///
/// An actor only ever sees a read-only view of the board it is firing at;
/// the turn engine performs the shot and re-validates the target, so a
/// proposal may still be rejected and the same actor asked again.
pub trait Player {
    /// Propose the next target on the opponent's board.
    fn select_target(&mut self, rng: &mut SmallRng, target_board: &Board) -> Point;

    /// Inform the actor of the result of its last accepted shot.
    fn handle_shot_result(&mut self, _target: Point, _outcome: ShotOutcome) {}
}
