//! Turn state machine driving two boards through the shoot/resolve cycle.

use crate::board::Board;
use crate::common::{GameError, ShotOutcome};
use crate::point::Point;

/// One of the two opposing sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// Current phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for the given side to shoot.
    Awaiting(Side),
    /// Game over; the given side won. Accepts no further moves.
    Finished(Side),
}

/// Mediates all cross-board access: each side owns one board and only ever
/// shoots at the opponent's. The human side moves first.
pub struct TurnEngine {
    human_board: Board,
    computer_board: Board,
    state: TurnState,
}

impl TurnEngine {
    /// Start a game over two fully placed boards (both already switched to
    /// the play phase).
    pub fn new(human_board: Board, computer_board: Board) -> Self {
        Self {
            human_board,
            computer_board,
            state: TurnState::Awaiting(Side::Human),
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// The winning side, once the game is over.
    pub fn winner(&self) -> Option<Side> {
        match self.state {
            TurnState::Finished(side) => Some(side),
            TurnState::Awaiting(_) => None,
        }
    }

    /// The board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Human => &self.human_board,
            Side::Computer => &self.computer_board,
        }
    }

    /// Resolve one shot by the active side at `target` on the opposing
    /// board.
    ///
    /// A `Miss` passes the turn; `Hit` and `Sunk` keep the shooter active
    /// (decided by [`ShotOutcome::keeps_turn`], never duplicated here).
    /// Sinking the opponent's last ship finishes the game with the shooter
    /// as winner. [`GameError::Used`] and [`GameError::OutOfBounds`]
    /// propagate without any state change so the caller can re-prompt the
    /// same actor; moves after the game ended fail with
    /// [`GameError::Finished`].
    pub fn play_turn(&mut self, target: Point) -> Result<ShotOutcome, GameError> {
        let side = match self.state {
            TurnState::Awaiting(side) => side,
            TurnState::Finished(_) => return Err(GameError::Finished),
        };
        let target_board = match side {
            Side::Human => &mut self.computer_board,
            Side::Computer => &mut self.human_board,
        };
        let outcome = target_board.shoot(target)?;

        if self.board(side.opponent()).all_sunk() {
            log::debug!("{:?} wins", side);
            self.state = TurnState::Finished(side);
        } else if !outcome.keeps_turn() {
            self.state = TurnState::Awaiting(side.opponent());
        }
        Ok(outcome)
    }
}
