//! Common types for Sea Battle: shot outcomes and game errors.

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot hit an undepleted ship segment.
    Hit,
    /// Shot missed all ships.
    Miss,
    /// Shot depleted a ship's last segment.
    Sunk,
}

impl ShotOutcome {
    /// Whether the shooter is granted another shot. This is the single
    /// authority on turn continuation; the turn engine defers to it.
    pub fn keeps_turn(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

/// Errors returned by board, placement and engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Target cell lies outside the grid.
    OutOfBounds,
    /// Target cell was already shot at or revealed.
    Used,
    /// Ship placement is out of bounds or intersects another ship's
    /// exclusion zone.
    WrongShip,
    /// Fleet placement exhausted its attempt budget.
    NoFit,
    /// The game is over; no further moves are accepted.
    Finished,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::OutOfBounds => write!(f, "Target is outside the board"),
            GameError::Used => write!(f, "That cell was already shot at"),
            GameError::WrongShip => write!(f, "Ship placement is not legal there"),
            GameError::NoFit => write!(f, "Could not fit the fleet within the attempt budget"),
            GameError::Finished => write!(f, "The game is already over"),
        }
    }
}
