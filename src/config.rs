/// Default board edge length.
pub const BOARD_SIZE: usize = 6;

/// Number of ships in a full fleet.
pub const NUM_SHIPS: usize = 7;

/// Fleet composition: ship lengths placed in this order.
pub const FLEET: [usize; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];

/// Total occupied cells of a full fleet.
pub const TOTAL_SHIP_CELLS: usize = 11;

/// Global attempt budget for one whole fleet build.
pub const PLACEMENT_ATTEMPTS: usize = 2000;
