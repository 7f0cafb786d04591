use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use seabattle::{
    Board, FleetPlacer, GameError, Point, ShotOutcome, Side, TurnEngine, TurnState, BOARD_SIZE,
    NUM_SHIPS,
};

fn random_fleet(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    FleetPlacer::new(BOARD_SIZE).random_board(&mut rng)
}

fn sunk_ships(board: &Board) -> usize {
    board.ships().iter().filter(|s| s.is_sunk()).count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placed_fleets_never_overlap_or_touch(seed in any::<u64>()) {
        let board = random_fleet(seed);
        prop_assert_eq!(board.ships().len(), NUM_SHIPS);
        let cells: Vec<Vec<Point>> =
            board.ships().iter().map(|s| s.cells().collect()).collect();
        for (i, a) in cells.iter().enumerate() {
            for b in &cells[i + 1..] {
                for &pa in a {
                    for &pb in b {
                        let gap = (pa.x - pb.x).abs().max((pa.y - pb.y).abs());
                        prop_assert!(gap > 1);
                    }
                }
            }
        }
    }

    #[test]
    fn destroyed_count_is_monotone_and_matches_sunk_ships(
        seed in any::<u64>(),
        shots in prop::collection::vec((0..BOARD_SIZE as i32, 0..BOARD_SIZE as i32), 0..80),
    ) {
        let mut board = random_fleet(seed);
        let mut last = board.destroyed_count();
        prop_assert_eq!(last, 0);
        for (x, y) in shots {
            let _ = board.shoot(Point::new(x, y));
            let now = board.destroyed_count();
            prop_assert!(now >= last);
            prop_assert_eq!(now, sunk_ships(&board));
            last = now;
        }
    }

    #[test]
    fn second_shot_at_a_cell_fails_without_mutating(
        seed in any::<u64>(),
        x in 0..BOARD_SIZE as i32,
        y in 0..BOARD_SIZE as i32,
    ) {
        let mut board = random_fleet(seed);
        board.shoot(Point::new(x, y)).unwrap();
        let snapshot = board.clone();
        let err = board.shoot(Point::new(x, y)).unwrap_err();
        prop_assert_eq!(err, GameError::Used);
        prop_assert_eq!(board, snapshot);
    }

    #[test]
    fn miss_flips_the_turn_and_hits_keep_it(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let placer = FleetPlacer::new(BOARD_SIZE);
        let mut engine = TurnEngine::new(
            placer.random_board(&mut rng),
            placer.random_board(&mut rng),
        );
        while engine.winner().is_none() {
            let before = match engine.state() {
                TurnState::Awaiting(side) => side,
                TurnState::Finished(_) => break,
            };
            let target = Point::new(
                rng.random_range(0..BOARD_SIZE as i32),
                rng.random_range(0..BOARD_SIZE as i32),
            );
            match engine.play_turn(target) {
                Ok(outcome) => match engine.state() {
                    TurnState::Awaiting(after) => {
                        if outcome == ShotOutcome::Miss {
                            prop_assert_eq!(after, before.opponent());
                        } else {
                            prop_assert_eq!(after, before);
                        }
                    }
                    TurnState::Finished(winner) => prop_assert_eq!(winner, before),
                },
                Err(GameError::Used) => {
                    // same side must still be active
                    prop_assert_eq!(engine.state(), TurnState::Awaiting(before));
                }
                Err(e) => prop_assert!(false, "unexpected error: {}", e),
            }
        }
    }
}

#[test]
fn side_enum_is_its_own_inverse() {
    assert_eq!(Side::Human.opponent(), Side::Computer);
    assert_eq!(Side::Computer.opponent(), Side::Human);
    assert_eq!(Side::Human.opponent().opponent(), Side::Human);
}
