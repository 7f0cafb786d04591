use seabattle::{Orientation, Point, Ship};

#[test]
fn horizontal_cells_increase_along_x() {
    let ship = Ship::new(3, Point::new(0, 0), Orientation::Horizontal);
    let cells: Vec<Point> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
    );
}

#[test]
fn vertical_cells_increase_along_y() {
    let ship = Ship::new(3, Point::new(2, 1), Orientation::Vertical);
    let cells: Vec<Point> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![Point::new(2, 1), Point::new(2, 2), Point::new(2, 3)]
    );
}

#[test]
fn cell_count_matches_length_and_cells_are_distinct() {
    for len in 1..=4 {
        let ship = Ship::new(len, Point::new(1, 1), Orientation::Vertical);
        let cells: Vec<Point> = ship.cells().collect();
        assert_eq!(cells.len(), len);
        for (i, a) in cells.iter().enumerate() {
            for b in &cells[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn is_hit_by_detects_occupied_cells_only() {
    let ship = Ship::new(2, Point::new(4, 4), Orientation::Horizontal);
    assert!(ship.is_hit_by(Point::new(4, 4)));
    assert!(ship.is_hit_by(Point::new(5, 4)));
    assert!(!ship.is_hit_by(Point::new(6, 4)));
    assert!(!ship.is_hit_by(Point::new(4, 5)));
}

#[test]
fn new_ship_starts_at_full_health() {
    let ship = Ship::new(3, Point::new(0, 0), Orientation::Horizontal);
    assert_eq!(ship.health(), 3);
    assert!(!ship.is_sunk());
}
