#![cfg(feature = "std")]

use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::player::Player;
use crate::point::Point;

/// Human actor reading targets from stdin.
///
/// Input is a 1-indexed "column row" pair; digits are validated and the
/// coordinates converted to 0-indexed here, before the core ever sees them.
/// The board still re-validates bounds and visited-ness on its own.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_coord(input: &str, size: usize) -> Option<Point> {
    let mut parts = input.split_whitespace();
    let x: usize = parts.next()?.parse().ok()?;
    let y: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    if x == 0 || y == 0 || x > size || y > size {
        return None;
    }
    Some(Point::new(x as i32 - 1, y as i32 - 1))
}

impl Player for CliPlayer {
    fn select_target(&mut self, _rng: &mut SmallRng, target_board: &Board) -> Point {
        let size = target_board.size();
        loop {
            print!("Enter target as column and row (1-{}): ", size);
            io::stdout().flush().unwrap();
            let mut line = String::new();
            if io::stdin().read_line(&mut line).is_err() {
                println!("Could not read input, try again.");
                continue;
            }
            match parse_coord(line.trim(), size) {
                Some(p) => return p,
                None => println!("Expected two numbers between 1 and {}.", size),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_coord;

    #[test]
    fn parses_one_indexed_pairs() {
        let p = parse_coord("3 5", 6).unwrap();
        assert_eq!((p.x, p.y), (2, 4));
    }

    #[test]
    fn rejects_non_digits_and_out_of_range() {
        assert!(parse_coord("a 5", 6).is_none());
        assert!(parse_coord("0 4", 6).is_none());
        assert!(parse_coord("7 1", 6).is_none());
        assert!(parse_coord("1", 6).is_none());
        assert!(parse_coord("1 2 3", 6).is_none());
    }
}
