#![cfg(feature = "std")]

//! Text rendering of boards. Consumes read-only grid snapshots; never
//! touches game logic.

use crate::board::{Board, Cell};
use crate::game::{Side, TurnEngine};
use crate::point::Point;

fn cell_char(cell: Cell, reveal: bool) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Ship if reveal => 'S',
        Cell::Ship => '.',
        Cell::Hit => 'X',
        Cell::Miss => 'o',
        Cell::Buffer => 'o',
    }
}

/// Print a board with 1-indexed column and row headers. Ship cells render
/// as water unless the board's reveal flag is set.
pub fn print_board(board: &Board) {
    let size = board.size();
    print!("   ");
    for c in 0..size {
        print!(" {}", c + 1);
    }
    println!();
    for r in 0..size {
        print!("{:2} ", r + 1);
        for c in 0..size {
            let cell = board
                .cell(Point::new(c as i32, r as i32))
                .unwrap_or(Cell::Empty);
            print!(" {}", cell_char(cell, board.reveal()));
        }
        println!();
    }
}

/// Display both boards: the human's own fleet and the opposing board.
pub fn print_battle_view(engine: &TurnEngine) {
    println!("Your board:");
    print_board(engine.board(Side::Human));
    println!("\nComputer board:");
    print_board(engine.board(Side::Computer));
}
