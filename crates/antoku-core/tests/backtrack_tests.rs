mod common;

use antoku_core::{backtrack, puzzle};
use common::*;

#[test]
fn completes_an_easy_grid() {
    let board = puzzle::parse(&partial_grid_text(9, |cell| cell % 4 != 0)).unwrap();
    let solution = backtrack::solve(&board).unwrap();

    assert!(is_valid_solution(&solution));
    for cell in 0..81 {
        if board.is_fixed(cell) {
            assert_eq!(solution.value(cell), board.value(cell));
        }
    }
}

#[test]
fn solves_a_hard_17_clue_style_puzzle() {
    let text = "9\n\
                8 0 0 0 0 0 0 0 0\n\
                0 0 3 6 0 0 0 0 0\n\
                0 7 0 0 9 0 2 0 0\n\
                0 5 0 0 0 7 0 0 0\n\
                0 0 0 0 4 5 7 0 0\n\
                0 0 0 1 0 0 0 3 0\n\
                0 0 1 0 0 0 0 6 8\n\
                0 0 8 5 0 0 0 1 0\n\
                0 9 0 0 0 0 4 0 0\n";
    let board = puzzle::parse(text).unwrap();
    let solution = backtrack::solve(&board).unwrap();

    assert!(is_valid_solution(&solution));
    assert_eq!(solution.value(0), 8);
}

#[test]
fn reports_unsolvable_puzzles() {
    // Row 0 leaves only 9 for its last cell, while column 8 already
    // holds a 9 below: consistent givens, no completion.
    let text = "9\n\
                1 2 3 4 5 6 7 8 0\n\
                0 0 0 0 0 0 0 0 9\n\
                0 0 0 0 0 0 0 0 0\n\
                0 0 0 0 0 0 0 0 0\n\
                0 0 0 0 0 0 0 0 0\n\
                0 0 0 0 0 0 0 0 0\n\
                0 0 0 0 0 0 0 0 0\n\
                0 0 0 0 0 0 0 0 0\n\
                0 0 0 0 0 0 0 0 0\n";
    let board = puzzle::parse(text).unwrap();
    assert!(backtrack::solve(&board).is_none());
}

#[test]
fn complete_boards_come_back_unchanged() {
    let board = solved_board(16);
    let solution = backtrack::solve(&board).unwrap();
    assert_eq!(solution, board);
}
