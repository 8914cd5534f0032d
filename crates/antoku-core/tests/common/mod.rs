#![allow(dead_code)]

use antoku_core::board::Board;
use antoku_core::puzzle;

/// Digit of the cyclic reference solution at (row, col): shifting each
/// band row by the subgrid side yields a valid grid for any n.
pub fn cyclic_digit(n: usize, row: usize, col: usize) -> u8 {
    let sub = (n as f64).sqrt() as usize;
    ((row * sub + row / sub + col) % n + 1) as u8
}

/// The full cyclic solution as puzzle text.
pub fn full_grid_text(n: usize) -> String {
    partial_grid_text(n, |_| true)
}

/// Puzzle text keeping only the cells `keep` selects from the cyclic
/// solution; the rest are 0.
pub fn partial_grid_text(n: usize, keep: impl Fn(usize) -> bool) -> String {
    let mut text = format!("{n}\n");
    for row in 0..n {
        let line: Vec<String> = (0..n)
            .map(|col| {
                let cell = row * n + col;
                if keep(cell) {
                    cyclic_digit(n, row, col).to_string()
                } else {
                    "0".to_string()
                }
            })
            .collect();
        text.push_str(&line.join(" "));
        text.push('\n');
    }
    text
}

pub fn solved_board(n: usize) -> Board {
    puzzle::parse(&full_grid_text(n)).unwrap()
}

/// True when the board is complete and every row, column and subgrid
/// holds each digit exactly once.
pub fn is_valid_solution(board: &Board) -> bool {
    let n = board.n();
    let sub = board.sub_side();
    if !board.is_complete() {
        return false;
    }
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for row in 0..n {
        groups.push((0..n).map(|col| row * n + col).collect());
    }
    for col in 0..n {
        groups.push((0..n).map(|row| row * n + col).collect());
    }
    for band in (0..n).step_by(sub) {
        for stack in (0..n).step_by(sub) {
            let mut cells = Vec::new();
            for r in band..band + sub {
                for c in stack..stack + sub {
                    cells.push(r * n + c);
                }
            }
            groups.push(cells);
        }
    }
    groups.iter().all(|cells| {
        let mut seen = vec![false; n + 1];
        cells.iter().all(|&cell| {
            let v = board.value(cell) as usize;
            v != 0 && !std::mem::replace(&mut seen[v], true)
        })
    })
}

/// Row, column and subgrid peers of a cell on a 9×9 grid.
pub fn peers_of_9(cell: usize) -> Vec<usize> {
    let (row, col) = (cell / 9, cell % 9);
    let mut peers = Vec::new();
    for c in 0..9 {
        peers.push(row * 9 + c);
    }
    for r in 0..9 {
        peers.push(r * 9 + col);
    }
    let (br, bc) = (row - row % 3, col - col % 3);
    for r in br..br + 3 {
        for c in bc..bc + 3 {
            peers.push(r * 9 + c);
        }
    }
    peers.retain(|&p| p != cell);
    peers.sort_unstable();
    peers.dedup();
    peers
}
