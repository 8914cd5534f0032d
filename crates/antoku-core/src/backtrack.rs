//! Deterministic alternative solver: minimum-remaining-values
//! backtracking with naked-single propagation, over the same board
//! type the colonies use. Doubles as a test oracle for the
//! metaheuristic.

use crate::board::Board;

/// Exact search. Returns a completed board, or `None` when the puzzle
/// has no solution.
pub fn solve(board: &Board) -> Option<Board> {
    let mut root = board.clone();
    if !propagate_singles(&mut root) {
        return None;
    }
    search(&root)
}

fn search(board: &Board) -> Option<Board> {
    if board.is_complete() {
        return Some(board.clone());
    }
    let cell = min_candidate_cell(board)?;
    for digit in board.candidates(cell) {
        let mut child = board.clone();
        child.set_cell(cell, digit);
        if propagate_singles(&mut child) {
            if let Some(solution) = search(&child) {
                return Some(solution);
            }
        }
    }
    None
}

/// Open cell with the fewest candidates. `None` only when some open
/// cell has none at all, which dead-ends the branch.
fn min_candidate_cell(board: &Board) -> Option<usize> {
    let mut pick: Option<(usize, usize)> = None;
    for cell in 0..board.num_cells() {
        if board.is_fixed(cell) {
            continue;
        }
        let len = board.candidates(cell).len();
        if len == 0 {
            return None;
        }
        match pick {
            Some((_, best)) if len >= best => {}
            _ => pick = Some((cell, len)),
        }
    }
    pick.map(|(cell, _)| cell)
}

/// Repeatedly fixes cells whose candidate set shrank to one. Returns
/// false when a cell runs out of candidates.
fn propagate_singles(board: &mut Board) -> bool {
    loop {
        let mut advanced = false;
        for cell in 0..board.num_cells() {
            if board.is_fixed(cell) {
                continue;
            }
            let cands = board.candidates(cell);
            match cands.len() {
                0 => return false,
                1 => {
                    let digit = cands.iter().next().unwrap();
                    board.set_cell(cell, digit);
                    advanced = true;
                }
                _ => {}
            }
        }
        if !advanced {
            return true;
        }
    }
}
