//! Puzzle file loading.
//!
//! The format is textual: the first token is the side length (9, 16 or
//! 25), followed by side² cell tokens. `0` or `.` marks an open cell;
//! anything else must be a digit in 1..=side. Whitespace is free-form.

use std::fs;
use std::path::Path;

use crate::board::Board;
use crate::error::{AkResult, AntokuError};

const SUPPORTED_SIZES: [usize; 3] = [9, 16, 25];

pub fn load_from_file<P: AsRef<Path>>(path: P) -> AkResult<Board> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(text: &str) -> AkResult<Board> {
    let mut tokens = text.split_whitespace();
    let size_token = tokens
        .next()
        .ok_or_else(|| AntokuError::Puzzle("empty puzzle file".to_string()))?;
    let n: usize = size_token
        .parse()
        .map_err(|_| AntokuError::Puzzle(format!("bad size line '{size_token}'")))?;
    if !SUPPORTED_SIZES.contains(&n) {
        return Err(AntokuError::Puzzle(format!(
            "unsupported grid size {n}: expected one of {SUPPORTED_SIZES:?}"
        )));
    }

    let mut board = Board::empty(n)?;
    for cell in 0..n * n {
        let token = tokens.next().ok_or_else(|| {
            AntokuError::Puzzle(format!("expected {} cells, found {cell}", n * n))
        })?;
        if token == "0" || token == "." {
            continue;
        }
        let digit: u8 = token.parse().map_err(|_| {
            AntokuError::Puzzle(format!("bad cell token '{token}' at index {cell}"))
        })?;
        if digit == 0 || digit as usize > n {
            return Err(AntokuError::Puzzle(format!(
                "digit {digit} out of range 1..={n} at index {cell}"
            )));
        }
        if !board.candidates(cell).contains(digit) {
            let (row, col) = (cell / n, cell % n);
            return Err(AntokuError::Puzzle(format!(
                "given {digit} at row {row}, column {col} conflicts with an earlier given"
            )));
        }
        board.set_cell(cell, digit);
    }
    if tokens.next().is_some() {
        return Err(AntokuError::Puzzle(format!(
            "trailing tokens after {} cells",
            n * n
        )));
    }
    Ok(board)
}
