use std::fmt;

use itertools::Itertools;

use crate::error::{AkResult, AntokuError};

/// Set of digits still allowed in one cell, as a bitmask (bit d-1 for
/// digit d). Supports grids up to 32 digits; the loader caps at 25.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CandidateSet(u32);

impl CandidateSet {
    pub fn empty() -> Self {
        CandidateSet(0)
    }

    /// All digits 1..=n.
    pub fn full(n: usize) -> Self {
        debug_assert!(n >= 1 && n <= 32);
        CandidateSet(if n == 32 { u32::MAX } else { (1u32 << n) - 1 })
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn contains(self, digit: u8) -> bool {
        self.0 & (1 << (digit - 1)) != 0
    }

    #[inline]
    pub fn insert(&mut self, digit: u8) {
        self.0 |= 1 << (digit - 1);
    }

    #[inline]
    pub fn remove(&mut self, digit: u8) {
        self.0 &= !(1 << (digit - 1));
    }

    /// Digits in ascending order.
    pub fn iter(self) -> Digits {
        Digits(self.0)
    }
}

impl IntoIterator for CandidateSet {
    type Item = u8;
    type IntoIter = Digits;

    fn into_iter(self) -> Digits {
        Digits(self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Digits(u32);

impl Iterator for Digits {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.0 == 0 {
            return None;
        }
        let bit = self.0.trailing_zeros();
        self.0 &= self.0 - 1;
        Some(bit as u8 + 1)
    }
}

/// An n×n grid with √n×√n subgrids. Every cell is either fixed to a
/// digit or carries the candidate set implied by its fixed peers.
/// Fixing a cell removes the digit from all row/column/subgrid peers;
/// candidates are never restored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    n: usize,
    sub: usize,
    values: Vec<u8>,
    cands: Vec<CandidateSet>,
    filled: usize,
}

impl Board {
    /// A board with no givens. `n` must be a perfect square (the file
    /// loader further restricts sizes to 9, 16 and 25).
    pub fn empty(n: usize) -> AkResult<Self> {
        let sub = (n as f64).sqrt() as usize;
        if n == 0 || n > 25 || sub * sub != n {
            return Err(AntokuError::Puzzle(format!(
                "unsupported grid size {n}: the side must be a perfect square up to 25"
            )));
        }
        Ok(Board {
            n,
            sub,
            values: vec![0; n * n],
            cands: vec![CandidateSet::full(n); n * n],
            filled: 0,
        })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn sub_side(&self) -> usize {
        self.sub
    }

    pub fn num_cells(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_fixed(&self, cell: usize) -> bool {
        self.values[cell] != 0
    }

    /// The fixed digit at `cell`, or 0 if the cell is open.
    #[inline]
    pub fn value(&self, cell: usize) -> u8 {
        self.values[cell]
    }

    #[inline]
    pub fn candidates(&self, cell: usize) -> CandidateSet {
        self.cands[cell]
    }

    pub fn cells_filled(&self) -> usize {
        self.filled
    }

    pub fn is_complete(&self) -> bool {
        self.filled == self.values.len()
    }

    /// Fixes `digit` at `cell` and eliminates it from every peer's
    /// candidate set. Callers must pick from `candidates(cell)`;
    /// anything else is a bug in the caller, not bad input.
    pub fn set_cell(&mut self, cell: usize, digit: u8) {
        assert!(
            !self.is_fixed(cell) && self.cands[cell].contains(digit),
            "set_cell: digit {digit} is not a candidate of cell {cell}"
        );
        self.values[cell] = digit;
        self.cands[cell] = CandidateSet::empty();
        self.filled += 1;

        let n = self.n;
        let (row, col) = (cell / n, cell % n);
        for c in 0..n {
            self.cands[row * n + c].remove(digit);
        }
        for r in 0..n {
            self.cands[r * n + col].remove(digit);
        }
        let (br, bc) = (row - row % self.sub, col - col % self.sub);
        for r in br..br + self.sub {
            for c in bc..bc + self.sub {
                self.cands[r * n + c].remove(digit);
            }
        }
    }
}

impl fmt::Display for Board {
    /// The file format: a size line, then one line per row, open cells
    /// as 0.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.n)?;
        let width = if self.n >= 10 { 2 } else { 1 };
        for row in 0..self.n {
            let line = (0..self.n)
                .map(|col| format!("{:>width$}", self.values[row * self.n + col]))
                .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
