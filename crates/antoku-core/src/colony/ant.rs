use fastrand::Rng;

use super::pheromone::PheromoneMatrix;
use crate::board::{Board, CandidateSet};

/// One stochastic constructor. The ant owns only its working board;
/// the trail matrix, threshold and RNG belong to the sub-colony and
/// are borrowed for the duration of a walk.
#[derive(Debug, Clone)]
pub struct Ant {
    pub sol: Board,
    pub fail_cells: u32,
}

impl Ant {
    pub fn new(puzzle: &Board) -> Self {
        Ant {
            sol: puzzle.clone(),
            fail_cells: 0,
        }
    }

    /// Builds one assignment: a wrap-around walk over all cells from a
    /// random start, fixing every open cell that still has candidates.
    /// Returns the number of cells filled.
    pub fn construct(
        &mut self,
        puzzle: &Board,
        tau: &mut PheromoneMatrix,
        q0: f64,
        rng: &mut Rng,
    ) -> usize {
        self.sol.clone_from(puzzle);
        self.fail_cells = 0;

        let num_cells = self.sol.num_cells();
        let mut cell = rng.usize(0..num_cells);
        for _ in 0..num_cells {
            if !self.sol.is_fixed(cell) {
                let cands = self.sol.candidates(cell);
                if cands.is_empty() {
                    self.fail_cells += 1;
                } else {
                    // Exploitation sits on the high side of q0: with the
                    // default q0 = 0.9, roughly one pick in ten is greedy.
                    let digit = if rng.f64() > q0 {
                        greedy_digit(tau, cell, cands)
                    } else {
                        roulette_digit(tau, cell, cands, rng)
                    };
                    self.sol.set_cell(cell, digit);
                    tau.local_update(cell, digit);
                }
            }
            cell = (cell + 1) % num_cells;
        }
        self.sol.cells_filled()
    }
}

/// Candidate with the strongest trail; ties go to the lowest digit.
fn greedy_digit(tau: &PheromoneMatrix, cell: usize, cands: CandidateSet) -> u8 {
    let mut best = 0u8;
    let mut best_trail = f64::NEG_INFINITY;
    for digit in cands {
        let trail = tau.get(cell, digit);
        if trail > best_trail {
            best_trail = trail;
            best = digit;
        }
    }
    best
}

/// Roulette wheel over the candidates' trails: the first digit whose
/// cumulative trail exceeds a uniform draw from [0, total).
fn roulette_digit(tau: &PheromoneMatrix, cell: usize, cands: CandidateSet, rng: &mut Rng) -> u8 {
    let total: f64 = cands.iter().map(|d| tau.get(cell, d)).sum();
    let target = rng.f64() * total;
    let mut cum = 0.0;
    let mut last = 0u8;
    for digit in cands {
        cum += tau.get(cell, digit);
        last = digit;
        if cum > target {
            return digit;
        }
    }
    // Floating-point slack can leave the draw unclaimed; the final
    // candidate takes it.
    last
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greedy_pick_follows_the_trail() {
        let mut tau = PheromoneMatrix::new(81, 9);
        tau.reinforce(10, 6, 0.9, 5.0);
        let cands = CandidateSet::full(9);
        assert_eq!(greedy_digit(&tau, 10, cands), 6);
    }

    #[test]
    fn greedy_tie_takes_the_lowest_digit() {
        let tau = PheromoneMatrix::new(81, 9);
        let mut cands = CandidateSet::empty();
        cands.insert(4);
        cands.insert(8);
        assert_eq!(greedy_digit(&tau, 0, cands), 4);
    }

    #[test]
    fn roulette_stays_inside_the_candidate_set() {
        let mut tau = PheromoneMatrix::new(81, 9);
        let mut rng = Rng::with_seed(99);
        let mut cands = CandidateSet::empty();
        cands.insert(2);
        cands.insert(5);
        cands.insert(9);
        tau.reinforce(7, 5, 0.9, 3.0);
        for _ in 0..200 {
            let digit = roulette_digit(&tau, 7, cands, &mut rng);
            assert!(cands.contains(digit));
        }
    }
}
