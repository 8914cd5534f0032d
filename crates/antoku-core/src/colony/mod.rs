pub mod ant;
pub mod coordinator;
pub mod exchange;
pub mod pheromone;
pub mod single;

pub use ant::Ant;
pub use coordinator::{ColonyStats, ParallelColonies, SolveOutcome};
pub use single::SingleColony;

use fastrand::Rng;

use crate::board::{Board, CandidateSet};
use crate::config::SearchParams;
use pheromone::{reinforcement, PheromoneMatrix};

/// One independent ant colony: its ants, trail matrix and RNG all live
/// on a single worker thread, so iteration work never contends.
pub struct SubColony {
    pub id: usize,
    pub puzzle: Board,
    pub ants: Vec<Ant>,
    pub tau: PheromoneMatrix,

    pub q0: f64,
    pub rho: f64,
    pub rho_comm: f64,
    pub best_evap: f64,

    pub iteration_best: Board,
    pub iteration_best_score: usize,

    /// Best board ever accepted, together with its score and the trail
    /// value it earned. All three update as a unit; the trail value
    /// then decays every non-communication iteration.
    pub best_sol: Board,
    pub best_score: usize,
    pub best_pher: f64,

    pub received_iteration_best: Board,
    pub received_iteration_best_score: usize,
    pub received_best: Board,
    pub received_best_score: usize,

    pub rng: Rng,
    pub fail_cells: u64,
    pub iterations: u64,
}

impl SubColony {
    pub fn new(id: usize, puzzle: Board, params: &SearchParams, seed: u64) -> Self {
        let num_cells = puzzle.num_cells();
        let givens = puzzle.cells_filled();
        let ants = (0..params.ants.max(1)).map(|_| Ant::new(&puzzle)).collect();
        SubColony {
            id,
            ants,
            tau: PheromoneMatrix::new(num_cells, puzzle.n()),
            q0: params.q0,
            rho: params.rho,
            rho_comm: params.rhocomm,
            best_evap: params.evap,
            iteration_best: puzzle.clone(),
            iteration_best_score: givens,
            best_sol: puzzle.clone(),
            best_score: givens,
            best_pher: reinforcement(num_cells, givens),
            received_iteration_best: puzzle.clone(),
            received_iteration_best_score: givens,
            received_best: puzzle.clone(),
            received_best_score: givens,
            rng: Rng::with_seed(seed),
            puzzle,
            fail_cells: 0,
            iterations: 0,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.best_score == self.puzzle.num_cells()
    }

    /// One ACS iteration: every ant constructs an assignment, the best
    /// one becomes the iteration best, and the best-so-far is revised
    /// under the trail-value criterion.
    pub fn run_iteration(&mut self) {
        self.iterations += 1;

        let puzzle = &self.puzzle;
        let tau = &mut self.tau;
        let rng = &mut self.rng;
        let q0 = self.q0;

        let mut best_idx = 0;
        let mut best_filled = 0;
        for (idx, ant) in self.ants.iter_mut().enumerate() {
            let filled = ant.construct(puzzle, tau, q0, rng);
            if idx == 0 || filled > best_filled {
                best_idx = idx;
                best_filled = filled;
            }
        }
        self.fail_cells += self
            .ants
            .iter()
            .map(|ant| ant.fail_cells as u64)
            .sum::<u64>();

        self.iteration_best.clone_from(&self.ants[best_idx].sol);
        self.iteration_best_score = best_filled;

        // Acceptance compares trail values, not raw scores: best_pher
        // decays between improvements, so an old high-score board can
        // eventually lose to a fresher, lower-score one.
        let value = reinforcement(self.puzzle.num_cells(), best_filled);
        if value > self.best_pher {
            self.best_sol.clone_from(&self.iteration_best);
            self.best_score = best_filled;
            self.best_pher = value;
        }
    }

    /// Non-communication global update: every pair fixed in the best
    /// board is pulled toward `best_pher`; nothing else is touched.
    pub fn update_pheromone_standard(&mut self) {
        let tau = &mut self.tau;
        for cell in 0..self.best_sol.num_cells() {
            let digit = self.best_sol.value(cell);
            if digit != 0 {
                tau.reinforce(cell, digit, self.rho, self.best_pher);
            }
        }
    }

    pub fn decay_best_pher(&mut self) {
        self.best_pher *= 1.0 - self.best_evap;
    }

    /// Communication-iteration update, replacing the standard one: the
    /// own iteration best and both received boards each deposit their
    /// reinforcement value on the pairs they fix; a pair fixed by
    /// several sources collects the sum. Pairs fixed by no source are
    /// left untouched, and `best_pher` is not decayed here.
    pub fn update_pheromone_with_communication(&mut self) {
        let num_cells = self.puzzle.num_cells();
        let tau = &mut self.tau;
        let sources = [
            (&self.iteration_best, self.iteration_best_score),
            (
                &self.received_iteration_best,
                self.received_iteration_best_score,
            ),
            (&self.received_best, self.received_best_score),
        ];
        let values = sources.map(|(_, score)| {
            if score > 0 {
                reinforcement(num_cells, score)
            } else {
                0.0
            }
        });

        let mut contrib = vec![0.0f64; self.puzzle.n()];
        for cell in 0..num_cells {
            let mut touched = CandidateSet::empty();
            for (k, (board, _)) in sources.iter().enumerate() {
                let digit = board.value(cell);
                if digit != 0 {
                    contrib[(digit - 1) as usize] += values[k];
                    touched.insert(digit);
                }
            }
            for digit in touched {
                let slot = &mut contrib[(digit - 1) as usize];
                tau.blend(cell, digit, self.rho_comm, *slot);
                *slot = 0.0;
            }
        }
    }

    /// Stores a peer's iteration best. Only the received slot changes;
    /// local best tracking is deliberately left alone.
    pub fn receive_iteration_best(&mut self, board: &Board, score: usize) {
        self.received_iteration_best.clone_from(board);
        self.received_iteration_best_score = score;
    }

    /// Stores a peer's best-so-far. Same contract as
    /// [`receive_iteration_best`](Self::receive_iteration_best).
    pub fn receive_best_sol(&mut self, board: &Board, score: usize) {
        self.received_best.clone_from(board);
        self.received_best_score = score;
    }
}
