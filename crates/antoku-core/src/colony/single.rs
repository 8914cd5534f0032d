//! The non-parallel baseline: one colony, standard global update every
//! iteration, no exchange machinery.

use std::time::{Duration, Instant};

use super::coordinator::{ColonyStats, SolveOutcome};
use super::SubColony;
use crate::board::Board;
use crate::config::SearchParams;

pub struct SingleColony {
    colony: SubColony,
    max_time: Duration,
}

impl SingleColony {
    pub fn new(puzzle: Board, params: &SearchParams, seed: Option<u64>) -> Self {
        let master_seed = seed.unwrap_or_else(|| fastrand::u64(..));
        SingleColony {
            colony: SubColony::new(0, puzzle, params, master_seed),
            max_time: params.max_time(),
        }
    }

    pub fn run(mut self) -> SolveOutcome {
        let start = Instant::now();
        let num_cells = self.colony.puzzle.num_cells();
        while self.colony.best_score < num_cells && start.elapsed() < self.max_time {
            self.colony.run_iteration();
            self.colony.update_pheromone_standard();
            self.colony.decay_best_pher();
        }
        let colony = self.colony;
        SolveOutcome {
            solved: colony.best_score == num_cells,
            board: colony.best_sol.clone(),
            iterations: colony.iterations,
            elapsed: start.elapsed(),
            colony_stats: vec![ColonyStats {
                id: colony.id,
                best_score: colony.best_score,
                iterations: colony.iterations,
                fail_cells: colony.fail_cells,
            }],
        }
    }
}
