//! The parallel engine: K sub-colonies on dedicated worker threads,
//! rendezvousing at a stop-aware counting barrier every communication
//! interval. The last thread to arrive acts as master: it performs the
//! ring and random exchanges and the solved scan while every peer is
//! parked on the barrier, then releases them.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use super::exchange::{apply_best_rotation, random_permutation, ring_exchange};
use super::SubColony;
use crate::board::Board;
use crate::config::SearchParams;
use crate::consts::{
    BARRIER_POLL_MS, EARLY_COMM_INTERVAL, EARLY_PHASE_END, LATE_COMM_INTERVAL, MIN_SUBCOLONIES,
};

/// Result of one engine run. `solved == false` is a search outcome,
/// not an error: the board still carries the best assignment found.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub solved: bool,
    pub board: Board,
    pub iterations: u64,
    pub elapsed: Duration,
    pub colony_stats: Vec<ColonyStats>,
}

#[derive(Debug, Clone)]
pub struct ColonyStats {
    pub id: usize,
    pub best_score: usize,
    pub iterations: u64,
    pub fail_cells: u64,
}

/// Exchange cadence: every 100 iterations while warming up, every 10
/// once past iteration 200.
pub fn comm_interval(iter: u64) -> u64 {
    if iter < EARLY_PHASE_END {
        EARLY_COMM_INTERVAL
    } else {
        LATE_COMM_INTERVAL
    }
}

/// Shared coordination block. Owned by the engine run, never global,
/// so concurrent engines cannot interfere.
struct SyncState {
    stop: AtomicBool,
    gate: Mutex<Gate>,
    cv: Condvar,
    start: Instant,
    max_time: Duration,
}

/// Barrier state under the gate mutex. The generation counter keeps a
/// worker that oversleeps a release from being counted into the next
/// round's rendezvous.
#[derive(Default)]
struct Gate {
    count: usize,
    generation: u64,
}

impl SyncState {
    fn should_stop(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }

    fn timed_out(&self) -> bool {
        self.start.elapsed() >= self.max_time
    }

    fn signal_stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
        let mut gate = self.gate.lock().unwrap();
        gate.count = 0;
        self.cv.notify_all();
    }
}

enum BarrierOutcome {
    Released,
    Stopped,
}

pub struct ParallelColonies {
    colonies: Vec<SubColony>,
    max_time: Duration,
}

impl ParallelColonies {
    /// Builds K seeded sub-colonies over copies of the puzzle. Colony i
    /// is seeded with `master_seed + i`; the master seed comes from the
    /// caller or from entropy.
    pub fn new(puzzle: Board, params: &SearchParams, seed: Option<u64>) -> Self {
        let mut k = params.subcolonies;
        if k < MIN_SUBCOLONIES {
            warn!(
                "{k} sub-colonies requested, the exchange topologies need at least \
                 {MIN_SUBCOLONIES}; running with {MIN_SUBCOLONIES}"
            );
            k = MIN_SUBCOLONIES;
        }
        let master_seed = seed.unwrap_or_else(|| fastrand::u64(..));
        let colonies = (0..k)
            .map(|i| SubColony::new(i, puzzle.clone(), params, master_seed.wrapping_add(i as u64)))
            .collect();
        ParallelColonies {
            colonies,
            max_time: params.max_time(),
        }
    }

    pub fn colony_count(&self) -> usize {
        self.colonies.len()
    }

    /// Direct access to the colonies before the run, mainly for tests
    /// and instrumentation.
    pub fn colonies_mut(&mut self) -> &mut [SubColony] {
        &mut self.colonies
    }

    /// Runs the engine to completion: solved, timed out, or stopped by
    /// a winning colony.
    pub fn run(self) -> SolveOutcome {
        let sync = SyncState {
            stop: AtomicBool::new(false),
            gate: Mutex::new(Gate::default()),
            cv: Condvar::new(),
            start: Instant::now(),
            max_time: self.max_time,
        };
        let slots: Vec<Mutex<SubColony>> = self.colonies.into_iter().map(Mutex::new).collect();

        thread::scope(|scope| {
            for idx in 0..slots.len() {
                let slots = &slots;
                let sync = &sync;
                scope.spawn(move || worker_loop(idx, slots, sync));
            }
        });

        let elapsed = sync.start.elapsed();
        let colonies: Vec<SubColony> = slots
            .into_iter()
            .map(|m| m.into_inner().unwrap())
            .collect();
        collect_outcome(colonies, elapsed)
    }
}

fn worker_loop(idx: usize, slots: &[Mutex<SubColony>], sync: &SyncState) {
    let mut iter: u64 = 1;
    loop {
        if sync.should_stop() {
            break;
        }
        if sync.timed_out() {
            sync.signal_stop();
            break;
        }

        let solved = if iter % comm_interval(iter) == 0 {
            {
                slots[idx].lock().unwrap().run_iteration();
            }
            match barrier_wait(iter, idx, slots, sync) {
                BarrierOutcome::Stopped => break,
                BarrierOutcome::Released => {
                    let mut colony = slots[idx].lock().unwrap();
                    colony.update_pheromone_with_communication();
                    colony.is_solved()
                }
            }
        } else {
            let mut colony = slots[idx].lock().unwrap();
            colony.run_iteration();
            colony.update_pheromone_standard();
            colony.decay_best_pher();
            colony.is_solved()
        };

        if solved {
            sync.signal_stop();
            break;
        }
        iter += 1;
    }
}

/// Stop-aware counting barrier. The last arrival performs the exchange
/// round and releases everyone; waiters poll the stop flag and the
/// deadline every tick, so nobody outlives a stop signal by more than
/// one tick.
fn barrier_wait(
    iter: u64,
    idx: usize,
    slots: &[Mutex<SubColony>],
    sync: &SyncState,
) -> BarrierOutcome {
    if sync.should_stop() {
        return BarrierOutcome::Stopped;
    }
    let mut gate = sync.gate.lock().unwrap();
    if sync.should_stop() {
        gate.count = 0;
        sync.cv.notify_all();
        return BarrierOutcome::Stopped;
    }
    gate.count += 1;
    if gate.count == slots.len() {
        exchange_round(iter, idx, slots, sync);
        gate.count = 0;
        gate.generation = gate.generation.wrapping_add(1);
        sync.cv.notify_all();
        BarrierOutcome::Released
    } else {
        let generation = gate.generation;
        while gate.generation == generation && !sync.should_stop() {
            let (guard, _) = sync
                .cv
                .wait_timeout(gate, Duration::from_millis(BARRIER_POLL_MS))
                .unwrap();
            gate = guard;
            if sync.timed_out() {
                sync.stop.store(true, Ordering::SeqCst);
                gate.count = 0;
                sync.cv.notify_all();
                return BarrierOutcome::Stopped;
            }
        }
        if sync.should_stop() {
            BarrierOutcome::Stopped
        } else {
            BarrierOutcome::Released
        }
    }
}

/// Master-only section. Every peer is parked on the gate, so their
/// colony locks are free and nothing else touches peer state until the
/// release.
fn exchange_round(iter: u64, master_idx: usize, slots: &[Mutex<SubColony>], sync: &SyncState) {
    let mut colonies: Vec<_> = slots.iter().map(|m| m.lock().unwrap()).collect();

    ring_exchange(&mut colonies);
    let m = random_permutation(&mut colonies[master_idx].rng, slots.len());
    apply_best_rotation(&mut colonies, &m);

    let best = colonies.iter().map(|c| c.best_score).max().unwrap_or(0);
    let num_cells = colonies[0].puzzle.num_cells();
    info!("exchange at iteration {iter}: best {best}/{num_cells} cells");

    if colonies.iter().any(|c| c.is_solved()) || sync.timed_out() {
        sync.stop.store(true, Ordering::SeqCst);
    }
}

fn collect_outcome(colonies: Vec<SubColony>, elapsed: Duration) -> SolveOutcome {
    let colony_stats: Vec<ColonyStats> = colonies
        .iter()
        .map(|c| ColonyStats {
            id: c.id,
            best_score: c.best_score,
            iterations: c.iterations,
            fail_cells: c.fail_cells,
        })
        .collect();
    let iterations = colonies.iter().map(|c| c.iterations).max().unwrap_or(0);

    // Ties go to the lowest colony id, hence the strict comparison.
    let mut best_idx = 0;
    for (i, c) in colonies.iter().enumerate() {
        if c.best_score > colonies[best_idx].best_score {
            best_idx = i;
        }
    }
    let winner = &colonies[best_idx];
    SolveOutcome {
        solved: winner.best_score == winner.puzzle.num_cells(),
        board: winner.best_sol.clone(),
        iterations,
        elapsed,
        colony_stats,
    }
}
