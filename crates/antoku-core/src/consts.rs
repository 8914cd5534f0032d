/// Fraction of the old trail an ant's local update keeps; the rest is
/// pulled back toward the initial trail level.
pub const LOCAL_TRAIL_RETAIN: f64 = 0.9;

/// Reinforcement value standing in for a completely filled board. The
/// real formula divides by zero there; the solved flag pre-empts any
/// further use of the value.
pub const SOLVED_REINFORCEMENT: f64 = 1e12;

/// Tick of the barrier wait. Bounds how long a parked worker can miss
/// a stop signal or a passed deadline.
pub const BARRIER_POLL_MS: u64 = 100;

/// Exchange cadence while the search is still warming up (iterations
/// below [`EARLY_PHASE_END`]).
pub const EARLY_COMM_INTERVAL: u64 = 100;

/// Exchange cadence once the early phase is over.
pub const LATE_COMM_INTERVAL: u64 = 10;

/// First iteration at which the late cadence applies.
pub const EARLY_PHASE_END: u64 = 200;

/// Both exchange topologies degenerate below three sub-colonies.
pub const MIN_SUBCOLONIES: usize = 3;
