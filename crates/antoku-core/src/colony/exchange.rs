//! Board exchange between sub-colonies.
//!
//! Both topologies snapshot the donated boards before distributing
//! them, so a board received in a round can never be re-donated within
//! the same round. The functions are generic over how the colonies are
//! reached: the engine hands them `MutexGuard`s, tests plain `&mut`.

use std::ops::DerefMut;

use fastrand::Rng;

use super::SubColony;
use crate::board::Board;

/// Ring topology: colony `(i+1) mod K` receives colony i's iteration
/// best.
pub fn ring_exchange<C: DerefMut<Target = SubColony>>(colonies: &mut [C]) {
    let k = colonies.len();
    if k < 2 {
        return;
    }
    let snapshots: Vec<(Board, usize)> = colonies
        .iter()
        .map(|c| (c.iteration_best.clone(), c.iteration_best_score))
        .collect();
    for (i, (board, score)) in snapshots.iter().enumerate() {
        colonies[(i + 1) % k].receive_iteration_best(board, *score);
    }
}

/// Random topology: draws a fresh permutation `m` and rotates the
/// best-so-far boards along it, `m[pos-1] → m[pos]`.
pub fn random_exchange<C: DerefMut<Target = SubColony>>(colonies: &mut [C], rng: &mut Rng) {
    let m = random_permutation(rng, colonies.len());
    apply_best_rotation(colonies, &m);
}

/// The donor mapping of the random topology, split out so a recorded
/// permutation can be replayed.
pub fn apply_best_rotation<C: DerefMut<Target = SubColony>>(colonies: &mut [C], m: &[usize]) {
    let k = colonies.len();
    if k < 2 {
        return;
    }
    let snapshots: Vec<(Board, usize)> = colonies
        .iter()
        .map(|c| (c.best_sol.clone(), c.best_score))
        .collect();
    for pos in 0..k {
        let donor = m[(pos + k - 1) % k];
        let (board, score) = &snapshots[donor];
        colonies[m[pos]].receive_best_sol(board, *score);
    }
}

/// Fisher–Yates permutation of 0..k.
pub fn random_permutation(rng: &mut Rng, k: usize) -> Vec<usize> {
    let mut m: Vec<usize> = (0..k).collect();
    rng.shuffle(&mut m);
    m
}
