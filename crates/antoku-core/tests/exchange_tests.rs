//! Exchange semantics: who receives whose board under the ring and
//! random topologies.

use antoku_core::board::Board;
use antoku_core::colony::exchange::{
    apply_best_rotation, random_exchange, random_permutation, ring_exchange,
};
use antoku_core::colony::SubColony;
use antoku_core::config::SearchParams;
use fastrand::Rng;

/// Colonies whose boards carry distinguishable marks: colony i fixes
/// digit i+1 at cell i in its iteration best and at cell 9+i in its
/// best-so-far.
fn marked_colonies(k: usize) -> Vec<SubColony> {
    let puzzle = Board::empty(9).unwrap();
    let params = SearchParams {
        subcolonies: k,
        ants: 2,
        ..Default::default()
    };
    (0..k)
        .map(|i| {
            let mut colony = SubColony::new(i, puzzle.clone(), &params, 100 + i as u64);
            colony.iteration_best.set_cell(i, (i + 1) as u8);
            colony.iteration_best_score = 20 + i;
            colony.best_sol.set_cell(9 + i, (i + 1) as u8);
            colony.best_score = 40 + i;
            colony
        })
        .collect()
}

#[test]
fn ring_passes_iteration_bests_downstream() {
    let mut colonies = marked_colonies(4);
    let mut refs: Vec<&mut SubColony> = colonies.iter_mut().collect();
    ring_exchange(&mut refs);

    for i in 0..4 {
        let receiver = &colonies[(i + 1) % 4];
        assert_eq!(receiver.received_iteration_best.value(i), (i + 1) as u8);
        assert_eq!(receiver.received_iteration_best_score, 20 + i);
        // Donor boards themselves are untouched.
        assert_eq!(colonies[i].iteration_best.value(i), (i + 1) as u8);
    }
}

#[test]
fn best_rotation_follows_the_permutation() {
    let mut colonies = marked_colonies(4);
    let m = [2usize, 0, 3, 1];
    {
        let mut refs: Vec<&mut SubColony> = colonies.iter_mut().collect();
        apply_best_rotation(&mut refs, &m);
    }

    for pos in 0..4 {
        let donor = m[(pos + 3) % 4];
        let receiver = &colonies[m[pos]];
        assert_eq!(
            receiver.received_best.value(9 + donor),
            (donor + 1) as u8,
            "position {pos}"
        );
        assert_eq!(receiver.received_best_score, 40 + donor);
    }
}

#[test]
fn random_exchange_matches_a_replayed_permutation() {
    let mut colonies = marked_colonies(5);
    let mut rng = Rng::with_seed(77);
    let expected = random_permutation(&mut Rng::with_seed(77), 5);
    {
        let mut refs: Vec<&mut SubColony> = colonies.iter_mut().collect();
        random_exchange(&mut refs, &mut rng);
    }

    for pos in 0..5 {
        let donor = expected[(pos + 4) % 5];
        let receiver = &colonies[expected[pos]];
        assert_eq!(receiver.received_best_score, 40 + donor);
    }
}

#[test]
fn exchanges_snapshot_before_distributing() {
    // Even with the identity "permutation", every receiver must see the
    // donor's pre-round board, never one forwarded within the round.
    let mut colonies = marked_colonies(3);
    let m = [0usize, 1, 2];
    let mut refs: Vec<&mut SubColony> = colonies.iter_mut().collect();
    apply_best_rotation(&mut refs, &m);

    for pos in 0..3 {
        let donor = (pos + 2) % 3;
        assert_eq!(colonies[pos].received_best_score, 40 + donor);
    }
}
