//! Linear extensions of the two-coordinate product order
//!
//! An employer's combined order ranks (own hire, affiliate's employer)
//! pairs. The two coordinate rankings induce a partial order on the cross
//! product: pair p dominates pair q when p is at least as good on both
//! coordinates and strictly better on one. A combined order is usable
//! exactly when it is a linear extension of that partial order.
//!
//! The randomized sampler here is a mixing heuristic, not a uniform
//! sampler: starting from the lexicographic extension it applies a large
//! fixed number of random adjacent transpositions, swapping two neighbours
//! only when they are incomparable. Every intermediate sequence is itself a
//! valid extension, but the resulting distribution over extensions is
//! unknown and no mixing bound is claimed. A provably-uniform sampler
//! (Markov chain with known mixing time, or direct counting) can replace
//! [`mix`] behind the same signature if statistical correctness matters.

use crate::models::employer::OutcomePair;
use crate::rng::RngManager;

/// Number of full passes worth of random adjacent transpositions applied by
/// [`mix`]. Chosen large relative to the sequence length; mixing quality is
/// heuristic either way.
pub const MIXING_SWEEPS: usize = 100;

/// Lexicographic (own-major) cross product of two coordinate rankings.
///
/// Always a valid linear extension: the affiliate ranking is subordinate to
/// the own ranking.
pub fn lexicographic_product(
    own_prefs: &[usize],
    aff_prefs: &[usize],
) -> Vec<OutcomePair> {
    let mut order = Vec::with_capacity(own_prefs.len() * aff_prefs.len());
    for &a in own_prefs {
        for &e in aff_prefs {
            order.push((a, e));
        }
    }
    order
}

/// True iff the two pairs are incomparable in the product order, i.e. the
/// coordinate rankings disagree about them. Adjacent incomparable pairs may
/// be swapped without leaving the set of linear extensions.
fn incomparable(p: OutcomePair, q: OutcomePair, own_rank: &[usize], aff_rank: &[usize]) -> bool {
    let own = own_rank[p.0].cmp(&own_rank[q.0]);
    let aff = aff_rank[p.1].cmp(&aff_rank[q.1]);
    own == aff.reverse() && !own.is_eq()
}

/// Scramble a linear extension in place with random adjacent transpositions.
///
/// Each step picks a random adjacent position and swaps it exactly when the
/// two pairs are incomparable, so the sequence remains a valid extension
/// after every step. See the module docs for the distributional caveat.
pub fn mix(
    order: &mut [OutcomePair],
    own_rank: &[usize],
    aff_rank: &[usize],
    rng: &mut RngManager,
) {
    if order.len() < 2 {
        return;
    }
    let steps = MIXING_SWEEPS * order.len();
    for _ in 0..steps {
        let j = rng.index(order.len() - 1);
        if incomparable(order[j], order[j + 1], own_rank, aff_rank) {
            order.swap(j, j + 1);
        }
    }
}

/// First violation of the extension property, as (earlier, later) pairs
/// where the later pair dominates the earlier one. `None` means the order
/// is a valid linear extension.
///
/// Quadratic in the order length; only used at validation time.
pub fn first_violation(
    order: &[OutcomePair],
    own_rank: &[usize],
    aff_rank: &[usize],
) -> Option<(OutcomePair, OutcomePair)> {
    for (i, &earlier) in order.iter().enumerate() {
        for &later in &order[i + 1..] {
            let own_le = own_rank[later.0] <= own_rank[earlier.0];
            let aff_le = aff_rank[later.1] <= aff_rank[earlier.1];
            if own_le && aff_le && later != earlier {
                return Some((earlier, later));
            }
        }
    }
    None
}

/// Is `order` a linear extension of the product order given by the two
/// coordinate rank tables?
pub fn is_linear_extension(
    order: &[OutcomePair],
    own_rank: &[usize],
    aff_rank: &[usize],
) -> bool {
    first_violation(order, own_rank, aff_rank).is_none()
}
