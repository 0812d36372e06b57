//! Employer model
//!
//! An employer carries three rankings:
//! - `own_prefs`: who it wants to hire, over all applicants
//! - `aff_prefs`: who it wants to employ its affiliate, over all employers
//! - a combined order over the full (own hire, affiliate's employer) cross
//!   product, synthesized after construction
//!
//! The affiliate is a single fixed applicant assigned at construction. Its
//! eventual match contributes to the employer's utility through the combined
//! order, which must be a linear extension of the product partial order:
//! entries sharing an applicant follow `aff_prefs`, entries sharing an
//! employer follow `own_prefs`.
//!
//! All three rankings are backed by memoized rank tables so that preference
//! comparisons are O(1).

use serde::{Deserialize, Serialize};

use super::{is_permutation, rank_table, ApplicantId, EmployerId, ValidationError};

/// A (own hire, affiliate's employer) outcome pair, as ranked by an
/// employer's combined preference order
pub type OutcomePair = (ApplicantId, EmployerId);

/// An employer, its affiliate, and its rankings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employer {
    /// Registration index within the instance
    id: EmployerId,

    /// The one applicant whose match also matters to this employer
    affiliate: ApplicantId,

    /// Strict total order over all applicants, most-preferred first
    own_prefs: Vec<ApplicantId>,

    /// own_rank[a] = position of applicant a in `own_prefs`
    own_rank: Vec<usize>,

    /// Strict total order over all employers, ranking who should employ the
    /// affiliate, most-preferred first
    aff_prefs: Vec<EmployerId>,

    /// aff_rank[e] = position of employer e in `aff_prefs`
    aff_rank: Vec<usize>,

    /// Combined order over the full own × affiliate cross product.
    /// Empty until synthesized.
    combined: Vec<OutcomePair>,

    /// combined_rank[a * n_employers + e] = position of (a, e) in `combined`.
    /// Empty until synthesized.
    combined_rank: Vec<usize>,
}

impl Employer {
    /// Create an employer from its affiliate and coordinate rankings.
    ///
    /// Both rankings must be permutations of their id ranges. The combined
    /// order starts out unset; see [`Employer::set_combined_order`].
    pub fn new(
        id: EmployerId,
        affiliate: ApplicantId,
        own_prefs: Vec<ApplicantId>,
        aff_prefs: Vec<EmployerId>,
    ) -> Result<Self, ValidationError> {
        if !is_permutation(&own_prefs) {
            return Err(ValidationError::OwnRankingNotPermutation { employer: id });
        }
        if !is_permutation(&aff_prefs) {
            return Err(ValidationError::AffiliateRankingNotPermutation { employer: id });
        }
        let own_rank = rank_table(&own_prefs);
        let aff_rank = rank_table(&aff_prefs);
        Ok(Self {
            id,
            affiliate,
            own_prefs,
            own_rank,
            aff_prefs,
            aff_rank,
            combined: Vec::new(),
            combined_rank: Vec::new(),
        })
    }

    pub fn id(&self) -> EmployerId {
        self.id
    }

    /// The applicant linked to this employer at construction
    pub fn affiliate(&self) -> ApplicantId {
        self.affiliate
    }

    /// Ranking over applicants, most-preferred first
    pub fn own_prefs(&self) -> &[ApplicantId] {
        &self.own_prefs
    }

    /// Ranking over the affiliate's potential employers, most-preferred first
    pub fn aff_prefs(&self) -> &[EmployerId] {
        &self.aff_prefs
    }

    /// Combined order over outcome pairs; empty until synthesized
    pub fn combined_prefs(&self) -> &[OutcomePair] {
        &self.combined
    }

    pub fn has_combined_order(&self) -> bool {
        !self.combined.is_empty()
    }

    /// Position of an applicant in `own_prefs`, or `None` if out of range
    pub fn own_rank_of(&self, applicant: ApplicantId) -> Option<usize> {
        self.own_rank.get(applicant).copied()
    }

    /// Position of an employer in `aff_prefs`, or `None` if out of range
    pub fn aff_rank_of(&self, employer: EmployerId) -> Option<usize> {
        self.aff_rank.get(employer).copied()
    }

    pub(crate) fn own_rank_table(&self) -> &[usize] {
        &self.own_rank
    }

    pub(crate) fn aff_rank_table(&self) -> &[usize] {
        &self.aff_rank
    }

    /// Does this employer strictly prefer hiring `a1` over `a2`, ignoring the
    /// affiliate?
    ///
    /// Ids must be valid for the owning instance; out-of-range ids panic.
    pub fn prefers_applicant(&self, a1: ApplicantId, a2: ApplicantId) -> bool {
        self.own_rank[a1] < self.own_rank[a2]
    }

    /// Position of an outcome pair in the combined order (lower = preferred)
    ///
    /// # Panics
    /// Panics if the combined order has not been synthesized or an id is out
    /// of range. Both are invariant breaches on a validated instance.
    pub fn combined_rank_of(&self, pair: OutcomePair) -> usize {
        assert!(
            !self.combined_rank.is_empty(),
            "combined order not synthesized for employer {}",
            self.id
        );
        let (applicant, employer) = pair;
        self.combined_rank[applicant * self.aff_prefs.len() + employer]
    }

    /// Does this employer strictly prefer outcome `p1` to outcome `p2`,
    /// comparing (own hire, affiliate's employer) pairs by combined rank?
    pub fn prefers_outcome(&self, p1: OutcomePair, p2: OutcomePair) -> bool {
        self.combined_rank_of(p1) < self.combined_rank_of(p2)
    }

    /// Install a combined preference order.
    ///
    /// The order must cover the own × affiliate cross product exactly once
    /// and be a linear extension of the product partial order. On success the
    /// rank table is rebuilt; on failure the previous order is left in place.
    pub fn set_combined_order(&mut self, order: Vec<OutcomePair>) -> Result<(), ValidationError> {
        self.check_combined_candidate(&order)?;

        let n_employers = self.aff_prefs.len();
        let mut rank = vec![0; self.own_prefs.len() * n_employers];
        for (pos, &(a, e)) in order.iter().enumerate() {
            rank[a * n_employers + e] = pos;
        }
        self.combined = order;
        self.combined_rank = rank;
        Ok(())
    }

    /// Re-check the installed combined order (used by instance validation)
    pub fn verify_combined_order(&self) -> Result<(), ValidationError> {
        if self.combined.is_empty() {
            return Err(ValidationError::CombinedOrderMissing { employer: self.id });
        }
        self.check_combined_candidate(&self.combined)
    }

    /// Cross-product completeness and linear-extension checks for a candidate
    /// combined order.
    fn check_combined_candidate(&self, order: &[OutcomePair]) -> Result<(), ValidationError> {
        let n_applicants = self.own_prefs.len();
        let n_employers = self.aff_prefs.len();
        let expected = n_applicants * n_employers;

        if order.len() != expected {
            return Err(ValidationError::CombinedOrderIncomplete {
                employer: self.id,
                expected,
                actual: order.len(),
            });
        }

        let mut seen = vec![false; expected];
        for &(a, e) in order {
            if a >= n_applicants || e >= n_employers {
                // Out-of-range pairs cannot be part of the cross product
                return Err(ValidationError::CombinedOrderIncomplete {
                    employer: self.id,
                    expected,
                    actual: order.len(),
                });
            }
            let slot = a * n_employers + e;
            if seen[slot] {
                return Err(ValidationError::CombinedOrderDuplicate {
                    employer: self.id,
                    applicant: a,
                    aff_employer: e,
                });
            }
            seen[slot] = true;
        }

        if let Some((earlier, later)) =
            crate::prefs::extension::first_violation(order, &self.own_rank, &self.aff_rank)
        {
            return Err(ValidationError::CombinedOrderNotExtension {
                employer: self.id,
                earlier_applicant: earlier.0,
                earlier_employer: earlier.1,
                later_applicant: later.0,
                later_employer: later.1,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> Employer {
        Employer::new(0, 0, vec![0, 1], vec![1, 0]).unwrap()
    }

    #[test]
    fn test_new_rejects_non_permutation() {
        assert_eq!(
            Employer::new(1, 0, vec![0, 0], vec![0, 1]),
            Err(ValidationError::OwnRankingNotPermutation { employer: 1 })
        );
        assert_eq!(
            Employer::new(1, 0, vec![0, 1], vec![2, 1]),
            Err(ValidationError::AffiliateRankingNotPermutation { employer: 1 })
        );
    }

    #[test]
    fn test_set_combined_order_lexicographic() {
        let mut emp = two_by_two();
        // own-major cross product of own [0, 1] and aff [1, 0]
        let order = vec![(0, 1), (0, 0), (1, 1), (1, 0)];
        emp.set_combined_order(order.clone()).unwrap();

        assert_eq!(emp.combined_prefs(), &order[..]);
        assert_eq!(emp.combined_rank_of((0, 1)), 0);
        assert_eq!(emp.combined_rank_of((1, 0)), 3);
        assert!(emp.prefers_outcome((0, 0), (1, 1)));
    }

    #[test]
    fn test_set_combined_order_rejects_incomplete() {
        let mut emp = two_by_two();
        let err = emp.set_combined_order(vec![(0, 0), (1, 1)]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::CombinedOrderIncomplete {
                employer: 0,
                expected: 4,
                actual: 2
            }
        );
    }

    #[test]
    fn test_set_combined_order_rejects_duplicate() {
        let mut emp = two_by_two();
        let err = emp
            .set_combined_order(vec![(0, 1), (0, 0), (0, 1), (1, 0)])
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::CombinedOrderDuplicate {
                employer: 0,
                applicant: 0,
                aff_employer: 1
            }
        );
    }

    #[test]
    fn test_set_combined_order_rejects_extension_violation() {
        let mut emp = two_by_two();
        // (1, 0) is dominated by (0, 0) on the own coordinate and equal on
        // the affiliate coordinate, so it must come after (0, 0)
        let err = emp
            .set_combined_order(vec![(1, 0), (0, 0), (0, 1), (1, 1)])
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::CombinedOrderNotExtension { employer: 0, .. }
        ));
    }

    #[test]
    fn test_verify_combined_order_missing() {
        let emp = two_by_two();
        assert_eq!(
            emp.verify_combined_order(),
            Err(ValidationError::CombinedOrderMissing { employer: 0 })
        );
    }

    #[test]
    #[should_panic(expected = "combined order not synthesized")]
    fn test_combined_rank_of_unset_panics() {
        let emp = two_by_two();
        emp.combined_rank_of((0, 0));
    }
}
