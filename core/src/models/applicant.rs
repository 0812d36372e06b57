//! Applicant model
//!
//! An applicant carries a strict, complete ranking over all employers.
//! The ranking is fixed at construction; a memoized inverse rank table makes
//! preference comparisons O(1) instead of a linear search through the list.

use serde::{Deserialize, Serialize};

use super::{is_permutation, rank_table, ApplicantId, EmployerId, ValidationError};

/// An applicant and its ranking over employers (most-preferred first)
///
/// # Example
/// ```
/// use affiliate_matching_core::Applicant;
///
/// let app = Applicant::new(0, vec![1, 0, 2]).unwrap();
/// assert!(app.prefers(1, 2)); // employer 1 is ranked above employer 2
/// assert_eq!(app.rank_of(0), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    /// Registration index within the instance
    id: ApplicantId,

    /// Strict total order over all employers, most-preferred first
    prefs: Vec<EmployerId>,

    /// rank[e] = position of employer e in `prefs` (lower = preferred)
    rank: Vec<usize>,
}

impl Applicant {
    /// Create an applicant from its employer ranking.
    ///
    /// `prefs` must be a permutation of `0..prefs.len()`; anything else is a
    /// malformed ranking and is rejected immediately.
    pub fn new(id: ApplicantId, prefs: Vec<EmployerId>) -> Result<Self, ValidationError> {
        if !is_permutation(&prefs) {
            return Err(ValidationError::ApplicantRankingNotPermutation { applicant: id });
        }
        let rank = rank_table(&prefs);
        Ok(Self { id, prefs, rank })
    }

    pub fn id(&self) -> ApplicantId {
        self.id
    }

    /// Ranking over employers, most-preferred first
    pub fn prefs(&self) -> &[EmployerId] {
        &self.prefs
    }

    /// Position of an employer in this applicant's ranking (lower = preferred),
    /// or `None` if the id is out of range
    pub fn rank_of(&self, employer: EmployerId) -> Option<usize> {
        self.rank.get(employer).copied()
    }

    /// Does this applicant strictly prefer `e1` to `e2`?
    ///
    /// Both ids must be valid for the instance the applicant belongs to;
    /// out-of-range ids are an invariant breach and panic.
    pub fn prefers(&self, e1: EmployerId, e2: EmployerId) -> bool {
        self.rank[e1] < self.rank[e2]
    }
}
