//! Domain types for matching instances
//!
//! An instance is a registry of applicants and employers with strict,
//! complete preference rankings. Agents are referred to by stable numeric
//! handles (their registration index), so every "does X prefer A over B"
//! question is an O(1) rank-table lookup.
//!
//! # Critical Invariants
//!
//! 1. Every ranking is a permutation of the full opposite population
//! 2. The employer/affiliate linkage is a bijection
//! 3. Every combined preference order is a linear extension of the product
//!    order induced by its two coordinate rankings
//! 4. A `Matching` is always a bijection; its two directions are inverses
//!    by construction

use thiserror::Error;

pub mod applicant;
pub mod employer;
pub mod event;
pub mod instance;
pub mod matching;

pub use applicant::Applicant;
pub use employer::Employer;
pub use event::{Event, EventLog};
pub use instance::{Instance, LookupError};
pub use matching::{Matching, MatchingError};

/// Stable numeric handle of an applicant (its registration index)
pub type ApplicantId = usize;

/// Stable numeric handle of an employer (its registration index)
pub type EmployerId = usize;

/// Violation of a data-model invariant, surfaced at validation time.
///
/// Any of these is fatal for the instance: the matching and stability
/// algorithms assume the invariants unconditionally.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("instance must contain at least one applicant and one employer")]
    EmptyInstance,

    #[error("applicant registered at index {expected} has id {actual}")]
    ApplicantIdMismatch { expected: usize, actual: usize },

    #[error("employer registered at index {expected} has id {actual}")]
    EmployerIdMismatch { expected: usize, actual: usize },

    #[error("applicant {applicant} ranking is not a permutation of the employer ids")]
    ApplicantRankingNotPermutation { applicant: ApplicantId },

    #[error("employer {employer} own ranking is not a permutation of the applicant ids")]
    OwnRankingNotPermutation { employer: EmployerId },

    #[error("employer {employer} affiliate ranking is not a permutation of the employer ids")]
    AffiliateRankingNotPermutation { employer: EmployerId },

    #[error("applicant {applicant} ranking has length {actual}, expected {expected}")]
    ApplicantRankingLength {
        applicant: ApplicantId,
        actual: usize,
        expected: usize,
    },

    #[error("employer {employer} own ranking has length {actual}, expected {expected}")]
    OwnRankingLength {
        employer: EmployerId,
        actual: usize,
        expected: usize,
    },

    #[error("employer {employer} affiliate ranking has length {actual}, expected {expected}")]
    AffiliateRankingLength {
        employer: EmployerId,
        actual: usize,
        expected: usize,
    },

    #[error("employer {employer} affiliate {affiliate} is out of range ({n_applicants} applicants)")]
    AffiliateOutOfRange {
        employer: EmployerId,
        affiliate: ApplicantId,
        n_applicants: usize,
    },

    #[error("applicant {applicant} is the affiliate of {count} employers, expected exactly 1")]
    AffiliationNotBijective { applicant: ApplicantId, count: usize },

    #[error("employer {employer} has no combined preference order")]
    CombinedOrderMissing { employer: EmployerId },

    #[error(
        "employer {employer} combined order has {actual} entries, expected the full cross product of {expected}"
    )]
    CombinedOrderIncomplete {
        employer: EmployerId,
        expected: usize,
        actual: usize,
    },

    #[error("employer {employer} combined order lists pair ({applicant}, {aff_employer}) more than once")]
    CombinedOrderDuplicate {
        employer: EmployerId,
        applicant: ApplicantId,
        aff_employer: EmployerId,
    },

    #[error(
        "employer {employer} combined order places ({later_applicant}, {later_employer}) after \
         ({earlier_applicant}, {earlier_employer}) although it is preferred on both coordinates"
    )]
    CombinedOrderNotExtension {
        employer: EmployerId,
        earlier_applicant: ApplicantId,
        earlier_employer: EmployerId,
        later_applicant: ApplicantId,
        later_employer: EmployerId,
    },
}

/// True iff `xs` contains each of `0..xs.len()` exactly once.
pub(crate) fn is_permutation(xs: &[usize]) -> bool {
    let n = xs.len();
    let mut seen = vec![false; n];
    for &x in xs {
        if x >= n || seen[x] {
            return false;
        }
        seen[x] = true;
    }
    true
}

/// Inverse of a permutation: `rank[xs[k]] == k`.
///
/// Callers must have checked `is_permutation(xs)` first.
pub(crate) fn rank_table(xs: &[usize]) -> Vec<usize> {
    let mut rank = vec![0; xs.len()];
    for (pos, &x) in xs.iter().enumerate() {
        rank[x] = pos;
    }
    rank
}
