//! One-to-one matching between applicants and employers
//!
//! Stored as two parallel arrays that are each other's inverse, so the
//! round-trip property `match[match[x]] == x` holds by construction rather
//! than by a check bolted on afterwards. A fresh `Matching` is produced per
//! trial and discarded after the stability verdict.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{ApplicantId, EmployerId};

/// Failure to assemble a bijective matching
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatchingError {
    #[error("employer {employer} assigned applicant {applicant}, out of range ({len} applicants)")]
    AssignmentOutOfRange {
        employer: EmployerId,
        applicant: ApplicantId,
        len: usize,
    },

    #[error("applicant {applicant} assigned to both employer {first} and employer {second}")]
    DuplicateAssignment {
        applicant: ApplicantId,
        first: EmployerId,
        second: EmployerId,
    },

    #[error("employer {employer} exhausted its proposal list without being matched")]
    ProposalsExhausted { employer: EmployerId },
}

/// A symmetric bijection between employers and applicants
///
/// # Example
/// ```
/// use affiliate_matching_core::Matching;
///
/// let m = Matching::from_employer_assignment(vec![1, 0]).unwrap();
/// assert_eq!(m.applicant_of(0), 1);
/// assert_eq!(m.employer_of(1), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matching {
    employer_to_applicant: Vec<ApplicantId>,
    applicant_to_employer: Vec<EmployerId>,
}

impl Matching {
    /// Build a matching from the employer-side assignment: employer `i` is
    /// matched with `assignment[i]`.
    ///
    /// Rejects anything that is not a bijection onto `0..assignment.len()`.
    pub fn from_employer_assignment(
        assignment: Vec<ApplicantId>,
    ) -> Result<Self, MatchingError> {
        let n = assignment.len();
        let mut inverse = vec![usize::MAX; n];

        for (employer, &applicant) in assignment.iter().enumerate() {
            if applicant >= n {
                return Err(MatchingError::AssignmentOutOfRange {
                    employer,
                    applicant,
                    len: n,
                });
            }
            if inverse[applicant] != usize::MAX {
                return Err(MatchingError::DuplicateAssignment {
                    applicant,
                    first: inverse[applicant],
                    second: employer,
                });
            }
            inverse[applicant] = employer;
        }

        Ok(Self {
            employer_to_applicant: assignment,
            applicant_to_employer: inverse,
        })
    }

    /// The canonical pairing: employer `i` ↔ applicant `i`
    pub fn identity(n: usize) -> Self {
        Self {
            employer_to_applicant: (0..n).collect(),
            applicant_to_employer: (0..n).collect(),
        }
    }

    /// Number of matched pairs
    pub fn len(&self) -> usize {
        self.employer_to_applicant.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employer_to_applicant.is_empty()
    }

    /// The applicant matched with this employer
    pub fn applicant_of(&self, employer: EmployerId) -> ApplicantId {
        self.employer_to_applicant[employer]
    }

    /// The employer matched with this applicant
    pub fn employer_of(&self, applicant: ApplicantId) -> EmployerId {
        self.applicant_to_employer[applicant]
    }

    /// Employer-side view of the assignment
    pub fn employer_assignment(&self) -> &[ApplicantId] {
        &self.employer_to_applicant
    }

    /// All (employer, applicant) pairs in employer order
    pub fn pairs(&self) -> impl Iterator<Item = (EmployerId, ApplicantId)> + '_ {
        self.employer_to_applicant
            .iter()
            .enumerate()
            .map(|(e, &a)| (e, a))
    }
}
