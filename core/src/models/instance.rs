//! Matching instance registry
//!
//! Owns all applicants and employers of one matching problem. Registration
//! order is the canonical index: `applicants()[i].id() == i`. Mutation is
//! confined to the build phase; once [`Instance::validate`] has passed, the
//! matching and stability phases treat every preference field as read-only.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use super::applicant::Applicant;
use super::employer::Employer;
use super::{ApplicantId, EmployerId, ValidationError};

/// Out-of-range index from the checked accessor surface.
///
/// The experiment driver looks agents up by position for reporting; a bad
/// index must surface as an explicit error, never as a sentinel value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("applicant index {index} out of bounds ({len} applicants)")]
    ApplicantOutOfBounds { index: usize, len: usize },

    #[error("employer index {index} out of bounds ({len} employers)")]
    EmployerOutOfBounds { index: usize, len: usize },
}

/// A complete matching instance: applicants, employers, and their rankings
///
/// # Example
/// ```
/// use affiliate_matching_core::{build_instance, PreferenceScheme, RngManager};
///
/// let mut rng = RngManager::new(12345);
/// let instance = build_instance(3, PreferenceScheme::Cyclic, &mut rng).unwrap();
/// assert_eq!(instance.n_applicants(), 3);
/// assert!(instance.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    applicants: Vec<Applicant>,
    employers: Vec<Employer>,
}

impl Instance {
    /// Assemble an instance from parts.
    ///
    /// No invariants are checked here; call [`Instance::validate`] once the
    /// combined orders are in place. The builder does this automatically.
    pub fn new(applicants: Vec<Applicant>, employers: Vec<Employer>) -> Self {
        Self {
            applicants,
            employers,
        }
    }

    pub fn n_applicants(&self) -> usize {
        self.applicants.len()
    }

    pub fn n_employers(&self) -> usize {
        self.employers.len()
    }

    pub fn applicants(&self) -> &[Applicant] {
        &self.applicants
    }

    pub fn employers(&self) -> &[Employer] {
        &self.employers
    }

    /// Checked lookup of an applicant by index
    pub fn applicant(&self, index: ApplicantId) -> Result<&Applicant, LookupError> {
        self.applicants
            .get(index)
            .ok_or(LookupError::ApplicantOutOfBounds {
                index,
                len: self.applicants.len(),
            })
    }

    /// Checked lookup of an employer by index
    pub fn employer(&self, index: EmployerId) -> Result<&Employer, LookupError> {
        self.employers
            .get(index)
            .ok_or(LookupError::EmployerOutOfBounds {
                index,
                len: self.employers.len(),
            })
    }

    pub(crate) fn employers_mut(&mut self) -> &mut [Employer] {
        &mut self.employers
    }

    /// Check every data-model invariant.
    ///
    /// Called once by the builder after construction; hand-assembled
    /// instances must call it themselves before running matchings. Failure
    /// is fatal for the instance: the matching and stability algorithms
    /// assume these invariants unconditionally.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let n_applicants = self.applicants.len();
        let n_employers = self.employers.len();

        if n_applicants == 0 || n_employers == 0 {
            return Err(ValidationError::EmptyInstance);
        }

        for (index, app) in self.applicants.iter().enumerate() {
            if app.id() != index {
                return Err(ValidationError::ApplicantIdMismatch {
                    expected: index,
                    actual: app.id(),
                });
            }
            if app.prefs().len() != n_employers {
                return Err(ValidationError::ApplicantRankingLength {
                    applicant: index,
                    actual: app.prefs().len(),
                    expected: n_employers,
                });
            }
        }

        // Affiliation must be a bijection: count employers per applicant
        let mut affiliation_count = vec![0usize; n_applicants];

        for (index, emp) in self.employers.iter().enumerate() {
            if emp.id() != index {
                return Err(ValidationError::EmployerIdMismatch {
                    expected: index,
                    actual: emp.id(),
                });
            }
            if emp.own_prefs().len() != n_applicants {
                return Err(ValidationError::OwnRankingLength {
                    employer: index,
                    actual: emp.own_prefs().len(),
                    expected: n_applicants,
                });
            }
            if emp.aff_prefs().len() != n_employers {
                return Err(ValidationError::AffiliateRankingLength {
                    employer: index,
                    actual: emp.aff_prefs().len(),
                    expected: n_employers,
                });
            }
            if emp.affiliate() >= n_applicants {
                return Err(ValidationError::AffiliateOutOfRange {
                    employer: index,
                    affiliate: emp.affiliate(),
                    n_applicants,
                });
            }
            affiliation_count[emp.affiliate()] += 1;

            emp.verify_combined_order()?;
        }

        for (applicant, &count) in affiliation_count.iter().enumerate() {
            if count != 1 {
                return Err(ValidationError::AffiliationNotBijective { applicant, count });
            }
        }

        Ok(())
    }

    /// SHA-256 fingerprint of all preference tables, hex-encoded.
    ///
    /// Two instances have the same digest exactly when every ranking (and
    /// every combined order) agrees, so reports can name the instance a
    /// trial ran against without carrying the full tables.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();

        for app in &self.applicants {
            hasher.update(b"app");
            for &e in app.prefs() {
                hasher.update((e as u64).to_le_bytes());
            }
        }
        for emp in &self.employers {
            hasher.update(b"emp");
            hasher.update((emp.affiliate() as u64).to_le_bytes());
            for &a in emp.own_prefs() {
                hasher.update((a as u64).to_le_bytes());
            }
            hasher.update(b"aff");
            for &e in emp.aff_prefs() {
                hasher.update((e as u64).to_le_bytes());
            }
            hasher.update(b"tot");
            for &(a, e) in emp.combined_prefs() {
                hasher.update((a as u64).to_le_bytes());
                hasher.update((e as u64).to_le_bytes());
            }
        }

        format!("{:x}", hasher.finalize())
    }
}
