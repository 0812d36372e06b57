//! Instance construction
//!
//! Builds a full matching instance: n applicants, n employers, the fixed
//! affiliate linkage (employer i ↔ applicant i), and all preference
//! rankings, in either a deterministic cyclic-shift form or a fully
//! randomized form. Every built instance is validated before it is handed
//! out; a violation is a construction bug and surfaces immediately.

use serde::{Deserialize, Serialize};

use crate::models::{Applicant, Employer, Instance, ValidationError};
use crate::prefs;
use crate::rng::RngManager;

/// How rankings (and the combined orders derived from them) are generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceScheme {
    /// Every ranking is the opposite population cyclically shifted by the
    /// agent's index; combined orders stay lexicographic. Fully
    /// deterministic, useful as a known baseline.
    Cyclic,

    /// Every ranking is an independent uniform permutation and the combined
    /// orders are scrambled within the linear-extension constraint.
    Random,
}

/// `0..n` cyclically shifted so that `shift` comes first.
fn rotated(n: usize, shift: usize) -> Vec<usize> {
    (0..n).map(|k| (k + shift) % n).collect()
}

/// Build a complete, validated instance of size `n`.
///
/// Employer `i`'s affiliate is applicant `i`. Under the cyclic scheme,
/// applicant `i` ranks employers starting from `i`, employer `i` ranks
/// applicants starting from `i`, and ranks its affiliate's employers
/// starting from `i + 1` (itself last).
///
/// # Example
/// ```
/// use affiliate_matching_core::{build_instance, PreferenceScheme, RngManager};
///
/// let mut rng = RngManager::new(12345);
/// let instance = build_instance(2, PreferenceScheme::Cyclic, &mut rng).unwrap();
///
/// assert_eq!(instance.applicant(0).unwrap().prefs(), &[0, 1]);
/// assert_eq!(instance.employer(1).unwrap().own_prefs(), &[1, 0]);
/// ```
pub fn build_instance(
    n: usize,
    scheme: PreferenceScheme,
    rng: &mut RngManager,
) -> Result<Instance, ValidationError> {
    if n == 0 {
        return Err(ValidationError::EmptyInstance);
    }

    let mut applicants = Vec::with_capacity(n);
    for i in 0..n {
        let prefs = match scheme {
            PreferenceScheme::Cyclic => rotated(n, i),
            PreferenceScheme::Random => rng.permutation(n),
        };
        applicants.push(Applicant::new(i, prefs)?);
    }

    let mut employers = Vec::with_capacity(n);
    for i in 0..n {
        let (own_prefs, aff_prefs) = match scheme {
            PreferenceScheme::Cyclic => (rotated(n, i), rotated(n, i + 1)),
            PreferenceScheme::Random => (rng.permutation(n), rng.permutation(n)),
        };
        employers.push(Employer::new(i, i, own_prefs, aff_prefs)?);
    }

    let mut instance = Instance::new(applicants, employers);
    prefs::synthesize_combined_orders(&mut instance, scheme, rng)?;
    instance.validate()?;

    Ok(instance)
}
