//! Stability oracle
//!
//! Decides whether a matching admits a blocking pair: an employer and an
//! applicant, currently not matched to each other, who would both strictly
//! prefer the outcome of deviating together. Deviation is the 2-swap that
//! marries the pair and remarries their displaced partners to each other,
//! which keeps the matching a bijection.
//!
//! Two criteria are supported:
//!
//! - [`StabilityCriterion::OwnPreferences`]: textbook stability; the
//!   employer compares only its own hire via `own_prefs`.
//! - [`StabilityCriterion::Combined`]: affiliate-aware stability; the
//!   employer compares the (own hire, affiliate's employer) pair before and
//!   after the swap by its position in the combined order.
//!
//! Deferred acceptance guarantees there is no blocking pair under
//! `OwnPreferences`. Under `Combined` no procedure here makes any such
//! promise; instances exist for which *no* matching is stable.

use serde::{Deserialize, Serialize};

use crate::models::{ApplicantId, EmployerId, Instance, Matching};

/// Which preference data the employer side of a blocking pair consults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StabilityCriterion {
    /// Classical stability over the coordinate rankings alone
    OwnPreferences,

    /// Affiliate-aware stability over the combined orders
    Combined,
}

/// Find the first blocking pair, scanning employers then applicants in
/// ascending id order. `None` means the matching is stable under the given
/// criterion.
///
/// Cost is O(n²) candidate pairs, each judged in O(1) via the memoized rank
/// tables.
pub fn find_blocking_pair(
    instance: &Instance,
    matching: &Matching,
    criterion: StabilityCriterion,
) -> Option<(EmployerId, ApplicantId)> {
    for emp in instance.employers() {
        let e = emp.id();
        let current_applicant = matching.applicant_of(e);

        for app in instance.applicants() {
            let a = app.id();
            if a == current_applicant {
                continue;
            }

            // The applicant must strictly prefer the deviating employer to
            // its current one
            if !app.prefers(e, matching.employer_of(a)) {
                continue;
            }

            let employer_gains = match criterion {
                StabilityCriterion::OwnPreferences => emp.prefers_applicant(a, current_applicant),
                StabilityCriterion::Combined => {
                    combined_gain(instance, matching, e, a, current_applicant)
                }
            };

            if employer_gains {
                return Some((e, a));
            }
        }
    }
    None
}

/// Is the matching free of blocking pairs under the given criterion?
///
/// # Example
/// ```
/// use affiliate_matching_core::{
///     build_instance, is_stable, match_deferred_acceptance, PreferenceScheme, RngManager,
///     StabilityCriterion,
/// };
///
/// let mut rng = RngManager::new(12345);
/// let instance = build_instance(4, PreferenceScheme::Random, &mut rng).unwrap();
/// let matching = match_deferred_acceptance(&instance).unwrap();
///
/// assert!(is_stable(&instance, &matching, StabilityCriterion::OwnPreferences));
/// ```
pub fn is_stable(
    instance: &Instance,
    matching: &Matching,
    criterion: StabilityCriterion,
) -> bool {
    find_blocking_pair(instance, matching, criterion).is_none()
}

/// Would employer `e` strictly gain, per its combined order, from the
/// 2-swap that marries it to applicant `a`?
fn combined_gain(
    instance: &Instance,
    matching: &Matching,
    e: EmployerId,
    a: ApplicantId,
    current_applicant: ApplicantId,
) -> bool {
    let emp = &instance.employers()[e];
    let affiliate = emp.affiliate();

    // The swap marries e↔a and remarries the displaced partners to each
    // other: e's old applicant goes to a's old employer
    let displaced_employer = matching.employer_of(a);

    let affiliate_now = matching.employer_of(affiliate);
    let affiliate_after = if affiliate == a {
        e
    } else if affiliate == current_applicant {
        displaced_employer
    } else {
        affiliate_now
    };

    emp.prefers_outcome((a, affiliate_after), (current_applicant, affiliate_now))
}
