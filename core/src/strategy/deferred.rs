//! Employer-proposing deferred acceptance (Gale–Shapley)

use std::collections::VecDeque;

use crate::models::{EmployerId, Instance, Matching, MatchingError};
use crate::rng::RngManager;

use super::MatchingStrategy;

/// Classic propose/reject matching over the employers' own rankings.
///
/// Each unmatched employer proposes to the best applicant it has not yet
/// tried. An unmatched applicant accepts tentatively; a matched applicant
/// trades up exactly when its own ranking strictly prefers the proposer,
/// returning the displaced employer to the queue. With strict complete
/// rankings on both sides this terminates with a perfect matching after at
/// most n² proposals.
///
/// Proposals consult `own_prefs` only. The combined (affiliate-aware)
/// orders play no part here; whether the result survives the affiliate-aware
/// stability criterion is exactly what experiments probe.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeferredAcceptanceStrategy;

impl MatchingStrategy for DeferredAcceptanceStrategy {
    fn name(&self) -> &'static str {
        "deferred_acceptance"
    }

    fn build_matching(
        &mut self,
        instance: &Instance,
        _rng: &mut RngManager,
    ) -> Result<Matching, MatchingError> {
        let n_employers = instance.n_employers();
        let n_applicants = instance.n_applicants();

        // Next untried position in each employer's own ranking
        let mut next_choice = vec![0usize; n_employers];
        // Tentative holder of each applicant
        let mut holder: Vec<Option<EmployerId>> = vec![None; n_applicants];
        let mut unmatched: VecDeque<EmployerId> = (0..n_employers).collect();

        while let Some(e) = unmatched.pop_front() {
            let emp = &instance.employers()[e];
            let Some(&a) = emp.own_prefs().get(next_choice[e]) else {
                // Unreachable on a validated (square, strict, complete)
                // instance; typed rather than panicking
                return Err(MatchingError::ProposalsExhausted { employer: e });
            };
            next_choice[e] += 1;

            match holder[a] {
                None => holder[a] = Some(e),
                Some(current) => {
                    if instance.applicants()[a].prefers(e, current) {
                        holder[a] = Some(e);
                        unmatched.push_back(current);
                    } else {
                        unmatched.push_back(e);
                    }
                }
            }
        }

        // Queue drained: every employer holds an applicant, and with equal
        // population sizes every applicant is held. Any gap left here is a
        // broken instance and is rejected by the bijection constructor.
        let mut assignment = vec![usize::MAX; n_employers];
        for (a, h) in holder.iter().enumerate() {
            if let Some(e) = h {
                assignment[*e] = a;
            }
        }
        Matching::from_employer_assignment(assignment)
    }
}
