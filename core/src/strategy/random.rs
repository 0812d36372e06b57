//! Uniform random matching

use crate::models::{Instance, Matching, MatchingError};
use crate::rng::RngManager;

use super::MatchingStrategy;

/// Assigns applicants to employers by drawing one uniform random
/// permutation. O(n) per matching.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl MatchingStrategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn build_matching(
        &mut self,
        instance: &Instance,
        rng: &mut RngManager,
    ) -> Result<Matching, MatchingError> {
        Matching::from_employer_assignment(rng.permutation(instance.n_employers()))
    }
}
