//! Matching strategies
//!
//! Two interchangeable ways to produce a candidate matching, both returning
//! a fresh bijection per attempt:
//!
//! 1. **Random**: a uniform random employer→applicant bijection; no
//!    correctness guarantee beyond bijectivity. The workhorse of
//!    brute-force stability search.
//! 2. **DeferredAcceptance**: employer-proposing propose/reject over the
//!    employers' own rankings only. The result carries no classical
//!    blocking pair, but because the proposal logic never consults the
//!    combined orders it may still be rejected by the affiliate-aware
//!    stability criterion. The two code paths are deliberately kept
//!    independent so experiments can contrast them.
//!
//! All strategies implement the [`MatchingStrategy`] trait and are
//! constructed from a [`StrategyConfig`] via [`build_strategy`].

use serde::{Deserialize, Serialize};

use crate::models::{Instance, Matching, MatchingError};
use crate::rng::RngManager;

pub mod deferred;
pub mod random;

pub use deferred::DeferredAcceptanceStrategy;
pub use random::RandomStrategy;

/// A way of producing one candidate matching per call
pub trait MatchingStrategy {
    /// Short strategy name for reports
    fn name(&self) -> &'static str;

    /// Produce a fresh matching for the instance.
    ///
    /// The instance must have passed validation. Strategies draw any
    /// randomness they need from `rng`, so a seed determines the full trial
    /// sequence.
    fn build_matching(
        &mut self,
        instance: &Instance,
        rng: &mut RngManager,
    ) -> Result<Matching, MatchingError>;
}

/// Strategy selection, as it appears in experiment configs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyConfig {
    Random,
    DeferredAcceptance,
}

/// Instantiate the strategy an experiment config asks for
pub fn build_strategy(config: StrategyConfig) -> Box<dyn MatchingStrategy> {
    match config {
        StrategyConfig::Random => Box::new(RandomStrategy),
        StrategyConfig::DeferredAcceptance => Box::new(DeferredAcceptanceStrategy),
    }
}

/// Draw one uniform random matching for the instance
pub fn match_random(
    instance: &Instance,
    rng: &mut RngManager,
) -> Result<Matching, MatchingError> {
    RandomStrategy.build_matching(instance, rng)
}

/// Run employer-proposing deferred acceptance over the instance
pub fn match_deferred_acceptance(instance: &Instance) -> Result<Matching, MatchingError> {
    // Deferred acceptance is deterministic; the RNG is part of the trait
    // surface only and is never advanced here.
    let mut rng = RngManager::new(1);
    DeferredAcceptanceStrategy.build_matching(instance, &mut rng)
}
