//! Affiliate Matching Core - stable matching with linked dependents
//!
//! Models a generalization of the stable-matching problem in which every
//! employer carries a fixed *affiliate* applicant whose eventual match also
//! affects the employer's utility (the "matching with couples" family, for
//! which stable outcomes need not exist). The crate builds instances,
//! synthesizes affiliate-aware combined preference orders, produces
//! candidate matchings, and verifies stability.
//!
//! # Architecture
//!
//! - **models**: Domain types (Applicant, Employer, Instance, Matching) and
//!   the experiment event log
//! - **builder**: Instance construction (cyclic or randomized rankings)
//! - **prefs**: Combined-order synthesis (linear extensions of the product
//!   order)
//! - **strategy**: Matching strategies (random, deferred acceptance)
//! - **stability**: Blocking-pair search under either stability criterion
//! - **orchestrator**: Repeated-trial experiment runner
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (seeded RNG)
//! 2. Instances are validated once after construction; algorithms rely on
//!    the invariants unconditionally afterwards
//! 3. Every matching is a bijection; the two directions are inverses by
//!    construction
//! 4. Every combined order is a linear extension of its product order

pub mod builder;
pub mod models;
pub mod orchestrator;
pub mod prefs;
pub mod rng;
pub mod stability;
pub mod strategy;

// Re-exports for convenience
pub use builder::{build_instance, PreferenceScheme};
pub use models::{
    Applicant, ApplicantId, Employer, EmployerId, Event, EventLog, Instance, LookupError,
    Matching, MatchingError, ValidationError,
};
pub use orchestrator::{
    ExperimentConfig, ExperimentError, ExperimentReport, ExperimentRunner, InstanceResult,
};
pub use prefs::synthesize_combined_orders;
pub use rng::RngManager;
pub use stability::{find_blocking_pair, is_stable, StabilityCriterion};
pub use strategy::{
    build_strategy, match_deferred_acceptance, match_random, DeferredAcceptanceStrategy,
    MatchingStrategy, RandomStrategy, StrategyConfig,
};
