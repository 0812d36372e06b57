//! Experiment engine
//!
//! Mirrors the shape of the search this system exists to run: for each of a
//! number of instances, repeatedly draw a candidate matching and ask the
//! stability oracle about it. A trial budget bounds the search per
//! instance; exhausting it is a negative *finding*, not an error, since the
//! underlying problem class admits instances with no stable matching at
//! all.
//!
//! Determinism: one seeded RNG drives instance construction and every
//! trial, so a (config, seed) pair reproduces the full run. Only the
//! report's `run_id` differs between repetitions.

use serde::{Deserialize, Serialize};

use crate::builder::{build_instance, PreferenceScheme};
use crate::models::{ApplicantId, Event, EventLog, MatchingError, ValidationError};
use crate::rng::RngManager;
use crate::stability::{is_stable, StabilityCriterion};
use crate::strategy::{build_strategy, MatchingStrategy, StrategyConfig};

/// Complete experiment configuration
///
/// # Fields
///
/// * `n_agents` - Applicants (and employers) per instance
/// * `n_instances` - How many independent instances to probe
/// * `trials_per_instance` - Matching attempts before giving up on one instance
/// * `rng_seed` - Seed for deterministic instance construction and trials
/// * `scheme` - Preference generation scheme
/// * `strategy` - How candidate matchings are produced
/// * `criterion` - Which stability notion the oracle applies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub n_agents: usize,
    pub n_instances: usize,
    pub trials_per_instance: usize,
    pub rng_seed: u64,
    pub scheme: PreferenceScheme,
    pub strategy: StrategyConfig,
    pub criterion: StabilityCriterion,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            n_agents: 5,
            n_instances: 10,
            trials_per_instance: 100_000,
            rng_seed: 12345,
            scheme: PreferenceScheme::Random,
            strategy: StrategyConfig::Random,
            criterion: StabilityCriterion::Combined,
        }
    }
}

/// Experiment error types
#[derive(Debug, Clone, PartialEq)]
pub enum ExperimentError {
    /// Configuration validation error
    InvalidConfig(String),

    /// Instance construction or validation failed
    Build(ValidationError),

    /// A strategy failed to produce a bijective matching
    Matching(MatchingError),
}

impl std::fmt::Display for ExperimentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExperimentError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            ExperimentError::Build(err) => write!(f, "Instance build failed: {}", err),
            ExperimentError::Matching(err) => write!(f, "Matching failed: {}", err),
        }
    }
}

impl std::error::Error for ExperimentError {}

impl From<ValidationError> for ExperimentError {
    fn from(err: ValidationError) -> Self {
        ExperimentError::Build(err)
    }
}

impl From<MatchingError> for ExperimentError {
    fn from(err: MatchingError) -> Self {
        ExperimentError::Matching(err)
    }
}

/// Outcome of the search on one instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceResult {
    /// Index of the instance within the run
    pub instance: usize,

    /// Fingerprint of the instance's preference tables
    pub digest: String,

    /// Whether a stable matching was found within the budget
    pub solved: bool,

    /// Trials consumed: the 1-based number of the accepting trial, or the
    /// full budget if none was accepted
    pub trials_used: usize,

    /// Employer-side assignment of the accepted matching, if any
    pub assignment: Option<Vec<ApplicantId>>,
}

/// Full record of one experiment run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentReport {
    /// Unique id of this run (not covered by determinism)
    pub run_id: String,

    /// The configuration the run executed
    pub config: ExperimentConfig,

    /// Per-instance outcomes, in instance order
    pub instances: Vec<InstanceResult>,

    /// Number of instances solved within budget
    pub solved_count: usize,
}

/// Runs the configured search and collects a report plus an event log
pub struct ExperimentRunner {
    config: ExperimentConfig,
    rng: RngManager,
    strategy: Box<dyn MatchingStrategy>,
    events: EventLog,
}

impl ExperimentRunner {
    /// Create a runner from a validated configuration
    ///
    /// # Example
    /// ```
    /// use affiliate_matching_core::{ExperimentConfig, ExperimentRunner};
    ///
    /// let config = ExperimentConfig {
    ///     n_agents: 3,
    ///     n_instances: 2,
    ///     trials_per_instance: 100,
    ///     ..ExperimentConfig::default()
    /// };
    ///
    /// let mut runner = ExperimentRunner::new(config).unwrap();
    /// let report = runner.run().unwrap();
    /// assert_eq!(report.instances.len(), 2);
    /// ```
    pub fn new(config: ExperimentConfig) -> Result<Self, ExperimentError> {
        Self::validate_config(&config)?;

        let rng = RngManager::new(config.rng_seed);
        let strategy = build_strategy(config.strategy);

        Ok(Self {
            config,
            rng,
            strategy,
            events: EventLog::new(),
        })
    }

    fn validate_config(config: &ExperimentConfig) -> Result<(), ExperimentError> {
        if config.n_agents == 0 {
            return Err(ExperimentError::InvalidConfig(
                "n_agents must be positive".to_string(),
            ));
        }
        if config.n_instances == 0 {
            return Err(ExperimentError::InvalidConfig(
                "n_instances must be positive".to_string(),
            ));
        }
        if config.trials_per_instance == 0 {
            return Err(ExperimentError::InvalidConfig(
                "trials_per_instance must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Events recorded so far (instance builds, hits, exhausted budgets)
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Execute the full run: `n_instances` instances, up to
    /// `trials_per_instance` matching attempts each.
    pub fn run(&mut self) -> Result<ExperimentReport, ExperimentError> {
        let mut instances = Vec::with_capacity(self.config.n_instances);

        for index in 0..self.config.n_instances {
            let result = self.probe_instance(index)?;
            instances.push(result);
        }

        let solved_count = instances.iter().filter(|r| r.solved).count();

        Ok(ExperimentReport {
            run_id: uuid::Uuid::new_v4().to_string(),
            config: self.config.clone(),
            instances,
            solved_count,
        })
    }

    /// Build one instance and search it for a stable matching
    fn probe_instance(&mut self, index: usize) -> Result<InstanceResult, ExperimentError> {
        let instance = build_instance(self.config.n_agents, self.config.scheme, &mut self.rng)?;
        let digest = instance.digest();

        self.events.log(Event::InstanceBuilt {
            instance: index,
            n_agents: self.config.n_agents,
            digest: digest.clone(),
        });

        for trial in 1..=self.config.trials_per_instance {
            let matching = self.strategy.build_matching(&instance, &mut self.rng)?;

            if is_stable(&instance, &matching, self.config.criterion) {
                let assignment = matching.employer_assignment().to_vec();
                self.events.log(Event::StableMatchingFound {
                    instance: index,
                    trial,
                    assignment: assignment.clone(),
                });
                return Ok(InstanceResult {
                    instance: index,
                    digest,
                    solved: true,
                    trials_used: trial,
                    assignment: Some(assignment),
                });
            }
        }

        self.events.log(Event::TrialBudgetExhausted {
            instance: index,
            trials: self.config.trials_per_instance,
        });

        Ok(InstanceResult {
            instance: index,
            digest,
            solved: false,
            trials_used: self.config.trials_per_instance,
            assignment: None,
        })
    }
}
