//! Tests for the experiment runner
//!
//! The runner is the reproducibility boundary: a (config, seed) pair must
//! replay to the identical report, and the event log must tell the same
//! story as the per-instance results.

use affiliate_matching_core::{
    Event, ExperimentConfig, ExperimentError, ExperimentRunner, PreferenceScheme,
    StabilityCriterion, StrategyConfig,
};

fn small_config() -> ExperimentConfig {
    ExperimentConfig {
        n_agents: 3,
        n_instances: 4,
        trials_per_instance: 200,
        rng_seed: 31415,
        scheme: PreferenceScheme::Random,
        strategy: StrategyConfig::Random,
        criterion: StabilityCriterion::Combined,
    }
}

#[test]
fn test_same_seed_reproduces_report() {
    let mut runner1 = ExperimentRunner::new(small_config()).unwrap();
    let mut runner2 = ExperimentRunner::new(small_config()).unwrap();

    let report1 = runner1.run().unwrap();
    let report2 = runner2.run().unwrap();

    // Everything except the run id must replay exactly
    assert_ne!(report1.run_id, report2.run_id);
    assert_eq!(report1.config, report2.config);
    assert_eq!(report1.instances, report2.instances);
    assert_eq!(report1.solved_count, report2.solved_count);
}

#[test]
fn test_report_and_events_agree() {
    let mut runner = ExperimentRunner::new(small_config()).unwrap();
    let report = runner.run().unwrap();

    assert_eq!(report.instances.len(), 4);
    assert_eq!(
        runner.events().events_of_type("instance_built").len(),
        4
    );

    for result in &report.instances {
        let events = runner.events().events_for_instance(result.instance);

        match &events[..] {
            [Event::InstanceBuilt { digest, n_agents, .. }, outcome] => {
                assert_eq!(*n_agents, 3);
                assert_eq!(digest, &result.digest);

                match outcome {
                    Event::StableMatchingFound { trial, assignment, .. } => {
                        assert!(result.solved);
                        assert_eq!(*trial, result.trials_used);
                        assert_eq!(Some(assignment.clone()), result.assignment);
                    }
                    Event::TrialBudgetExhausted { trials, .. } => {
                        assert!(!result.solved);
                        assert_eq!(*trials, result.trials_used);
                        assert_eq!(result.assignment, None);
                    }
                    other => panic!("unexpected outcome event {:?}", other),
                }
            }
            other => panic!("expected build + outcome events, got {:?}", other),
        }
    }
}

#[test]
fn test_trials_used_within_budget() {
    let mut runner = ExperimentRunner::new(small_config()).unwrap();
    let report = runner.run().unwrap();

    for result in &report.instances {
        assert!(result.trials_used >= 1);
        assert!(result.trials_used <= 200);
        if !result.solved {
            assert_eq!(result.trials_used, 200);
        }
    }
}

#[test]
fn test_single_agent_always_solved_first_trial() {
    // With one agent there is exactly one bijection and no candidate
    // blocking pair at all
    let config = ExperimentConfig {
        n_agents: 1,
        n_instances: 2,
        trials_per_instance: 5,
        ..small_config()
    };
    let mut runner = ExperimentRunner::new(config).unwrap();
    let report = runner.run().unwrap();

    assert_eq!(report.solved_count, 2);
    for result in &report.instances {
        assert_eq!(result.trials_used, 1);
        assert_eq!(result.assignment, Some(vec![0]));
    }
}

#[test]
fn test_deferred_acceptance_under_own_preferences_always_solves() {
    let config = ExperimentConfig {
        n_agents: 7,
        n_instances: 3,
        trials_per_instance: 10,
        rng_seed: 99,
        scheme: PreferenceScheme::Random,
        strategy: StrategyConfig::DeferredAcceptance,
        criterion: StabilityCriterion::OwnPreferences,
    };
    let mut runner = ExperimentRunner::new(config).unwrap();
    let report = runner.run().unwrap();

    assert_eq!(report.solved_count, 3);
    for result in &report.instances {
        assert_eq!(result.trials_used, 1);
    }
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = ExperimentConfig {
        n_agents: 0,
        ..small_config()
    };
    match ExperimentRunner::new(config) {
        Err(ExperimentError::InvalidConfig(msg)) => assert!(msg.contains("n_agents")),
        _ => panic!("expected InvalidConfig"),
    }
}

#[test]
fn test_report_serializes_to_json() {
    let config = ExperimentConfig {
        n_agents: 2,
        n_instances: 1,
        trials_per_instance: 10,
        ..small_config()
    };
    let mut runner = ExperimentRunner::new(config).unwrap();
    let report = runner.run().unwrap();

    let json = serde_json::to_string(&report).unwrap();
    let parsed: affiliate_matching_core::ExperimentReport =
        serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);
}
