//! Event logging for experiment runs
//!
//! Captures the significant moments of a search run so a report can be
//! audited after the fact: which instances were built, where a stable
//! matching turned up, and where the trial budget ran out. Per-trial
//! attempts are deliberately not logged; budgets run into the millions and
//! the log must stay bounded by the instance count.

use super::ApplicantId;

/// Experiment event, tagged with the instance index it concerns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// An instance was built and validated
    InstanceBuilt {
        instance: usize,
        n_agents: usize,
        digest: String,
    },

    /// A trial produced a matching the stability oracle accepted
    StableMatchingFound {
        instance: usize,
        /// 1-based trial number of the accepting attempt
        trial: usize,
        /// Employer-side assignment of the accepted matching
        assignment: Vec<ApplicantId>,
    },

    /// Every trial in the budget was rejected by the oracle
    TrialBudgetExhausted { instance: usize, trials: usize },
}

impl Event {
    /// Index of the instance this event concerns
    pub fn instance(&self) -> usize {
        match self {
            Event::InstanceBuilt { instance, .. } => *instance,
            Event::StableMatchingFound { instance, .. } => *instance,
            Event::TrialBudgetExhausted { instance, .. } => *instance,
        }
    }

    /// Short event type name for filtering
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::InstanceBuilt { .. } => "instance_built",
            Event::StableMatchingFound { .. } => "stable_matching_found",
            Event::TrialBudgetExhausted { .. } => "trial_budget_exhausted",
        }
    }
}

/// Append-only log of experiment events
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Get the number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all events
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Get events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Get events for a specific instance
    pub fn events_for_instance(&self, instance: usize) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.instance() == instance)
            .collect()
    }
}
