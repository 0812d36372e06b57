//! Experiment runner - repeated stability search
//!
//! Drives the whole pipeline: build instances, draw candidate matchings via
//! the configured strategy, and ask the stability oracle about each until
//! one is accepted or the trial budget runs out.
//!
//! See `engine.rs` for full implementation.

pub mod engine;

pub use engine::{
    ExperimentConfig, ExperimentError, ExperimentReport, ExperimentRunner, InstanceResult,
};
