//! Deterministic random number generation
//!
//! Uses xorshift64* for fast, deterministic random number generation.
//! CRITICAL: All randomness in the matching lab MUST go through this module,
//! so that a seed fully determines every instance and every trial.

mod xorshift;

pub use xorshift::RngManager;
