//! Combined preference synthesis
//!
//! Populates every employer's combined order over (own hire, affiliate's
//! employer) pairs. The deterministic scheme keeps the lexicographic
//! own-major cross product; the randomized scheme scrambles it with
//! constraint-respecting adjacent transpositions so the affiliate ranking
//! is not always subordinate to the own ranking. Either way the result is a
//! valid linear extension of the product order.

pub mod extension;

use crate::builder::PreferenceScheme;
use crate::models::{Instance, ValidationError};
use crate::rng::RngManager;

pub use extension::{is_linear_extension, MIXING_SWEEPS};

/// Synthesize a combined preference order for every employer in the
/// instance.
///
/// May be re-invoked to re-randomize: each call replaces the previous
/// orders. The base coordinate rankings are never touched.
///
/// # Example
/// ```
/// use affiliate_matching_core::{
///     build_instance, synthesize_combined_orders, PreferenceScheme, RngManager,
/// };
///
/// let mut rng = RngManager::new(42);
/// let mut instance = build_instance(3, PreferenceScheme::Random, &mut rng).unwrap();
///
/// // Draw a second combined order over the same base rankings
/// synthesize_combined_orders(&mut instance, PreferenceScheme::Random, &mut rng).unwrap();
/// assert!(instance.validate().is_ok());
/// ```
pub fn synthesize_combined_orders(
    instance: &mut Instance,
    scheme: PreferenceScheme,
    rng: &mut RngManager,
) -> Result<(), ValidationError> {
    for emp in instance.employers_mut() {
        let mut order = extension::lexicographic_product(emp.own_prefs(), emp.aff_prefs());

        if scheme == PreferenceScheme::Random {
            extension::mix(&mut order, emp.own_rank_table(), emp.aff_rank_table(), rng);
        }

        emp.set_combined_order(order)?;
    }
    Ok(())
}
