//! Property tests over random sizes and seeds
//!
//! Everything here quantifies over the RNG seed: whatever the seed, built
//! instances validate, combined orders are linear extensions, matchings
//! are involutions, and deferred acceptance is classically stable.

use affiliate_matching_core::{
    build_instance, find_blocking_pair, match_deferred_acceptance, match_random,
    PreferenceScheme, RngManager, StabilityCriterion,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_built_instances_validate(seed in any::<u64>(), n in 1usize..7) {
        let mut rng = RngManager::new(seed);
        let instance = build_instance(n, PreferenceScheme::Random, &mut rng).unwrap();
        prop_assert!(instance.validate().is_ok());
    }

    #[test]
    fn prop_combined_orders_are_linear_extensions(seed in any::<u64>(), n in 1usize..6) {
        let mut rng = RngManager::new(seed);
        let instance = build_instance(n, PreferenceScheme::Random, &mut rng).unwrap();

        for emp in instance.employers() {
            let order = emp.combined_prefs();
            prop_assert_eq!(order.len(), n * n);

            for (i, &(a1, e1)) in order.iter().enumerate() {
                for &(a2, e2) in &order[i + 1..] {
                    if a1 == a2 {
                        prop_assert!(emp.aff_rank_of(e1) < emp.aff_rank_of(e2));
                    }
                    if e1 == e2 {
                        prop_assert!(emp.own_rank_of(a1) < emp.own_rank_of(a2));
                    }
                }
            }
        }
    }

    #[test]
    fn prop_random_matching_is_involution(seed in any::<u64>(), n in 1usize..9) {
        let mut rng = RngManager::new(seed);
        let instance = build_instance(n, PreferenceScheme::Random, &mut rng).unwrap();
        let matching = match_random(&instance, &mut rng).unwrap();

        for e in 0..n {
            prop_assert_eq!(matching.employer_of(matching.applicant_of(e)), e);
        }
        for a in 0..n {
            prop_assert_eq!(matching.applicant_of(matching.employer_of(a)), a);
        }
    }

    #[test]
    fn prop_deferred_acceptance_classically_stable(seed in any::<u64>(), n in 1usize..8) {
        let mut rng = RngManager::new(seed);
        let instance = build_instance(n, PreferenceScheme::Random, &mut rng).unwrap();
        let matching = match_deferred_acceptance(&instance).unwrap();

        prop_assert_eq!(
            find_blocking_pair(&instance, &matching, StabilityCriterion::OwnPreferences),
            None
        );
    }
}
