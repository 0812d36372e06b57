//! Tests for instance construction
//!
//! Every built instance must satisfy the full data-model contract under
//! both generation schemes: complete permutation rankings on both sides, a
//! bijective affiliate linkage, and a valid combined order per employer.

use affiliate_matching_core::{
    build_instance, LookupError, PreferenceScheme, RngManager, ValidationError,
};

fn is_permutation_of(xs: &[usize], n: usize) -> bool {
    let mut seen = vec![false; n];
    xs.len() == n
        && xs.iter().all(|&x| {
            if x >= n || seen[x] {
                false
            } else {
                seen[x] = true;
                true
            }
        })
}

#[test]
fn test_cyclic_rankings_are_rotations() {
    let mut rng = RngManager::new(1);
    let instance = build_instance(3, PreferenceScheme::Cyclic, &mut rng).unwrap();

    assert_eq!(instance.applicant(0).unwrap().prefs(), &[0, 1, 2]);
    assert_eq!(instance.applicant(1).unwrap().prefs(), &[1, 2, 0]);
    assert_eq!(instance.applicant(2).unwrap().prefs(), &[2, 0, 1]);

    assert_eq!(instance.employer(1).unwrap().own_prefs(), &[1, 2, 0]);
    // Affiliate rankings are shifted one further, leaving the employer
    // itself last
    assert_eq!(instance.employer(1).unwrap().aff_prefs(), &[2, 0, 1]);
}

#[test]
fn test_rankings_are_permutations_under_both_schemes() {
    let mut rng = RngManager::new(4242);

    for scheme in [PreferenceScheme::Cyclic, PreferenceScheme::Random] {
        for n in [1, 2, 4, 7] {
            let instance = build_instance(n, scheme, &mut rng).unwrap();

            for app in instance.applicants() {
                assert!(is_permutation_of(app.prefs(), n));
            }
            for emp in instance.employers() {
                assert!(is_permutation_of(emp.own_prefs(), n));
                assert!(is_permutation_of(emp.aff_prefs(), n));
            }
        }
    }
}

#[test]
fn test_affiliation_is_a_bijection() {
    let mut rng = RngManager::new(99);
    let instance = build_instance(6, PreferenceScheme::Random, &mut rng).unwrap();

    let mut count = vec![0usize; 6];
    for emp in instance.employers() {
        count[emp.affiliate()] += 1;
    }
    assert!(count.iter().all(|&c| c == 1));
}

#[test]
fn test_built_instances_validate() {
    let mut rng = RngManager::new(7);

    for scheme in [PreferenceScheme::Cyclic, PreferenceScheme::Random] {
        for n in 1..6 {
            let instance = build_instance(n, scheme, &mut rng).unwrap();
            assert_eq!(instance.validate(), Ok(()));
        }
    }
}

#[test]
fn test_zero_agents_rejected() {
    let mut rng = RngManager::new(1);
    assert_eq!(
        build_instance(0, PreferenceScheme::Random, &mut rng),
        Err(ValidationError::EmptyInstance)
    );
}

#[test]
fn test_out_of_range_lookup_is_an_error_not_a_sentinel() {
    let mut rng = RngManager::new(1);
    let instance = build_instance(3, PreferenceScheme::Cyclic, &mut rng).unwrap();

    assert_eq!(
        instance.applicant(3).unwrap_err(),
        LookupError::ApplicantOutOfBounds { index: 3, len: 3 }
    );
    assert_eq!(
        instance.employer(10).unwrap_err(),
        LookupError::EmployerOutOfBounds { index: 10, len: 3 }
    );

    // In-range lookups still work
    assert_eq!(instance.applicant(2).unwrap().id(), 2);
    assert_eq!(instance.employer(0).unwrap().id(), 0);
}

#[test]
fn test_same_seed_same_instance() {
    let mut rng1 = RngManager::new(1337);
    let mut rng2 = RngManager::new(1337);

    let a = build_instance(5, PreferenceScheme::Random, &mut rng1).unwrap();
    let b = build_instance(5, PreferenceScheme::Random, &mut rng2).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.digest(), b.digest());
}

#[test]
fn test_different_seeds_different_digests() {
    let mut rng1 = RngManager::new(1);
    let mut rng2 = RngManager::new(2);

    let a = build_instance(5, PreferenceScheme::Random, &mut rng1).unwrap();
    let b = build_instance(5, PreferenceScheme::Random, &mut rng2).unwrap();

    assert_ne!(a.digest(), b.digest());
}

#[test]
fn test_cyclic_instances_share_digest_regardless_of_seed() {
    let mut rng1 = RngManager::new(1);
    let mut rng2 = RngManager::new(987654321);

    let a = build_instance(4, PreferenceScheme::Cyclic, &mut rng1).unwrap();
    let b = build_instance(4, PreferenceScheme::Cyclic, &mut rng2).unwrap();

    assert_eq!(a.digest(), b.digest());
}
