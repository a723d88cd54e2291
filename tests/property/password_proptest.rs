//! Property-based tests for password hashing
//!
//! bcrypt is slow even at the minimum cost, so these run few cases.

use proptest::prelude::*;

use coursehub::backend::auth::PasswordHasher;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn test_hash_verifies_only_its_password(
        password in "[ -~]{1,72}",
        other in "[ -~]{1,200}",
    ) {
        prop_assume!(password != other);
        let hasher = PasswordHasher::new(4);

        let digest = hasher.hash(&password).unwrap();

        prop_assert_ne!(&digest, &password);
        prop_assert!(hasher.verify(&password, &digest));
        prop_assert!(!hasher.verify(&other, &digest));
    }

    #[test]
    fn test_same_password_hashes_differ(password in "[ -~]{1,72}") {
        let hasher = PasswordHasher::new(4);

        let first = hasher.hash(&password).unwrap();
        let second = hasher.hash(&password).unwrap();

        prop_assert_ne!(first, second);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn test_suffix_past_limit_never_matches(
        prefix in "[ -~]{72}",
        suffix in "[ -~]{1,64}",
    ) {
        let hasher = PasswordHasher::new(4);
        let digest = hasher.hash(&prefix).unwrap();

        prop_assert!(hasher.verify(&prefix, &digest));
        let extended = format!("{prefix}{suffix}");
        prop_assert!(!hasher.verify(&extended, &digest));
    }
}
