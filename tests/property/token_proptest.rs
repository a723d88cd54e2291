//! Property-based tests for bearer tokens

use assert_matches::assert_matches;
use proptest::prelude::*;
use secrecy::SecretString;
use uuid::Uuid;

use coursehub::backend::auth::{TokenError, TokenKeys};

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

fn keys(secret: &str) -> TokenKeys {
    TokenKeys::from_secret(&SecretString::from(secret.to_string()))
}

proptest! {
    #[test]
    fn test_issued_token_verifies_to_its_subject(bytes in any::<[u8; 16]>()) {
        let subject = Uuid::from_bytes(bytes);
        let keys = keys("property-secret-0123456789abcdef");

        let token = keys.issue(subject).unwrap();
        prop_assert_eq!(keys.verify_subject(&token).unwrap(), subject);
    }

    #[test]
    fn test_tampered_token_is_invalid(
        position in any::<prop::sample::Index>(),
        replacement in any::<prop::sample::Index>(),
    ) {
        let keys = keys("property-secret-0123456789abcdef");
        let token = keys.issue(Uuid::new_v4()).unwrap();

        let candidates: Vec<usize> = token
            .bytes()
            .enumerate()
            .filter(|(_, b)| *b != b'.')
            .map(|(i, _)| i)
            .collect();
        let at = candidates[position.index(candidates.len())];

        let original = token.as_bytes()[at];
        let others: Vec<u8> = ALPHABET.iter().copied().filter(|c| *c != original).collect();
        let substitute = others[replacement.index(others.len())];

        let mut tampered = token.into_bytes();
        tampered[at] = substitute;
        let tampered = String::from_utf8(tampered).unwrap();

        assert_matches!(keys.verify(&tampered), Err(TokenError::Invalid));
    }

    #[test]
    fn test_token_from_other_secret_is_invalid(secret in "[a-zA-Z0-9]{32,48}") {
        let ours = keys("property-secret-0123456789abcdef");
        prop_assume!(secret != "property-secret-0123456789abcdef");

        let token = keys(&secret).issue(Uuid::new_v4()).unwrap();
        assert_matches!(ours.verify(&token), Err(TokenError::Invalid));
    }
}
