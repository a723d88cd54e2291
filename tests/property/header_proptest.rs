//! Property-based tests for Authorization header parsing

use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use proptest::prelude::*;

use coursehub::backend::middleware::extract_token;

fn headers(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

proptest! {
    #[test]
    fn test_bearer_and_bare_forms_agree(
        token in "[A-Za-z0-9_.-]{1,64}",
        scheme in prop::sample::select(vec!["Bearer", "bearer", "BEARER"]),
    ) {
        prop_assume!(!token.eq_ignore_ascii_case("bearer"));

        let bare = headers(&token);
        let prefixed = headers(&format!("{scheme} {token}"));

        prop_assert_eq!(extract_token(&bare).unwrap(), token.as_str());
        prop_assert_eq!(extract_token(&prefixed).unwrap(), token.as_str());
    }
}
