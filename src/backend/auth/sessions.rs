/**
 * Bearer Token Issuing and Verification
 *
 * Tokens are HS256 JWTs carrying the principal id (`sub`), issue time and
 * expiry. Nothing is stored server-side: a token is accepted exactly when
 * its signature matches the configured key and the current time is strictly
 * before `exp`. There is no leeway on expiry.
 *
 * The keys are derived once from the configured secret and shared read-only
 * through `AppState`.
 */

use std::fmt;

use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::shared::config::TOKEN_TTL_SECS;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Principal ID
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Token verification and signing errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// Bad signature, wrong algorithm or malformed token
    #[error("invalid token")]
    Invalid,

    /// Signature is valid but `exp` has passed
    #[error("expired token")]
    Expired,

    /// The token could not be encoded
    #[error("failed to sign token: {0}")]
    Signing(jsonwebtoken::errors::Error),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        }
    }
}

/// Signing and verification keys with the token lifetime
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_secs: u64,
}

impl fmt::Debug for TokenKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenKeys")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}

impl TokenKeys {
    /// Derive keys from the configured secret with the standard one hour lifetime
    pub fn from_secret(secret: &SecretString) -> Self {
        Self::with_ttl(secret, TOKEN_TTL_SECS)
    }

    /// Derive keys with an explicit lifetime
    pub fn with_ttl(secret: &SecretString, ttl_secs: u64) -> Self {
        let bytes = secret.expose_secret().as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
            validation,
            ttl_secs,
        }
    }

    /// Token lifetime in seconds
    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    /// Issue a token for a principal, valid from now for the configured lifetime
    pub fn issue(&self, subject: Uuid) -> Result<String, TokenError> {
        let now = Utc::now().timestamp().max(0) as u64;
        self.issue_at(subject, now)
    }

    /// Issue a token as if it had been created at `issued_at` (Unix seconds)
    pub fn issue_at(&self, subject: Uuid, issued_at: u64) -> Result<String, TokenError> {
        let claims = Claims {
            sub: subject.to_string(),
            iat: issued_at,
            exp: issued_at + self.ttl_secs,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(TokenError::Signing)
    }

    /// Verify and decode a token
    ///
    /// A token is expired from the second named by `exp` onwards.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding, &self.validation)?;

        // jsonwebtoken only rejects once `exp < now`
        let now = Utc::now().timestamp().max(0) as u64;
        if token_data.claims.exp <= now {
            return Err(TokenError::Expired);
        }

        Ok(token_data.claims)
    }

    /// Verify a token and recover the principal ID it was issued for
    pub fn verify_subject(&self, token: &str) -> Result<Uuid, TokenError> {
        let claims = self.verify(token)?;
        Uuid::parse_str(&claims.sub).map_err(|_| TokenError::Invalid)
    }
}
