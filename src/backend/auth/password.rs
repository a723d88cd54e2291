/**
 * Password Hashing
 *
 * bcrypt with a configurable work factor. Each hash embeds its own random
 * salt and cost, so verification only needs the stored digest.
 *
 * Hashing is CPU-bound. The `*_async` variants run it on tokio's blocking
 * pool so request tasks keep moving while a hash is computed.
 *
 * bcrypt only reads the first 72 bytes of its input. Longer passwords are
 * refused by `hash` and never match in `verify`, so a stored password plus
 * any suffix is not accepted.
 */

use thiserror::Error;

/// Longest password bcrypt reads in full, in bytes
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordError {
    /// bcrypt rejected the input (e.g. an invalid cost)
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    /// The password would be truncated by bcrypt
    #[error("password exceeds 72 bytes")]
    TooLong,

    /// The blocking task panicked or was cancelled
    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Salted one-way password hasher
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Configured bcrypt work factor
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password with a fresh salt
    pub fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Err(PasswordError::TooLong);
        }
        Ok(bcrypt::hash(plaintext, self.cost)?)
    }

    /// Check a plaintext candidate against a stored digest
    ///
    /// A malformed digest never matches, nor does a candidate longer than
    /// [`MAX_PASSWORD_BYTES`].
    pub fn verify(&self, plaintext: &str, digest: &str) -> bool {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            tracing::warn!("Password candidate exceeds {} bytes", MAX_PASSWORD_BYTES);
            return false;
        }
        match bcrypt::verify(plaintext, digest) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!("Stored password hash could not be parsed: {}", e);
                false
            }
        }
    }

    /// [`hash`](Self::hash) on the blocking pool
    pub async fn hash_async(&self, plaintext: String) -> Result<String, PasswordError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext)).await?
    }

    /// [`verify`](Self::verify) on the blocking pool
    pub async fn verify_async(
        &self,
        plaintext: String,
        digest: String,
    ) -> Result<bool, PasswordError> {
        let hasher = *self;
        Ok(tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &digest)).await?)
    }

    /// Spend the same work as a verification without a stored digest
    ///
    /// Used when the account does not exist, so that case costs as much time
    /// as a wrong password.
    pub async fn dummy_verify_async(&self, plaintext: String) -> Result<(), PasswordError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || {
            let truncated = truncate_to_boundary(&plaintext, MAX_PASSWORD_BYTES);
            bcrypt::hash(truncated, hasher.cost).map(|_| ())
        })
        .await??;
        Ok(())
    }
}

fn truncate_to_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(crate::shared::config::DEFAULT_BCRYPT_COST)
    }
}
