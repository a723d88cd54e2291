/**
 * Authentication Handler Types
 *
 * Request and response bodies used by the signup, login, me and protected
 * handlers.
 */

use serde::{Deserialize, Serialize};

use crate::shared::SharedError;

/// Longest accepted username, in characters
pub const MAX_USERNAME_CHARS: usize = 64;

pub use crate::backend::auth::password::MAX_PASSWORD_BYTES;

/// Credentials sent to signup and login
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CredentialsRequest {
    pub username: String,
    /// Plaintext password; hashed before storage, never logged
    pub password: String,
}

impl CredentialsRequest {
    /// Check the fields a new account must satisfy
    pub fn validate_for_signup(&self) -> Result<(), SharedError> {
        if self.username.trim().is_empty() {
            return Err(SharedError::validation("username", "Username must not be empty"));
        }
        if self.username.chars().count() > MAX_USERNAME_CHARS {
            return Err(SharedError::validation(
                "username",
                format!("Username must be at most {MAX_USERNAME_CHARS} characters"),
            ));
        }
        if self.password.is_empty() {
            return Err(SharedError::validation("password", "Password must not be empty"));
        }
        if self.password.len() > MAX_PASSWORD_BYTES {
            return Err(SharedError::validation(
                "password",
                format!("Password must be at most {MAX_PASSWORD_BYTES} bytes"),
            ));
        }
        Ok(())
    }
}

/// Signup response
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

/// Login response
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// Bearer token, valid for one hour
    pub token: String,
}

/// Response of the protected route
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProtectedResponse {
    pub message: String,
    pub user_id: String,
}

/// User response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
