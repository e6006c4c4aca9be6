//! Profile domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a registered user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub created_at: NaiveDateTime,
}

/// Input model for registering a new profile.
///
/// `password_hash` is opaque to core and storage; hashing itself is the
/// responsibility of the auth layer in the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub email: String,
    pub display_name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl NewProfile {
    /// Validates the registration data.
    pub fn validate(&self) -> Result<()> {
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "A valid email address is required".to_string(),
            )));
        }
        if self.display_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Display name cannot be empty".to_string(),
            )));
        }
        if self.password_hash.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "passwordHash".to_string(),
            )));
        }
        Ok(())
    }
}

/// A profile paired with its stored password hash, for sign-in verification.
#[derive(Debug, Clone)]
pub struct Credential {
    pub profile: Profile,
    pub password_hash: String,
}

/// The authenticated caller of a core operation.
///
/// Passed explicitly to services instead of living in ambient global
/// state, so the domain stays testable without an HTTP harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: String,
}

impl AuthContext {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}
