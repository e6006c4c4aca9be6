//! Bearer-token authentication.
//!
//! Passwords are hashed with argon2 and only the hash is handed to core;
//! sessions are stateless HS256 tokens signed with the deployment secret.

use std::sync::Arc;

use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::Argon2;
use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use stakeboard_core::profiles::AuthContext;
use stakeboard_core::{Error, Result};

use crate::error::ApiError;
use crate::main_lib::AppState;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: i64,
}

/// Issues and verifies access tokens, and owns password hashing.
pub struct AuthManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    token_ttl: Duration,
}

impl AuthManager {
    pub fn new(secret: &str, token_ttl_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            token_ttl: Duration::hours(token_ttl_hours),
        }
    }

    pub fn hash_password(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| Error::Unexpected(format!("password hashing failed: {e}")))
    }

    pub fn verify_password(&self, stored_hash: &str, password: &str) -> Result<bool> {
        let parsed = PasswordHash::new(stored_hash)
            .map_err(|e| Error::Unexpected(format!("stored hash is malformed: {e}")))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    pub fn issue_token(&self, profile_id: &str) -> Result<String> {
        let claims = Claims {
            sub: profile_id.to_string(),
            exp: (Utc::now() + self.token_ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| Error::Unexpected(format!("token signing failed: {e}")))
    }

    /// Returns the profile id the token was issued for.
    pub fn verify_token(&self, token: &str) -> Result<String> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims.sub)
            .map_err(|e| Error::access(format!("invalid token: {e}")))
    }
}

/// Extractor resolving the Bearer token into an authenticated context.
pub struct CurrentUser(pub AuthContext);

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> std::result::Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| ApiError::unauthorized("missing bearer token"))?;

        let profile_id = state
            .auth
            .verify_token(token)
            .map_err(|_| ApiError::unauthorized("invalid or expired token"))?;

        Ok(CurrentUser(AuthContext::new(profile_id)))
    }
}
