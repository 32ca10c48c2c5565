//! JWT token issuance and verification

use crate::config::AuthConfig;
use crate::error::{Error, Result};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// Issued at
    pub iat: i64,
    /// Expiration time
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject, expiring `ttl_minutes` from now
    pub fn new(subject: impl Into<String>, ttl_minutes: i64) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            sub: subject.into(),
            iat: now,
            exp: now + ttl_minutes * 60,
        }
    }

    /// Check if token is expired
    pub fn is_expired(&self) -> bool {
        chrono::Utc::now().timestamp() > self.exp
    }
}

/// Validates the configured credential pair and issues/verifies session
/// tokens. Stateless: a token is valid iff its signature checks out against
/// the configured secret, it has not expired, and its subject is the
/// configured username.
pub struct Authenticator {
    username: String,
    password: String,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_minutes: i64,
}

impl Authenticator {
    /// Build an authenticator from the immutable auth configuration
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            username: config.username.clone(),
            password: config.password.clone(),
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            ttl_minutes: config.token_ttl_minutes,
        }
    }

    /// Check credentials and issue a signed session token
    pub fn login(&self, username: &str, password: &str) -> Result<String> {
        if username != self.username || password != self.password {
            return Err(Error::Authentication(
                "invalid username or password".to_string(),
            ));
        }

        let claims = Claims::new(username, self.ttl_minutes);
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| Error::Other(format!("Failed to create token: {}", e)))
    }

    /// Verify a token and return its subject
    pub fn verify(&self, token: &str) -> Result<String> {
        let claims = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| Error::InvalidToken(e.to_string()))?;

        if claims.sub != self.username {
            return Err(Error::Authentication(
                "token subject does not match configured user".to_string(),
            ));
        }

        Ok(claims.sub)
    }
}
