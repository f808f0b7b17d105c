//! Bearer token issuing and verification.
//!
//! Tokens are HS256-signed JWTs carrying a [`Claims`] payload. The secret comes from
//! `JWT_SECRET` and every token expires after `JWT_EXPIRY_HOURS`.

use chrono::Utc;
use entity::sea_orm_active_enums::Role;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims embedded in every token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub email: String,
    /// Role at the time the token was issued.
    #[serde(rename = "type")]
    pub tipo: Role,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Signing secret and token lifetime.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiry_hours: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, expiry_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiry_hours,
        }
    }

    /// Signs a token for the given user.
    pub fn generate(
        &self,
        user_id: &str,
        email: &str,
        tipo: Role,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            tipo,
            iat: now,
            exp: now + self.expiry_hours * 3600,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }

    /// Verifies signature and expiry, returning the embedded claims.
    pub fn validate(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(data.claims)
    }
}
