//! Access and refresh token primitives.
//!
//! Access tokens are short-lived HS256 JWTs issued per user id. Refresh
//! tokens are opaque random strings handed to the client as-is; the server
//! keeps only their SHA-256 digest, so token rows are useless on their own.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tamagochi_core::types::DbId;
use uuid::Uuid;

const ACCESS_EXPIRY_MINS_DEFAULT: i64 = 15;
const REFRESH_EXPIRY_DAYS_DEFAULT: i64 = 7;

/// Payload of an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id the token was issued for.
    pub sub: DbId,
    /// Expiry as a Unix timestamp; `jsonwebtoken` rejects the token past it.
    pub exp: i64,
    /// Issue time as a Unix timestamp.
    pub iat: i64,
    /// Per-token random id, useful for audit trails.
    pub jti: String,
}

/// Signing secret and token lifetimes.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry_mins: i64,
    pub refresh_token_expiry_days: i64,
}

impl JwtConfig {
    /// Read the JWT settings from the environment.
    ///
    /// `JWT_SECRET` is mandatory and must be non-empty; the server refuses
    /// to start without it. `JWT_ACCESS_EXPIRY_MINS` (15) and
    /// `JWT_REFRESH_EXPIRY_DAYS` (7) are optional overrides.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        Self {
            secret,
            access_token_expiry_mins: env_i64("JWT_ACCESS_EXPIRY_MINS", ACCESS_EXPIRY_MINS_DEFAULT),
            refresh_token_expiry_days: env_i64(
                "JWT_REFRESH_EXPIRY_DAYS",
                REFRESH_EXPIRY_DAYS_DEFAULT,
            ),
        }
    }

    /// Sign a fresh access token for `user_id`.
    pub fn issue_access_token(
        &self,
        user_id: DbId,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let iat = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            exp: iat + self.access_token_expiry_mins * 60,
            iat,
            jti: Uuid::new_v4().to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }

    /// Verify signature and expiry, returning the claims on success.
    pub fn decode_access_token(
        &self,
        token: &str,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
    }
}

fn env_i64(name: &str, default: i64) -> i64 {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{name} must be an integer, got {raw:?}")),
        Err(_) => default,
    }
}

/// Mint a refresh token, returning `(plaintext, digest)`.
///
/// The plaintext goes to the client; only the digest touches the database.
pub fn new_refresh_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let digest = refresh_token_hash(&plaintext);
    (plaintext, digest)
}

/// SHA-256 hex digest of a refresh token, for storage and lookup.
pub fn refresh_token_hash(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}
