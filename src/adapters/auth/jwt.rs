//! JWT implementation of the TokenService port.
//!
//! Tokens are signed with HS256 and carry the actor's id (sub), role, and
//! warehouse assignments, so the scoping rules can run without a user
//! lookup per request.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedActor, UserId, UserRole, WarehouseId};
use crate::ports::TokenService;

/// JWT claims structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Claims {
    /// Subject: the user id.
    sub: String,

    /// Role string tag.
    role: String,

    /// Assigned warehouse ids.
    warehouses: Vec<String>,

    /// Issued at (Unix timestamp).
    iat: i64,

    /// Expiration (Unix timestamp).
    exp: i64,
}

/// HS256 token service.
pub struct JwtTokenService {
    secret: String,
    token_lifetime_minutes: i64,
}

impl JwtTokenService {
    pub fn new(secret: String, token_lifetime_minutes: i64) -> Self {
        Self {
            secret,
            token_lifetime_minutes,
        }
    }
}

#[async_trait]
impl TokenService for JwtTokenService {
    async fn issue(&self, actor: &AuthenticatedActor) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now + Duration::minutes(self.token_lifetime_minutes);

        let claims = Claims {
            sub: actor.id.to_string(),
            role: actor.role.to_string(),
            warehouses: actor.warehouse_ids.iter().map(|w| w.to_string()).collect(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::MalformedClaims(format!("Failed to sign token: {}", e)))
    }

    async fn verify(&self, token: &str) -> Result<AuthenticatedActor, AuthError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        })?;

        claims_to_actor(&data.claims)
    }
}

fn claims_to_actor(claims: &Claims) -> Result<AuthenticatedActor, AuthError> {
    let id = claims
        .sub
        .parse::<UserId>()
        .map_err(|_| AuthError::MalformedClaims(format!("Invalid subject: {}", claims.sub)))?;
    let role = claims
        .role
        .parse::<UserRole>()
        .map_err(|_| AuthError::MalformedClaims(format!("Invalid role: {}", claims.role)))?;
    let warehouse_ids = claims
        .warehouses
        .iter()
        .map(|w| w.parse::<WarehouseId>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| AuthError::MalformedClaims("Invalid warehouse id".to_string()))?;

    Ok(AuthenticatedActor::new(id, role, warehouse_ids))
}
