//! Authentication middleware
//!
//! Extractors that resolve the bearer token into a verified principal. Token
//! issuance is the external auth collaborator's job; this side only verifies
//! the signature and lifts `(userId, role)` out of the claims.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::auth::{self, JwtError, Principal};
use crate::config::Config;
use crate::error::ApiError;

/// Extractor for authenticated users
///
/// Verifies the JWT from the Authorization header and yields the principal.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(AuthenticatedUser(principal): AuthenticatedUser) -> impl IntoResponse {
///     format!("Hello, user {}", principal.id)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Principal);

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    Arc<Config>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    ApiError::Unauthorized(
                        "Authorization header with Bearer token required".to_string(),
                    )
                })?;

        let config = Arc::<Config>::from_ref(state);

        let principal = auth::verify_token(bearer.token(), &config.jwt_secret).map_err(|e| {
            match e {
                JwtError::TokenExpired => ApiError::Unauthorized("Token has expired".to_string()),
                _ => ApiError::Unauthorized("Invalid token".to_string()),
            }
        })?;

        Ok(AuthenticatedUser(principal))
    }
}

/// Extractor that additionally requires the admin role
#[derive(Debug, Clone)]
pub struct AdminUser(pub Principal);

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    Arc<Config>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthenticatedUser(principal) =
            AuthenticatedUser::from_request_parts(parts, state).await?;

        if !auth::is_admin(&principal) {
            return Err(ApiError::Forbidden("Admin access required".to_string()));
        }

        Ok(AdminUser(principal))
    }
}
