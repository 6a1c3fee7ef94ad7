use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use secrecy::ExposeSecret;
use service_core::error::AppError;
use subtle::ConstantTimeEq;

use crate::config::AuthConfig;

/// Bearer token taken from the `Authorization` header.
///
/// A missing or non-bearer header is rejected with 403. The token is only
/// compared when `AuthConfig::api_token` is set; otherwise any token passes.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    AuthConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::Forbidden(anyhow::anyhow!("Not authenticated")))?;

        let token = bearer.token();
        if token.is_empty() {
            return Err(AppError::Forbidden(anyhow::anyhow!("Not authenticated")));
        }

        let auth = AuthConfig::from_ref(state);
        if let Some(expected) = auth.api_token.as_ref() {
            let matches: bool = token
                .as_bytes()
                .ct_eq(expected.expose_secret().as_bytes())
                .into();
            if !matches {
                tracing::warn!("Rejected request with invalid bearer token");
                return Err(AppError::Unauthorized(anyhow::anyhow!(
                    "Invalid authentication credentials"
                )));
            }
        }

        Ok(BearerToken(token.to_string()))
    }
}
