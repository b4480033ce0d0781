//! Caller identity. Authentication happens upstream: the gateway authorizer
//! verifies the caller and forwards its principal id with the request.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::app::{domain::UserId, error::AppError};

/// Header carrying the authorizer's principal id.
pub const PRINCIPAL_HEADER: &str = "x-principal-id";

/// Extractor for the authenticated caller. Rejects with 401 when the header is missing or blank.
#[derive(Debug, Clone)]
pub struct Principal(pub UserId);

#[async_trait::async_trait]
impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(PRINCIPAL_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;
        let user_id = UserId::new(raw).map_err(|_| AppError::Unauthorized)?;
        Ok(Principal(user_id))
    }
}
