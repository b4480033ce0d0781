//! Serverless gateway events.
//!
//! A handler can be driven by the raw event an API gateway delivers:
//! `{"body": "<json>", "requestContext": {"authorizer": {"principalId": "..."}}}`.
//! [`dispatch`] runs the named handler and always returns a formatted
//! response; no error escapes.

use serde::Deserialize;
use strum_macros::{Display, EnumString};

use crate::app::{
    domain::UserId,
    error::AppError,
    features::projects::{service, types::MembershipResponse},
    response::ApiResponse,
    AppState,
};

/// Incoming gateway event.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayEvent {
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub request_context: RequestContext,
}

#[derive(Debug, Default, Deserialize)]
pub struct RequestContext {
    #[serde(default)]
    pub authorizer: Option<Authorizer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Authorizer {
    #[serde(default)]
    pub principal_id: Option<String>,
}

impl GatewayEvent {
    /// Caller identity set by the authorizer. Missing or blank → `Unauthorized`.
    pub fn principal(&self) -> Result<UserId, AppError> {
        let raw = self
            .request_context
            .authorizer
            .as_ref()
            .and_then(|a| a.principal_id.as_deref())
            .ok_or(AppError::Unauthorized)?;
        UserId::new(raw).map_err(|_| AppError::Unauthorized)
    }

    /// Request body; an absent body is treated as empty (and fails body parsing).
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
}

/// Handlers reachable through gateway events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Handler {
    CreateProject,
    InsertUserToProject,
}

/// Run a handler against an event and format the outcome.
pub async fn dispatch(
    state: &AppState,
    handler: Handler,
    event: &GatewayEvent,
) -> ApiResponse<MembershipResponse> {
    let outcome = match event.principal() {
        Ok(principal) => {
            tracing::debug!(%handler, user_id = %principal, "dispatching gateway event");
            match handler {
                Handler::CreateProject => {
                    service::create_project(state, &principal, event.body()).await
                }
                Handler::InsertUserToProject => {
                    service::insert_user_to_project(state, &principal, event.body()).await
                }
            }
        }
        Err(e) => Err(e),
    };

    match outcome {
        Ok(membership) => ApiResponse::ok(membership),
        Err(e) => e.into_api_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_gateway_event() {
        let event: GatewayEvent = serde_json::from_str(
            r#"{"body":"{\"name\":\"Alpha\"}","requestContext":{"authorizer":{"principalId":"u1"}}}"#,
        )
        .unwrap();
        assert_eq!(event.principal().unwrap().as_str(), "u1");
        assert_eq!(event.body(), r#"{"name":"Alpha"}"#);
    }

    #[test]
    fn missing_authorizer_is_unauthorized() {
        let event: GatewayEvent = serde_json::from_str(r#"{"body":"{}"}"#).unwrap();
        assert!(matches!(event.principal(), Err(AppError::Unauthorized)));

        let event: GatewayEvent =
            serde_json::from_str(r#"{"requestContext":{"authorizer":{"principalId":"  "}}}"#).unwrap();
        assert!(matches!(event.principal(), Err(AppError::Unauthorized)));
        assert_eq!(event.body(), "");
    }

    #[test]
    fn handler_names() {
        assert_eq!(Handler::from_str("create-project").unwrap(), Handler::CreateProject);
        assert_eq!(
            Handler::from_str("insert-user-to-project").unwrap(),
            Handler::InsertUserToProject
        );
        assert!(Handler::from_str("delete-project").is_err());
    }
}
