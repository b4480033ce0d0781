use axum::{extract::State, routing::post, Router};

use super::{service, types::MembershipResponse};
use crate::app::{error::AppError, principal::Principal, response::ApiResponse, AppState};

/// POST /api/projects/members — Add a user to a project in their organization.
pub async fn insert_user_to_project(
    Principal(user_id): Principal,
    State(state): State<AppState>,
    body: String,
) -> Result<ApiResponse<MembershipResponse>, AppError> {
    let membership = service::insert_user_to_project(&state, &user_id, &body).await?;
    Ok(ApiResponse::ok(membership))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/projects/members", post(insert_user_to_project))
}
