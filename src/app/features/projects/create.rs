use axum::{extract::State, routing::post, Router};

use super::{service, types::MembershipResponse};
use crate::app::{error::AppError, principal::Principal, response::ApiResponse, AppState};

/// POST /api/projects — Create a project; the caller becomes its admin member.
pub async fn create_project(
    Principal(user_id): Principal,
    State(state): State<AppState>,
    body: String,
) -> Result<ApiResponse<MembershipResponse>, AppError> {
    let membership = service::create_project(&state, &user_id, &body).await?;
    Ok(ApiResponse::ok(membership))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/projects", post(create_project))
}
