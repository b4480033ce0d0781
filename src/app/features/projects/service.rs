//! Request pipelines shared by the REST routes and the gateway-event entry point.
//!
//! Each pipeline runs parse → validate → authorize → lookup → mutate and
//! stops at the first failure. There is no retry and no rollback: a project
//! whose owner membership fails to write stays persisted.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::types::{CreateProjectRequest, InsertUserRequest, MembershipResponse};
use crate::app::{
    db,
    domain::{Action, PermissionSet, ProjectId, ProjectName, UserId},
    error::AppError,
    AppState,
};

pub const INVALID_BODY: &str = "Request doesn't contain a valid object";
pub const INVALID_USER_ID: &str = "Request doesn't contain a valid userId";
pub const INVALID_PROJECT_ID: &str = "Request doesn't contain a valid projectId";
pub const USER_NOT_FOUND: &str = "User not found";
pub const PROJECT_NOT_FOUND: &str = "Project not found";
pub const ALREADY_ADDED: &str = "User already added to this project";

/// Parse a request body that must be a JSON object.
fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    let value: Value =
        serde_json::from_str(body).map_err(|_| AppError::Validation(INVALID_BODY.to_string()))?;
    if !value.is_object() {
        return Err(AppError::Validation(INVALID_BODY.to_string()));
    }
    serde_json::from_value(value).map_err(|_| AppError::Validation(INVALID_BODY.to_string()))
}

/// Create a project under the caller's organization and make the caller its admin.
pub async fn create_project(
    state: &AppState,
    principal: &UserId,
    body: &str,
) -> Result<MembershipResponse, AppError> {
    let request: CreateProjectRequest = parse_body(body)?;
    let name = ProjectName::new(request.name)
        .map_err(|_| AppError::Validation(INVALID_BODY.to_string()))?;

    let action = Action::PROJECT_CREATE;
    if !state.permissions.has_permission(principal, &action).await? {
        tracing::warn!(user_id = %principal, %action, "permission denied");
        return Err(AppError::Forbidden);
    }

    let user = db::users::find_scope(&state.db, principal)
        .await?
        .ok_or_else(|| AppError::Internal(format!("No user record for principal {}", principal)))?;

    let project = db::projects::insert(
        &state.db,
        &db::projects::NewProject {
            name: name.as_str().to_string(),
            owner_id: user.id.clone(),
            organization_id: user.organization_id.clone(),
        },
    )
    .await?;
    tracing::info!(
        project_id = project.id,
        organization_id = %project.organization_id,
        owner_id = %project.owner_id,
        "project created"
    );

    db::project_members::add_member(&state.db, &user.id, project.id, &PermissionSet::admin()).await?;

    let membership = db::project_members::find(&state.db, &user.id, project.id)
        .await?
        .ok_or_else(|| AppError::Internal("Owner membership missing after insert".to_string()))?;

    MembershipResponse::try_from(membership)
}

/// Add an existing user to a project of the same organization.
///
/// An unknown target user is a 400: the id comes from the request body. An unknown caller in
/// [`create_project`] is a 500 because the authorizer vouched for it, so the store is inconsistent.
pub async fn insert_user_to_project(
    state: &AppState,
    principal: &UserId,
    body: &str,
) -> Result<MembershipResponse, AppError> {
    let request: InsertUserRequest = parse_body(body)?;
    let user_id = match request.user_id.as_deref().map(UserId::new) {
        Some(Ok(id)) => id,
        _ => return Err(AppError::Validation(INVALID_USER_ID.to_string())),
    };
    let project_id = match request.project_id.as_ref().map(ProjectId::from_json) {
        Some(Ok(id)) => id,
        _ => return Err(AppError::Validation(INVALID_PROJECT_ID.to_string())),
    };

    let action = Action::SPECIFIC_INSERT;
    if !state
        .permissions
        .has_project_permission(principal, project_id, &action)
        .await?
    {
        tracing::warn!(user_id = %principal, %project_id, %action, "permission denied");
        return Err(AppError::Forbidden);
    }

    let user = db::users::find_scope(&state.db, &user_id)
        .await?
        .ok_or_else(|| AppError::BusinessRule(USER_NOT_FOUND.to_string()))?;

    // Scoped to the target user's organization: a project elsewhere is reported as missing.
    let project = db::projects::find_by_id_and_org(&state.db, project_id, &user.organization_id)
        .await?
        .ok_or_else(|| AppError::BusinessRule(PROJECT_NOT_FOUND.to_string()))?;

    let written =
        db::project_members::add_member(&state.db, &user.id, project.id, &PermissionSet::empty())
            .await?;
    if written == 0 {
        tracing::debug!(user_id = %user.id, project_id = project.id, "membership already exists");
        return Err(AppError::BusinessRule(ALREADY_ADDED.to_string()));
    }
    tracing::info!(user_id = %user.id, project_id = project.id, added_by = %principal, "user added to project");

    let membership = db::project_members::find(&state.db, &user.id, project.id)
        .await?
        .ok_or_else(|| AppError::Internal("Membership missing after insert".to_string()))?;

    MembershipResponse::try_from(membership)
}
