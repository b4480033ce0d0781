use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::app::{db, domain::PermissionSet, error::AppError};

/// Request body for creating a project.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// Request body for adding a user to a project. `projectId` stays untyped until validated.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertUserRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<Value>,
}

/// Membership record returned to clients. `permission` is always a structured object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipResponse {
    pub user_id: String,
    pub project_id: i64,
    pub permission: PermissionSet,
    pub created_at: i64,
    pub updated_at: i64,
}

impl TryFrom<db::project_members::ProjectMember> for MembershipResponse {
    type Error = AppError;

    fn try_from(row: db::project_members::ProjectMember) -> Result<Self, Self::Error> {
        let permission = row
            .permission_set()
            .map_err(|e| AppError::Internal(format!("Corrupt role payload: {}", e)))?;
        Ok(Self {
            user_id: row.user_id,
            project_id: row.project_id,
            permission,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
