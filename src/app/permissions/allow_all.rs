use async_trait::async_trait;

use super::{PermissionError, PermissionService};
use crate::app::domain::{Action, ProjectId, UserId};

/// Grants everything. For local emulation only; logs every decision.
#[derive(Debug)]
pub struct AllowAll;

#[async_trait]
impl PermissionService for AllowAll {
    async fn has_permission(&self, user_id: &UserId, action: &Action) -> Result<bool, PermissionError> {
        tracing::debug!(user_id = %user_id, %action, "permission granted (allow_all)");
        Ok(true)
    }

    async fn has_project_permission(
        &self,
        user_id: &UserId,
        project_id: ProjectId,
        action: &Action,
    ) -> Result<bool, PermissionError> {
        tracing::debug!(user_id = %user_id, %project_id, %action, "permission granted (allow_all)");
        Ok(true)
    }
}
