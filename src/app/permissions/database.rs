use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{PermissionError, PermissionService};
use crate::app::{
    db,
    domain::{Action, ProjectId, Realm, UserId},
};

/// Permission service backed by the application database.
///
/// Organization-wide actions are decided by `user_permissions` grants.
/// `specific` actions are decided by the role payload on the caller's
/// membership in the target project; other realms fall back to grants.
#[derive(Debug, Clone)]
pub struct DatabasePermissions {
    pool: SqlitePool,
}

impl DatabasePermissions {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PermissionService for DatabasePermissions {
    async fn has_permission(&self, user_id: &UserId, action: &Action) -> Result<bool, PermissionError> {
        Ok(db::user_permissions::is_granted(&self.pool, user_id, action).await?)
    }

    async fn has_project_permission(
        &self,
        user_id: &UserId,
        project_id: ProjectId,
        action: &Action,
    ) -> Result<bool, PermissionError> {
        if action.realm != Realm::Specific {
            return self.has_permission(user_id, action).await;
        }

        let membership = db::project_members::find_for_user(&self.pool, user_id, project_id).await?;
        match membership {
            Some(m) => Ok(m.permission_set()?.allows(action)),
            None => Ok(false),
        }
    }
}
