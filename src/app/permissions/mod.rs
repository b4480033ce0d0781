use std::sync::Arc;

use sqlx::SqlitePool;

use crate::app::domain::{Action, ProjectId, UserId};

/// Abstract interface for authorization decisions. Swappable per environment.
#[async_trait::async_trait]
pub trait PermissionService: Send + Sync {
    /// Whether the principal may perform an organization-wide action.
    async fn has_permission(&self, user_id: &UserId, action: &Action) -> Result<bool, PermissionError>;

    /// Whether the principal may perform an action on one project.
    async fn has_project_permission(
        &self,
        user_id: &UserId,
        project_id: ProjectId,
        action: &Action,
    ) -> Result<bool, PermissionError>;
}

/// Errors that can occur while deciding a permission.
#[derive(Debug, thiserror::Error)]
pub enum PermissionError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("{0}")]
    Store(#[from] sqlx::Error),
    #[error("Corrupt role payload: {0}")]
    Payload(#[from] serde_json::Error),
}

pub use allow_all::AllowAll;
pub use database::DatabasePermissions;

mod allow_all;
mod database;

/// Build the permission service from config.
pub fn from_config(
    config: &crate::app::config::Config,
    pool: SqlitePool,
) -> Result<Arc<dyn PermissionService>, PermissionError> {
    match config.permission_adapter.as_str() {
        "database" => Ok(Arc::new(DatabasePermissions::new(pool))),
        "allow_all" => Ok(Arc::new(AllowAll)),
        _ => Err(PermissionError::Config(format!(
            "Unknown PERMISSION_ADAPTER: {}",
            config.permission_adapter
        ))),
    }
}
