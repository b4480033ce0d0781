use sqlx::{FromRow, SqliteExecutor};
use time::OffsetDateTime;

use crate::app::domain::{PermissionSet, ProjectId, UserId};

/// Database row for project_members table. `permission` is the serialized role payload.
#[derive(Debug, FromRow)]
pub struct ProjectMember {
    pub user_id: String,
    pub project_id: i64,
    pub permission: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl ProjectMember {
    /// Deserialize the stored role payload.
    pub fn permission_set(&self) -> Result<PermissionSet, serde_json::Error> {
        PermissionSet::from_column(&self.permission)
    }
}

/// Errors from writing a membership.
#[derive(Debug, thiserror::Error)]
pub enum AddMemberError {
    #[error("{0}")]
    Database(#[from] sqlx::Error),
    #[error("role payload could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Add a user to a project with the given role payload.
/// Returns the number of rows written: 0 when the pair already exists (INSERT OR IGNORE).
pub async fn add_member<'e, E>(
    executor: E,
    user_id: &str,
    project_id: i64,
    permission: &PermissionSet,
) -> Result<u64, AddMemberError>
where
    E: SqliteExecutor<'e>,
{
    let payload = permission.to_column()?;
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let result = sqlx::query(
        "INSERT OR IGNORE INTO project_members (user_id, project_id, permission, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(user_id)
    .bind(project_id)
    .bind(payload)
    .bind(now)
    .bind(now)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

/// Find one membership.
pub async fn find<'e, E>(
    executor: E,
    user_id: &str,
    project_id: i64,
) -> Result<Option<ProjectMember>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, ProjectMember>(
        "SELECT user_id, project_id, permission, created_at, updated_at FROM project_members WHERE user_id = ? AND project_id = ?",
    )
    .bind(user_id)
    .bind(project_id)
    .fetch_optional(executor)
    .await
}

/// Find the caller's membership in a project, if any.
pub async fn find_for_user<'e, E>(
    executor: E,
    user_id: &UserId,
    project_id: ProjectId,
) -> Result<Option<ProjectMember>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    find(executor, user_id.as_str(), project_id.get()).await
}

/// Count members of a project.
pub async fn count_for_project<'e, E>(executor: E, project_id: i64) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_scalar("SELECT count(*) FROM project_members WHERE project_id = ?")
        .bind(project_id)
        .fetch_one(executor)
        .await
}
