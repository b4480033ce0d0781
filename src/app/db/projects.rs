use sqlx::{FromRow, SqliteExecutor};
use time::OffsetDateTime;

use crate::app::domain::ProjectId;

/// Database row for projects table.
#[derive(Debug, FromRow)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub owner_id: String,
    pub organization_id: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Data structure for inserting a new project. The id is assigned by the store.
pub struct NewProject {
    pub name: String,
    pub owner_id: String,
    pub organization_id: String,
}

/// Insert a new project and return the stored row.
pub async fn insert<'e, E>(
    executor: E,
    project: &NewProject,
) -> Result<Project, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let now = OffsetDateTime::now_utc().unix_timestamp();

    sqlx::query_as::<_, Project>(
        "INSERT INTO projects (name, owner_id, organization_id, created_at, updated_at) VALUES (?, ?, ?, ?, ?) \
         RETURNING id, name, owner_id, organization_id, created_at, updated_at",
    )
    .bind(&project.name)
    .bind(&project.owner_id)
    .bind(&project.organization_id)
    .bind(now)
    .bind(now)
    .fetch_one(executor)
    .await
}

/// Find a project by ID and organisation. Returns None if project doesn't exist or belongs to another org.
pub async fn find_by_id_and_org<'e, E>(
    executor: E,
    id: ProjectId,
    organization_id: &str,
) -> Result<Option<Project>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Project>(
        "SELECT id, name, owner_id, organization_id, created_at, updated_at FROM projects WHERE id = ? AND organization_id = ?",
    )
    .bind(id.get())
    .bind(organization_id)
    .fetch_optional(executor)
    .await
}

/// Count projects in an organisation.
pub async fn count_by_org<'e, E>(executor: E, organization_id: &str) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_scalar("SELECT count(*) FROM projects WHERE organization_id = ?")
        .bind(organization_id)
        .fetch_one(executor)
        .await
}
