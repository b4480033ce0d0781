use sqlx::{FromRow, SqliteExecutor};
use time::OffsetDateTime;

use crate::app::domain::UserId;

/// Database row for users table.
#[derive(Debug, FromRow)]
pub struct User {
    pub id: String,
    pub organization_id: String,
    pub created_at: i64,
}

/// A user projected to what request handlers need: identity and tenant.
#[derive(Debug, Clone, FromRow)]
pub struct UserScope {
    pub id: String,
    pub organization_id: String,
}

/// Data structure for inserting a new user.
pub struct NewUser {
    pub id: UserId,
    pub organization_id: String,
}

/// Find a user's identity and organization by ID.
pub async fn find_scope<'e, E>(
    executor: E,
    user_id: &UserId,
) -> Result<Option<UserScope>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, UserScope>("SELECT id, organization_id FROM users WHERE id = ?")
        .bind(user_id.as_str())
        .fetch_optional(executor)
        .await
}

/// Find a user by ID.
pub async fn find_by_id<'e, E>(
    executor: E,
    user_id: &UserId,
) -> Result<Option<User>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, User>("SELECT id, organization_id, created_at FROM users WHERE id = ?")
        .bind(user_id.as_str())
        .fetch_optional(executor)
        .await
}

/// Insert a new user into the database.
pub async fn insert<'e, E>(
    executor: E,
    user: &NewUser,
) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let now = OffsetDateTime::now_utc().unix_timestamp();

    sqlx::query("INSERT INTO users (id, organization_id, created_at) VALUES (?, ?, ?)")
        .bind(user.id.as_str())
        .bind(&user.organization_id)
        .bind(now)
        .execute(executor)
        .await?;

    Ok(())
}
