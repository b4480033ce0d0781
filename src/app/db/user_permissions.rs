use sqlx::SqliteExecutor;
use time::OffsetDateTime;

use crate::app::domain::{Action, Realm, UserId};

/// Wildcard action: grants every action of a realm.
pub const ANY_ACTION: &str = "*";

/// Grant a realm-level action to a user. Idempotent.
pub async fn grant<'e, E>(
    executor: E,
    user_id: &UserId,
    realm: Realm,
    action: &str,
) -> Result<(), sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let now = OffsetDateTime::now_utc().unix_timestamp();
    sqlx::query(
        "INSERT OR IGNORE INTO user_permissions (user_id, realm, action, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(user_id.as_str())
    .bind(realm.to_string())
    .bind(action)
    .bind(now)
    .execute(executor)
    .await?;
    Ok(())
}

/// Check whether a user holds a grant for the action, directly or via the realm wildcard.
pub async fn is_granted<'e, E>(
    executor: E,
    user_id: &UserId,
    action: &Action,
) -> Result<bool, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let count: i64 = sqlx::query_scalar(
        "SELECT count(*) FROM user_permissions WHERE user_id = ? AND realm = ? AND action IN (?, ?)",
    )
    .bind(user_id.as_str())
    .bind(action.realm.to_string())
    .bind(action.action)
    .bind(ANY_ACTION)
    .fetch_one(executor)
    .await?;
    Ok(count > 0)
}
