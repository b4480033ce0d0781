mod dev_principal;

use async_trait::async_trait;
use sqlx::SqlitePool;

pub use dev_principal::DevPrincipal;

/// Outcome of running a seed. Skipped seeds are not recorded so they may run again later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Seed executed and made changes; record in _projectdesk_seeds.
    Applied,
    /// Seed chose not to run (e.g. env not set); do not record.
    Skipped,
}

/// Which already-applied seeds to run again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Force {
    None,
    All,
    Version(i64),
}

impl Force {
    fn includes(&self, version: i64) -> bool {
        match self {
            Force::None => false,
            Force::All => true,
            Force::Version(v) => *v == version,
        }
    }
}

/// A database seed. Seeds run in version order and are tracked for idempotency.
#[async_trait]
pub trait Seed: Send + Sync {
    /// Unique version identifier (timestamp format: YYYYMMDDHHMMSS).
    fn version(&self) -> i64;

    /// Human-readable description of the seed.
    fn description(&self) -> &str;

    /// Execute the seed. Uses the db layer; no raw SQL.
    /// Return Skipped when the seed opts out (e.g. missing env); it will not be recorded.
    async fn run(&self, pool: &SqlitePool) -> Result<SeedOutcome, sqlx::Error>;
}

/// All seeds in execution order (sorted by version).
pub fn all_seeds() -> Vec<Box<dyn Seed>> {
    let mut seeds: Vec<Box<dyn Seed>> = vec![Box::new(DevPrincipal::from_env())];
    seeds.sort_by_key(|s| s.version());
    seeds
}

/// Run pending seeds, re-running applied ones selected by `force`.
pub async fn run_seeds(pool: &SqlitePool, force: Force) -> Result<(), sqlx::Error> {
    run(pool, all_seeds(), force).await
}

/// Run the given seeds against the pool.
pub async fn run(pool: &SqlitePool, seeds: Vec<Box<dyn Seed>>, force: Force) -> Result<(), sqlx::Error> {
    ensure_seeds_table(pool).await?;
    let applied = applied_versions(pool).await?;
    for seed in seeds {
        let version = seed.version();
        let description = seed.description();
        let already_applied = applied.contains(&version);
        let forced = force.includes(version);

        if already_applied && !forced {
            tracing::debug!(%description, "seed already applied");
            continue;
        }
        if already_applied {
            forget_seed(pool, version).await?;
        }

        match seed.run(pool).await? {
            SeedOutcome::Applied => {
                record_seed(pool, version, description).await?;
                tracing::info!(%description, "seed applied");
            }
            SeedOutcome::Skipped => tracing::info!(%description, "seed skipped"),
        }
    }
    Ok(())
}

async fn ensure_seeds_table(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS _projectdesk_seeds (
            version INTEGER PRIMARY KEY NOT NULL,
            description TEXT NOT NULL,
            installed_on INTEGER NOT NULL DEFAULT (unixepoch()),
            success INTEGER NOT NULL DEFAULT 1
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn applied_versions(pool: &SqlitePool) -> Result<Vec<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT version FROM _projectdesk_seeds")
        .fetch_all(pool)
        .await
}

async fn forget_seed(pool: &SqlitePool, version: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM _projectdesk_seeds WHERE version = ?")
        .bind(version)
        .execute(pool)
        .await?;
    Ok(())
}

async fn record_seed(
    pool: &SqlitePool,
    version: i64,
    description: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO _projectdesk_seeds (version, description) VALUES (?, ?)")
        .bind(version)
        .bind(description)
        .execute(pool)
        .await?;
    Ok(())
}
