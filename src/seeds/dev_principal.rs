use std::env;

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::app::db;
use crate::app::domain::{OrganizationId, Realm, UserId};
use crate::seeds::{Seed, SeedOutcome};

/// Creates an organization and a user that may create projects, so a local
/// gateway (or `PERMISSION_ADAPTER=database`) has a working principal.
/// Opt in with `SEED_PRINCIPAL_ID`; `SEED_ORGANIZATION_NAME` names the organization.
pub struct DevPrincipal {
    principal_id: Option<String>,
    organization_name: String,
}

impl DevPrincipal {
    pub fn new(principal_id: Option<String>, organization_name: impl Into<String>) -> Self {
        Self {
            principal_id,
            organization_name: organization_name.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(
            env::var("SEED_PRINCIPAL_ID").ok(),
            env::var("SEED_ORGANIZATION_NAME").unwrap_or_else(|_| "Development".to_string()),
        )
    }
}

#[async_trait]
impl Seed for DevPrincipal {
    fn version(&self) -> i64 {
        20260301120000
    }

    fn description(&self) -> &str {
        "dev_principal"
    }

    async fn run(&self, pool: &SqlitePool) -> Result<SeedOutcome, sqlx::Error> {
        let user_id = match self.principal_id.as_deref().map(UserId::new) {
            Some(Ok(id)) => id,
            _ => return Ok(SeedOutcome::Skipped),
        };

        let mut tx = pool.begin().await?;

        if db::users::find_by_id(&mut *tx, &user_id).await?.is_none() {
            let organization = db::organizations::NewOrganization {
                id: OrganizationId::new(),
                name: self.organization_name.clone(),
            };
            db::organizations::insert(&mut *tx, &organization).await?;
            db::users::insert(
                &mut *tx,
                &db::NewUser {
                    id: user_id.clone(),
                    organization_id: organization.id.as_str(),
                },
            )
            .await?;
        }
        db::user_permissions::grant(&mut *tx, &user_id, Realm::Project, "create").await?;

        tx.commit().await?;
        Ok(SeedOutcome::Applied)
    }
}
