use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;

/// Human-readable application name, used in logs.
pub const APP_NAME: &str = "projectdesk";

/// Shared state available to all handlers via Axum's state extractor.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub permissions: Arc<dyn permissions::PermissionService>,
    pub config: config::Config,
}

/// App routes (projects API, health, and gateway emulation when enabled).
pub fn routes(config: &config::Config) -> Router<AppState> {
    let router = Router::new()
        .merge(features::health::routes())
        .merge(features::projects::routes());
    if config.invoke_route {
        router.merge(features::invoke::routes())
    } else {
        router
    }
}

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod event;
pub mod features;
pub mod permissions;
pub mod principal;
pub mod response;
