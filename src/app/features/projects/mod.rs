mod create;
mod members;
pub mod service;
pub mod types;

use axum::Router;

use crate::app::AppState;

/// Projects routes (create, add member).
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(create::routes())
        .merge(members::routes())
}
