#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::Body;
use http_body_util::BodyExt;
use projectdesk::app::{
    self,
    db,
    domain::{Action, OrganizationId, PermissionSet, ProjectId, Realm, UserId},
    permissions::{DatabasePermissions, PermissionError, PermissionService},
    AppState,
};
use projectdesk::create_router;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

pub fn test_state(pool: SqlitePool, permissions: Arc<dyn PermissionService>) -> AppState {
    AppState {
        db: pool,
        permissions,
        config: app::config::Config::for_tests(),
    }
}

/// Router backed by the database permission service.
pub fn test_router(pool: SqlitePool) -> axum::Router {
    let permissions = Arc::new(DatabasePermissions::new(pool.clone()));
    create_router(test_state(pool, permissions))
}

/// Router backed by a fixed-answer permission service that counts its calls.
pub fn recording_router(pool: SqlitePool, answer: bool) -> (axum::Router, Arc<RecordingPermissions>) {
    let permissions = Arc::new(RecordingPermissions::new(answer));
    let router = create_router(test_state(pool, permissions.clone()));
    (router, permissions)
}

/// Permission service double: always answers `answer`, counts calls.
pub struct RecordingPermissions {
    answer: bool,
    calls: AtomicUsize,
}

impl RecordingPermissions {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl PermissionService for RecordingPermissions {
    async fn has_permission(&self, _user_id: &UserId, _action: &Action) -> Result<bool, PermissionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.answer)
    }

    async fn has_project_permission(
        &self,
        _user_id: &UserId,
        _project_id: ProjectId,
        _action: &Action,
    ) -> Result<bool, PermissionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.answer)
    }
}

/// Create an organization and return its id.
pub async fn create_organization(pool: &SqlitePool, name: &str) -> String {
    let organization = db::organizations::NewOrganization {
        id: OrganizationId::new(),
        name: name.to_string(),
    };
    db::organizations::insert(pool, &organization).await.unwrap();
    organization.id.as_str()
}

pub async fn create_user(pool: &SqlitePool, user_id: &str, organization_id: &str) -> UserId {
    let id = UserId::new(user_id).unwrap();
    let user = db::NewUser {
        id: id.clone(),
        organization_id: organization_id.to_string(),
    };
    db::users::insert(pool, &user).await.unwrap();
    id
}

/// Create a user allowed to create projects.
pub async fn create_project_creator(pool: &SqlitePool, user_id: &str, organization_id: &str) -> UserId {
    let id = create_user(pool, user_id, organization_id).await;
    db::user_permissions::grant(pool, &id, Realm::Project, "create")
        .await
        .unwrap();
    id
}

/// Insert a project with a fixed id (bypasses the autoincrement).
pub async fn insert_project_with_id(
    pool: &SqlitePool,
    id: i64,
    name: &str,
    owner_id: &str,
    organization_id: &str,
) {
    sqlx::query(
        "INSERT INTO projects (id, name, owner_id, organization_id, created_at, updated_at) VALUES (?, ?, ?, ?, 0, 0)",
    )
    .bind(id)
    .bind(name)
    .bind(owner_id)
    .bind(organization_id)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn add_admin(pool: &SqlitePool, user_id: &str, project_id: i64) {
    let written = db::project_members::add_member(pool, user_id, project_id, &PermissionSet::admin())
        .await
        .unwrap();
    assert_eq!(written, 1);
}

pub async fn member_count(pool: &SqlitePool, project_id: i64) -> i64 {
    db::project_members::count_for_project(pool, project_id)
        .await
        .unwrap()
}

pub async fn project_count(pool: &SqlitePool, organization_id: &str) -> i64 {
    db::projects::count_by_org(pool, organization_id).await.unwrap()
}

/// POST a raw body, optionally as a principal. Returns status and parsed JSON body.
pub async fn post_raw(
    app: &axum::Router,
    uri: &str,
    principal: Option<&str>,
    body: &str,
) -> (http::StatusCode, serde_json::Value) {
    let mut builder = http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(p) = principal {
        builder = builder.header("x-principal-id", p);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
    (status, body)
}

pub async fn post_json(
    app: &axum::Router,
    uri: &str,
    principal: Option<&str>,
    body: serde_json::Value,
) -> (http::StatusCode, serde_json::Value) {
    post_raw(app, uri, principal, &body.to_string()).await
}

/// Make every membership write fail with a database error carrying `message`.
pub async fn fail_membership_writes(pool: &SqlitePool, message: &str) {
    sqlx::query(&format!(
        "CREATE TRIGGER fail_project_members BEFORE INSERT ON project_members \
         BEGIN SELECT RAISE(ABORT, '{}'); END",
        message
    ))
    .execute(pool)
    .await
    .unwrap();
}
