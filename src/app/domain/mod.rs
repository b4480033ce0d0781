pub mod action;
pub mod organization_id;
pub mod project_id;
pub mod project_name;
pub mod project_role;
pub mod user_id;

pub use action::{Action, Realm};
pub use organization_id::OrganizationId;
pub use project_id::ProjectId;
pub use project_name::ProjectName;
pub use project_role::{PermissionSet, ProjectRole};
pub use user_id::UserId;
