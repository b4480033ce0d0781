pub mod organizations;
pub mod project_members;
pub mod projects;
pub mod user_permissions;
pub mod users;

pub use users::{NewUser, User, UserScope};
