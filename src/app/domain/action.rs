use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Named category of protected actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Realm {
    /// Organization-wide project actions, e.g. creating a project.
    Project,
    /// Actions scoped to one project, decided by the caller's membership in it.
    Specific,
}

/// Action descriptor handed to the permission service: `{realm, action}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Action {
    pub realm: Realm,
    pub action: &'static str,
}

impl Action {
    /// Create a project in the caller's organization.
    pub const PROJECT_CREATE: Action = Action {
        realm: Realm::Project,
        action: "create",
    };

    /// Add a user to a specific project.
    pub const SPECIFIC_INSERT: Action = Action {
        realm: Realm::Specific,
        action: "insert",
    };

    /// Read a specific project.
    pub const SPECIFIC_READ: Action = Action {
        realm: Realm::Specific,
        action: "read",
    };
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.realm, self.action)
    }
}
