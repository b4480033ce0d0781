use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::{Action, Realm};

/// Role a member holds within one project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProjectRole {
    Admin,
    Member,
}

impl ProjectRole {
    /// Whether this role allows a project-scoped action. Roles never grant outside `Realm::Specific`.
    pub fn allows(&self, action: &Action) -> bool {
        if action.realm != Realm::Specific {
            return false;
        }
        matches!(
            (self, action.action),
            (ProjectRole::Admin, _) | (ProjectRole::Member, "read")
        )
    }
}

/// Role payload stored on a membership, e.g. `{"specific":["admin"]}`.
///
/// Kept structured everywhere except the `project_members.permission` column,
/// where it is stored as JSON text (see [`PermissionSet::to_column`] and
/// [`PermissionSet::from_column`]).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PermissionSet {
    #[serde(default)]
    pub specific: Vec<ProjectRole>,
}

impl PermissionSet {
    /// Payload given to a project's creator.
    pub fn admin() -> Self {
        Self {
            specific: vec![ProjectRole::Admin],
        }
    }

    /// Payload given to members added without an explicit role.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn allows(&self, action: &Action) -> bool {
        self.specific.iter().any(|role| role.allows(action))
    }

    /// Serialize for the store.
    pub fn to_column(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize a value read from the store.
    pub fn from_column(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_payload_column_form() {
        assert_eq!(
            PermissionSet::admin().to_column().unwrap(),
            r#"{"specific":["admin"]}"#
        );
    }

    #[test]
    fn parses_stored_payload() {
        let set = PermissionSet::from_column(r#"{"specific":["member","admin"]}"#).unwrap();
        assert_eq!(set.specific, vec![ProjectRole::Member, ProjectRole::Admin]);
    }

    #[test]
    fn missing_specific_key_is_empty() {
        assert_eq!(PermissionSet::from_column("{}").unwrap(), PermissionSet::empty());
    }

    #[test]
    fn rejects_unknown_role_and_garbage() {
        assert!(PermissionSet::from_column(r#"{"specific":["root"]}"#).is_err());
        assert!(PermissionSet::from_column("admin").is_err());
    }

    #[test]
    fn admin_allows_every_specific_action() {
        let set = PermissionSet::admin();
        assert!(set.allows(&Action::SPECIFIC_INSERT));
        assert!(set.allows(&Action::SPECIFIC_READ));
        assert!(!set.allows(&Action::PROJECT_CREATE));
    }

    #[test]
    fn member_only_reads() {
        let set = PermissionSet {
            specific: vec![ProjectRole::Member],
        };
        assert!(set.allows(&Action::SPECIFIC_READ));
        assert!(!set.allows(&Action::SPECIFIC_INSERT));
    }

    #[test]
    fn empty_allows_nothing() {
        assert!(!PermissionSet::empty().allows(&Action::SPECIFIC_READ));
    }
}
