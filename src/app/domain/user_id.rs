use validator::ValidationError;

/// User ID domain type. The identifier issued by the upstream authorizer: opaque, trimmed, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Parse from string. Trims whitespace; empty or whitespace-only input is rejected.
    pub fn new(id: impl AsRef<str>) -> Result<Self, ValidationError> {
        let t = id.as_ref().trim();
        if t.is_empty() {
            let mut error = ValidationError::new("empty_user_id");
            error.message = Some("User id cannot be empty".into());
            return Err(error);
        }
        Ok(Self(t.to_string()))
    }

    /// Get as string slice for storage/display.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
