use validator::ValidationError;

/// Project name domain type. Once constructed, guaranteed non-empty and trimmed.
#[derive(Debug, Clone)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate a request's `name` field. Missing, null, empty, and whitespace-only names are rejected.
    pub fn new(name: Option<String>) -> Result<Self, ValidationError> {
        match name.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => Ok(Self(t.to_string())),
            _ => {
                let mut error = ValidationError::new("invalid_project_name");
                error.message = Some("Project name cannot be empty".into());
                Err(error)
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_name() {
        let name = ProjectName::new(Some("Alpha".to_string())).unwrap();
        assert_eq!(name.as_str(), "Alpha");
    }

    #[test]
    fn trims_whitespace() {
        let name = ProjectName::new(Some("  Alpha Beta ".to_string())).unwrap();
        assert_eq!(name.as_str(), "Alpha Beta");
    }

    #[test]
    fn rejects_missing_empty_and_blank() {
        assert!(ProjectName::new(None).is_err());
        assert!(ProjectName::new(Some(String::new())).is_err());
        assert!(ProjectName::new(Some(" \t\n ".to_string())).is_err());
    }
}
