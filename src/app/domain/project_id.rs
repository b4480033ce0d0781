use serde::Serialize;
use serde_json::Value;
use validator::ValidationError;

/// Numeric project identifier (the `projects.id` autoincrement key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectId(i64);

impl ProjectId {
    pub fn new(id: i64) -> Result<Self, ValidationError> {
        if id <= 0 {
            return Err(invalid());
        }
        Ok(Self(id))
    }

    /// Parse a request field. Accepts a JSON number with no fractional part (`5`, `5.0`, `1e1`)
    /// or a string of decimal digits. Null, fractions, booleans, and anything non-numeric are rejected.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        match value {
            Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Self::new(i),
                (None, Some(f)) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                    Self::new(f as i64)
                }
                _ => Err(invalid()),
            },
            Value::String(s) => {
                let t = s.trim();
                if t.is_empty() || !t.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                t.parse::<i64>().map_err(|_| invalid()).and_then(Self::new)
            }
            _ => Err(invalid()),
        }
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

fn invalid() -> ValidationError {
    let mut error = ValidationError::new("invalid_project_id");
    error.message = Some("Project id must be a positive integer".into());
    error
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
