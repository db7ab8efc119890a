use thiserror::Error;

/// A single schema violation: which field failed and why.
///
/// `path` is a dotted path into the raw input (`"title"`, `"dueDate"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Input failed schema validation.
///
/// Carries every violation found in one pass so the client sees the full
/// picture instead of the first failing field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation failed: {}", self.summary())]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Single-violation shorthand, used for non-field failures such as an
    /// unparseable request body.
    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            violations: vec![Violation::new(path, message)],
        }
    }

    fn summary(&self) -> String {
        self.violations
            .iter()
            .map(|v| format!("{}: {}", v.path, v.message))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
