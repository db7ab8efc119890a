use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use crate::types::db;
use crate::types::dto::to_rfc3339;

/// Priority of a todo as exposed over the API.
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[oai(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Parse the lowercase wire value; anything else is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

impl From<Priority> for db::todo::Priority {
    fn from(p: Priority) -> Self {
        match p {
            Priority::Low => db::todo::Priority::Low,
            Priority::Medium => db::todo::Priority::Medium,
            Priority::High => db::todo::Priority::High,
        }
    }
}

impl From<db::todo::Priority> for Priority {
    fn from(p: db::todo::Priority) -> Self {
        match p {
            db::todo::Priority::Low => Priority::Low,
            db::todo::Priority::Medium => Priority::Medium,
            db::todo::Priority::High => Priority::High,
        }
    }
}

/// Response model representing a todo
#[derive(Object, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoResponse {
    /// Server-assigned identifier
    pub id: i64,

    /// Title of the todo
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Completion flag
    pub completed: bool,

    /// Priority level
    pub priority: Priority,

    /// Due date (ISO 8601 format)
    #[oai(rename = "dueDate")]
    #[serde(rename = "dueDate")]
    pub due_date: Option<String>,

    /// Creation timestamp (ISO 8601 format)
    #[oai(rename = "createdAt")]
    #[serde(rename = "createdAt")]
    pub created_at: String,

    /// Last modification timestamp (ISO 8601 format)
    #[oai(rename = "updatedAt")]
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

impl From<db::todo::Model> for TodoResponse {
    fn from(m: db::todo::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            completed: m.completed,
            priority: m.priority.into(),
            due_date: m.due_date.map(to_rfc3339),
            created_at: to_rfc3339(m.created_at),
            updated_at: to_rfc3339(m.updated_at),
        }
    }
}
