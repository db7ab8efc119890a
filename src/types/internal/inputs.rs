use crate::types::dto::todo::Priority;

/// Validated input for POST /todos.
///
/// Produced by `CreateTodoSchema`; an instance existing means title bounds
/// held and priority defaulting already happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTodoInput {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
}

/// Validated input for PUT /todos/{id}. Every field optional - absent means
/// "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTodoInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    /// Unix seconds, transformed from an ISO 8601 string by the schema
    pub due_date: Option<i64>,
}

impl UpdateTodoInput {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.completed.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
    }
}

/// Validated query for GET /todos.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    pub search: Option<String>,
}

/// Validated query for GET /users.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

/// Validated input for POST /users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserInput {
    pub name: String,
    pub age: Option<i32>,
    pub mobile_number: Option<String>,
    pub email: String,
    pub password: String,
}
