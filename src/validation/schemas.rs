//! Schema definitions: one `Validator` impl per operation.
//!
//! All per-field policy lives here (via the `fields` combinators); the
//! gateway in `mod.rs` never names a field, so adding a field to an
//! operation touches only its schema.

use serde_json::Value;

use crate::errors::validation::{ValidationError, Violation};
use crate::types::dto::todo::Priority;
use crate::types::internal::{
    CreateTodoInput, CreateUserInput, TodoListQuery, UpdateTodoInput, UserListQuery,
};
use crate::validation::fields;
use crate::validation::Validator;

const TITLE_REQUIRED: &str = "Title is required";
const TITLE_TOO_LONG: &str = "Title must be less than 100 characters";
const DESCRIPTION_TOO_LONG: &str = "Description must be less than 500 characters";

fn as_object(raw: &Value) -> Result<&serde_json::Map<String, Value>, ValidationError> {
    raw.as_object()
        .ok_or_else(|| ValidationError::single("body", "Expected a JSON object"))
}

fn finish(errors: Vec<Violation>) -> Result<(), ValidationError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(errors))
    }
}

/// POST /todos body: title required (1-100 chars), description optional
/// (<=500 chars), priority optional with a `medium` default.
pub struct CreateTodoSchema;

impl Validator for CreateTodoSchema {
    type Output = CreateTodoInput;

    fn validate(&self, raw: &Value) -> Result<CreateTodoInput, ValidationError> {
        let obj = as_object(raw)?;
        let mut errors = Vec::new();

        let title = fields::required_str(obj, "title", TITLE_REQUIRED, &mut errors).and_then(
            |t| fields::check_len(t, "title", 1, 100, TITLE_REQUIRED, TITLE_TOO_LONG, &mut errors),
        );

        let description = fields::optional_str(obj, "description", &mut errors).and_then(|d| {
            fields::check_len(
                d,
                "description",
                0,
                500,
                "",
                DESCRIPTION_TOO_LONG,
                &mut errors,
            )
        });

        let priority = fields::optional_priority(obj, "priority", &mut errors);

        finish(errors)?;

        Ok(CreateTodoInput {
            title: title.ok_or_else(|| ValidationError::single("title", TITLE_REQUIRED))?,
            description,
            priority: priority.unwrap_or(Priority::Medium),
        })
    }
}

/// PUT /todos/{id} body: every field optional, bounds as in create when a
/// field is present; dueDate is an ISO 8601 string transformed into a
/// timestamp.
pub struct UpdateTodoSchema;

impl Validator for UpdateTodoSchema {
    type Output = UpdateTodoInput;

    fn validate(&self, raw: &Value) -> Result<UpdateTodoInput, ValidationError> {
        let obj = as_object(raw)?;
        let mut errors = Vec::new();

        let title = fields::optional_str(obj, "title", &mut errors).and_then(|t| {
            fields::check_len(t, "title", 1, 100, TITLE_REQUIRED, TITLE_TOO_LONG, &mut errors)
        });

        let description = fields::optional_str(obj, "description", &mut errors).and_then(|d| {
            fields::check_len(
                d,
                "description",
                0,
                500,
                "",
                DESCRIPTION_TOO_LONG,
                &mut errors,
            )
        });

        let completed = fields::optional_bool(obj, "completed", &mut errors);
        let priority = fields::optional_priority(obj, "priority", &mut errors);
        let due_date = fields::optional_datetime(obj, "dueDate", &mut errors);

        finish(errors)?;

        Ok(UpdateTodoInput {
            title,
            description,
            completed,
            priority,
            due_date,
        })
    }
}

/// Path identifier: a string of one or more digits transformed into an
/// integer; any other string fails.
pub struct TodoIdSchema;

impl Validator for TodoIdSchema {
    type Output = i64;

    fn validate(&self, raw: &Value) -> Result<i64, ValidationError> {
        let invalid = || ValidationError::single("id", "Invalid todo ID");

        let s = raw.as_str().ok_or_else(invalid)?;
        let mut errors = Vec::new();
        let n = fields::parse_digits(s, "id", &mut errors).ok_or_else(invalid)?;

        i64::try_from(n).map_err(|_| invalid())
    }
}

/// Same identifier format for the users resource.
pub struct UserIdSchema;

impl Validator for UserIdSchema {
    type Output = i64;

    fn validate(&self, raw: &Value) -> Result<i64, ValidationError> {
        TodoIdSchema
            .validate(raw)
            .map_err(|_| ValidationError::single("id", "Invalid user ID"))
    }
}

/// GET /todos query: page/limit digit-strings, completed matched against
/// the literal "true", optional priority and free-text search.
pub struct TodoListQuerySchema;

impl Validator for TodoListQuerySchema {
    type Output = TodoListQuery;

    fn validate(&self, raw: &Value) -> Result<TodoListQuery, ValidationError> {
        let obj = as_object(raw)?;
        let mut errors = Vec::new();

        let page = fields::optional_digits(obj, "page", &mut errors);
        let limit = fields::optional_digits(obj, "limit", &mut errors);
        let completed = fields::optional_bool_literal(obj, "completed", &mut errors);
        let priority = fields::optional_priority(obj, "priority", &mut errors);
        let search = fields::optional_str(obj, "search", &mut errors);

        finish(errors)?;

        Ok(TodoListQuery {
            page,
            limit,
            completed,
            priority,
            search,
        })
    }
}

/// GET /users query: page and limit only.
pub struct UserListQuerySchema;

impl Validator for UserListQuerySchema {
    type Output = UserListQuery;

    fn validate(&self, raw: &Value) -> Result<UserListQuery, ValidationError> {
        let obj = as_object(raw)?;
        let mut errors = Vec::new();

        let page = fields::optional_digits(obj, "page", &mut errors);
        let limit = fields::optional_digits(obj, "limit", &mut errors);

        finish(errors)?;

        Ok(UserListQuery { page, limit })
    }
}

/// POST /users body.
pub struct CreateUserSchema;

impl Validator for CreateUserSchema {
    type Output = CreateUserInput;

    fn validate(&self, raw: &Value) -> Result<CreateUserInput, ValidationError> {
        let obj = as_object(raw)?;
        let mut errors = Vec::new();

        let name = fields::required_str(obj, "name", "Name is required", &mut errors)
            .and_then(|n| {
                fields::check_len(n, "name", 1, 100, "Name is required", "Name is too long", &mut errors)
            });
        let email = fields::required_str(obj, "email", "Email is required", &mut errors)
            .and_then(|e| {
                fields::check_len(e, "email", 1, 255, "Email is required", "Email is too long", &mut errors)
            });
        let password = fields::required_str(obj, "password", "Password is required", &mut errors)
            .and_then(|p| {
                fields::check_len(
                    p,
                    "password",
                    1,
                    255,
                    "Password is required",
                    "Password is too long",
                    &mut errors,
                )
            });
        let age = fields::optional_int(obj, "age", &mut errors);
        let mobile_number = fields::optional_str(obj, "mobileNumber", &mut errors);

        finish(errors)?;

        Ok(CreateUserInput {
            name: name.ok_or_else(|| ValidationError::single("name", "Name is required"))?,
            age,
            mobile_number,
            email: email.ok_or_else(|| ValidationError::single("email", "Email is required"))?,
            password: password
                .ok_or_else(|| ValidationError::single("password", "Password is required"))?,
        })
    }
}
