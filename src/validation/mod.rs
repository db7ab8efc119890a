//! Validation gateway: raw query strings and request bodies in, typed
//! inputs or a `ValidationError` out.
//!
//! The gateway is schema-agnostic - it only knows how to turn transport
//! input into a `serde_json::Value` and hand it to a `Validator`. Unknown
//! fields are ignored, not rejected.

pub mod fields;
pub mod schemas;

use serde_json::{Map, Value};

use crate::errors::validation::ValidationError;

/// A schema: a pure function from raw JSON value to validated output.
pub trait Validator {
    type Output;

    fn validate(&self, raw: &Value) -> Result<Self::Output, ValidationError>;
}

/// Parse a raw query string (`page=2&limit=10`) against a schema.
///
/// Every query value arrives as a string; transforms to integers, booleans
/// and enums are the schema's job.
pub fn parse_query<S: Validator>(raw_query: &str, schema: &S) -> Result<S::Output, ValidationError> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(raw_query)
        .map_err(|_| ValidationError::single("query", "Malformed query string"))?;

    let mut obj = Map::new();
    for (key, value) in pairs {
        obj.insert(key, Value::String(value));
    }

    schema.validate(&Value::Object(obj))
}

/// Parse raw body bytes as JSON, then validate against a schema. An
/// unparseable body fails before any schema check runs.
pub fn parse_body<S: Validator>(raw: &[u8], schema: &S) -> Result<S::Output, ValidationError> {
    let value: Value = serde_json::from_slice(raw)
        .map_err(|_| ValidationError::single("body", "Request body is not valid JSON"))?;

    schema.validate(&value)
}

/// Validate an already-parsed body value. Shared path for endpoints whose
/// payload extractor has done the JSON parse.
pub fn validate_value<S: Validator>(value: &Value, schema: &S) -> Result<S::Output, ValidationError> {
    schema.validate(value)
}

/// Validate a raw path segment (an identifier) against a schema.
pub fn parse_path<S: Validator>(raw: &str, schema: &S) -> Result<S::Output, ValidationError> {
    schema.validate(&Value::String(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::schemas::*;
    use super::*;
    use crate::types::dto::todo::Priority;
    use serde_json::json;

    #[test]
    fn create_todo_defaults_priority_to_medium() {
        let input = validate_value(&json!({"title": "Buy milk"}), &CreateTodoSchema)
            .expect("valid input");
        assert_eq!(input.title, "Buy milk");
        assert_eq!(input.priority, Priority::Medium);
        assert_eq!(input.description, None);
    }

    #[test]
    fn create_todo_rejects_empty_and_overlong_titles() {
        let err = validate_value(&json!({"title": ""}), &CreateTodoSchema).unwrap_err();
        assert_eq!(err.violations[0].path, "title");
        assert_eq!(err.violations[0].message, "Title is required");

        let long = "x".repeat(101);
        let err = validate_value(&json!({"title": long}), &CreateTodoSchema).unwrap_err();
        assert_eq!(
            err.violations[0].message,
            "Title must be less than 100 characters"
        );
    }

    #[test]
    fn create_todo_collects_all_violations_in_one_pass() {
        let raw = json!({
            "title": "",
            "description": "d".repeat(501),
            "priority": "urgent",
        });
        let err = validate_value(&raw, &CreateTodoSchema).unwrap_err();
        let paths: Vec<_> = err.violations.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["title", "description", "priority"]);
    }

    #[test]
    fn create_todo_ignores_unknown_fields() {
        let raw = json!({"title": "ok", "owner": "nobody", "color": "red"});
        let input = validate_value(&raw, &CreateTodoSchema).expect("unknown fields ignored");
        assert_eq!(input.title, "ok");
    }

    #[test]
    fn create_todo_rejects_non_object_body() {
        assert!(validate_value(&json!([1, 2, 3]), &CreateTodoSchema).is_err());
        assert!(validate_value(&json!("title"), &CreateTodoSchema).is_err());
    }

    #[test]
    fn update_todo_accepts_empty_patch() {
        let input = validate_value(&json!({}), &UpdateTodoSchema).expect("empty patch is valid");
        assert!(input.is_empty());
    }

    #[test]
    fn update_todo_transforms_due_date_to_timestamp() {
        let raw = json!({"dueDate": "2026-09-01T12:00:00Z"});
        let input = validate_value(&raw, &UpdateTodoSchema).expect("valid datetime");
        assert_eq!(input.due_date, Some(1_788_264_000));
    }

    #[test]
    fn update_todo_rejects_bad_due_date() {
        let err = validate_value(&json!({"dueDate": "tomorrow"}), &UpdateTodoSchema).unwrap_err();
        assert_eq!(err.violations[0].path, "dueDate");
        assert_eq!(err.violations[0].message, "Invalid datetime");
    }

    #[test]
    fn todo_id_accepts_digit_strings_only() {
        assert_eq!(parse_path("42", &TodoIdSchema).expect("digits"), 42);

        for bad in ["", "abc", "4x2", "-1", "1.5", " 7", "18446744073709551615"] {
            let err = parse_path(bad, &TodoIdSchema).unwrap_err();
            assert_eq!(err.violations[0].message, "Invalid todo ID", "input {bad:?}");
        }
    }

    #[test]
    fn list_query_parses_and_transforms() {
        let query =
            parse_query("page=2&limit=5&completed=true&priority=high&search=milk", &TodoListQuerySchema)
                .expect("valid query");
        assert_eq!(query.page, Some(2));
        assert_eq!(query.limit, Some(5));
        assert_eq!(query.completed, Some(true));
        assert_eq!(query.priority, Some(Priority::High));
        assert_eq!(query.search.as_deref(), Some("milk"));
    }

    #[test]
    fn list_query_completed_is_exact_match_against_true() {
        for raw in ["false", "TRUE", "yes", "1"] {
            let query = parse_query(&format!("completed={raw}"), &TodoListQuerySchema)
                .expect("any string is accepted");
            assert_eq!(query.completed, Some(false), "input {raw:?}");
        }
    }

    #[test]
    fn list_query_rejects_non_digit_page() {
        let err = parse_query("page=two", &TodoListQuerySchema).unwrap_err();
        assert_eq!(err.violations[0].path, "page");
    }

    #[test]
    fn list_query_ignores_unknown_parameters() {
        let query = parse_query("page=1&utm_source=mail", &TodoListQuerySchema).expect("ignored");
        assert_eq!(query.page, Some(1));
    }

    #[test]
    fn empty_query_string_is_valid() {
        let query = parse_query("", &TodoListQuerySchema).expect("empty query");
        assert_eq!(query, Default::default());
    }

    #[test]
    fn parse_body_fails_before_schema_on_bad_json() {
        let err = parse_body(b"{not json", &CreateTodoSchema).unwrap_err();
        assert_eq!(err.violations[0].path, "body");
        assert_eq!(err.violations[0].message, "Request body is not valid JSON");
    }

    #[test]
    fn parse_body_runs_schema_on_valid_json() {
        let input =
            parse_body(br#"{"title": "from bytes", "priority": "low"}"#, &CreateTodoSchema)
                .expect("valid body");
        assert_eq!(input.priority, Priority::Low);
    }

    #[test]
    fn create_user_requires_name_email_password() {
        let err = validate_value(&json!({}), &CreateUserSchema).unwrap_err();
        let paths: Vec<_> = err.violations.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["name", "email", "password"]);
    }
}
