//! Field-level validation combinators.
//!
//! Schemas are built entirely from these helpers; each one checks a single
//! field against the raw JSON map, pushing a `Violation` on failure and
//! returning the transformed value on success. A helper never partially
//! applies a transform - either the value passes every check and comes back
//! typed, or the field contributes a violation and `None`.

use chrono::DateTime;
use serde_json::{Map, Value};

use crate::errors::validation::Violation;
use crate::types::dto::todo::Priority;

/// Required string field. Missing, null or wrong-typed values all produce
/// the `missing_message` so the client sees one stable message per field.
pub fn required_str(
    obj: &Map<String, Value>,
    path: &str,
    missing_message: &str,
    errors: &mut Vec<Violation>,
) -> Option<String> {
    match obj.get(path) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Null) | None => {
            errors.push(Violation::new(path, missing_message));
            None
        }
        Some(_) => {
            errors.push(Violation::new(path, "Expected a string"));
            None
        }
    }
}

/// Optional string field. Absent and null are fine; any other non-string
/// type is a violation.
pub fn optional_str(
    obj: &Map<String, Value>,
    path: &str,
    errors: &mut Vec<Violation>,
) -> Option<String> {
    match obj.get(path) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Null) | None => None,
        Some(_) => {
            errors.push(Violation::new(path, "Expected a string"));
            None
        }
    }
}

/// Length bounds on an already-extracted string, counted in characters.
pub fn check_len(
    value: String,
    path: &str,
    min: usize,
    max: usize,
    short_message: &str,
    long_message: &str,
    errors: &mut Vec<Violation>,
) -> Option<String> {
    let len = value.chars().count();
    if len < min {
        errors.push(Violation::new(path, short_message));
        None
    } else if len > max {
        errors.push(Violation::new(path, long_message));
        None
    } else {
        Some(value)
    }
}

/// Optional digit-string transformed into an integer (`"42"` → 42). Any
/// non-digit character rejects the whole value.
pub fn optional_digits(
    obj: &Map<String, Value>,
    path: &str,
    errors: &mut Vec<Violation>,
) -> Option<u64> {
    let raw = optional_str(obj, path, errors)?;
    parse_digits(&raw, path, errors)
}

/// Digit-string to integer transform shared by query fields and the path
/// identifier schema.
pub fn parse_digits(raw: &str, path: &str, errors: &mut Vec<Violation>) -> Option<u64> {
    if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) {
        match raw.parse::<u64>() {
            Ok(n) => Some(n),
            Err(_) => {
                errors.push(Violation::new(path, "Number out of range"));
                None
            }
        }
    } else {
        errors.push(Violation::new(path, "Expected a digit string"));
        None
    }
}

/// Optional JSON boolean field (request bodies).
pub fn optional_bool(
    obj: &Map<String, Value>,
    path: &str,
    errors: &mut Vec<Violation>,
) -> Option<bool> {
    match obj.get(path) {
        Some(Value::Bool(b)) => Some(*b),
        Some(Value::Null) | None => None,
        Some(_) => {
            errors.push(Violation::new(path, "Expected a boolean"));
            None
        }
    }
}

/// Optional string field transformed into a boolean by exact match against
/// "true" (query strings carry no real booleans).
pub fn optional_bool_literal(
    obj: &Map<String, Value>,
    path: &str,
    errors: &mut Vec<Violation>,
) -> Option<bool> {
    optional_str(obj, path, errors).map(|s| s == "true")
}

/// Optional priority enum field.
pub fn optional_priority(
    obj: &Map<String, Value>,
    path: &str,
    errors: &mut Vec<Violation>,
) -> Option<Priority> {
    let raw = optional_str(obj, path, errors)?;
    match Priority::parse(&raw) {
        Some(p) => Some(p),
        None => {
            errors.push(Violation::new(path, "Expected one of low, medium, high"));
            None
        }
    }
}

/// Optional ISO 8601 datetime string transformed into unix seconds.
pub fn optional_datetime(
    obj: &Map<String, Value>,
    path: &str,
    errors: &mut Vec<Violation>,
) -> Option<i64> {
    let raw = optional_str(obj, path, errors)?;
    match DateTime::parse_from_rfc3339(&raw) {
        Ok(dt) => Some(dt.timestamp()),
        Err(_) => {
            errors.push(Violation::new(path, "Invalid datetime"));
            None
        }
    }
}

/// Optional JSON integer field (i32 range).
pub fn optional_int(
    obj: &Map<String, Value>,
    path: &str,
    errors: &mut Vec<Violation>,
) -> Option<i32> {
    match obj.get(path) {
        Some(Value::Number(n)) => match n.as_i64().and_then(|v| i32::try_from(v).ok()) {
            Some(v) => Some(v),
            None => {
                errors.push(Violation::new(path, "Expected an integer"));
                None
            }
        },
        Some(Value::Null) | None => None,
        Some(_) => {
            errors.push(Violation::new(path, "Expected an integer"));
            None
        }
    }
}
