//! Payload shape validation for incoming book bodies.
//!
//! The HTTP layer hands loosely typed JSON here before anything reaches the
//! store. Required fields are `title` (string), `author` (string) and `year`
//! (integer); every offending field is collected in one pass so a caller
//! sees all problems at once rather than the first one found.
//!
//! Validation is a pure function: no side effects, no store access.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::types::NewBook;

/// A single field problem found during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Name of the offending field.
    pub field: &'static str,
    /// What was wrong with it.
    pub problem: String,
}

impl FieldIssue {
    fn required(field: &'static str) -> Self {
        Self {
            field,
            problem: "field is required".to_string(),
        }
    }

    fn expected(field: &'static str, wanted: &str, got: &Value) -> Self {
        Self {
            field,
            problem: format!("expected {}, got {}", wanted, json_type_name(got)),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.problem)
    }
}

/// The payload failed the shape check.
///
/// Carries one issue per offending field; the Display form joins them into
/// the message callers see in the 400 response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid book payload: {}", render_issues(.issues))]
pub struct ValidationError {
    /// Everything wrong with the payload, in field order.
    pub issues: Vec<FieldIssue>,
}

fn render_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Human name for a JSON value's type, for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Checks that `payload` is a JSON object carrying `title` (string),
/// `author` (string) and `year` (integer), and produces the typed fields.
///
/// Values are accepted as-is once the types match: no range check on
/// `year`, no non-empty check on the strings, and unknown extra fields are
/// ignored. Type matching is strict: a numeric string is not an integer.
pub fn parse_new_book(payload: &Value) -> Result<NewBook, ValidationError> {
    let Some(object) = payload.as_object() else {
        return Err(ValidationError {
            issues: vec![FieldIssue::expected("body", "an object", payload)],
        });
    };

    let mut issues = Vec::new();

    let title = match object.get("title") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            issues.push(FieldIssue::expected("title", "a string", other));
            None
        }
        None => {
            issues.push(FieldIssue::required("title"));
            None
        }
    };

    let author = match object.get("author") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            issues.push(FieldIssue::expected("author", "a string", other));
            None
        }
        None => {
            issues.push(FieldIssue::required("author"));
            None
        }
    };

    let year = match object.get("year") {
        Some(value) => match value.as_i64().map(i32::try_from) {
            Some(Ok(n)) => Some(n),
            Some(Err(_)) => {
                issues.push(FieldIssue {
                    field: "year",
                    problem: "integer is out of range".to_string(),
                });
                None
            }
            None => {
                issues.push(FieldIssue::expected("year", "an integer", value));
                None
            }
        },
        None => {
            issues.push(FieldIssue::required("year"));
            None
        }
    };

    match (title, author, year) {
        (Some(title), Some(author), Some(year)) => Ok(NewBook {
            title,
            author,
            year,
        }),
        _ => Err(ValidationError { issues }),
    }
}
