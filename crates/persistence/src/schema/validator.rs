//! Document validation against a [`SchemaDescriptor`].

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ValidationError;
use crate::types::Document;

use super::descriptor::{FieldKind, FieldRule, Format, SchemaDescriptor};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s.]+$").expect("email pattern is a valid regex")
});

/// Validates a JSON value against a schema.
///
/// Rules are checked depth-first in declaration order and the first violation is
/// returned, carrying the JSON path of the offending field (for example
/// `permissions[1].name`). Fields not named by the schema are accepted as-is.
///
/// # Examples
///
/// ```
/// use orgdocs_persistence::schema::{validate, DEPARTMENT_SCHEMA};
/// use serde_json::json;
///
/// assert!(validate(&json!({"name": "Engineering"}), &DEPARTMENT_SCHEMA).is_ok());
/// assert!(validate(&json!({"parent": ""}), &DEPARTMENT_SCHEMA).is_err());
/// assert!(validate(&json!(["not", "an", "object"]), &DEPARTMENT_SCHEMA).is_err());
/// ```
pub fn validate(document: &Value, schema: &SchemaDescriptor) -> Result<(), ValidationError> {
    let Value::Object(object) = document else {
        return Err(ValidationError::NotAnObject {
            found: json_type_name(document).to_string(),
        });
    };
    validate_document(object, schema)
}

/// Validates an already-decoded document against a schema.
pub fn validate_document(
    document: &Document,
    schema: &SchemaDescriptor,
) -> Result<(), ValidationError> {
    let result = validate_fields(document, schema.fields, "");
    if let Err(ref err) = result {
        debug!(schema = schema.name, error = %err, "Document failed validation");
    }
    result
}

/// Inserts declared defaults for absent optional top-level fields.
pub fn apply_defaults(document: &mut Document, schema: &SchemaDescriptor) {
    for rule in schema.fields {
        if let Some(default) = rule.default {
            if !document.contains_key(rule.name) {
                document.insert(rule.name.to_string(), Value::String(default.to_string()));
            }
        }
    }
}

fn validate_fields(
    object: &Map<String, Value>,
    rules: &[FieldRule],
    prefix: &str,
) -> Result<(), ValidationError> {
    for rule in rules {
        let path = if prefix.is_empty() {
            rule.name.to_string()
        } else {
            format!("{}.{}", prefix, rule.name)
        };

        match object.get(rule.name) {
            None if rule.required => {
                return Err(ValidationError::MissingRequiredField { path });
            }
            None => {}
            Some(value) => validate_value(value, &rule.kind, rule.format, &path)?,
        }
    }
    Ok(())
}

fn validate_value(
    value: &Value,
    kind: &FieldKind,
    format: Option<Format>,
    path: &str,
) -> Result<(), ValidationError> {
    match (kind, value) {
        (FieldKind::String, Value::String(s)) => match format {
            Some(format) if !matches_format(s, format) => Err(ValidationError::InvalidFormat {
                path: path.to_string(),
                format: format.to_string(),
            }),
            _ => Ok(()),
        },
        (FieldKind::Object(rules), Value::Object(inner)) => validate_fields(inner, rules, path),
        (FieldKind::Array(item_kind), Value::Array(items)) => {
            for (index, item) in items.iter().enumerate() {
                validate_value(item, item_kind, None, &format!("{}[{}]", path, index))?;
            }
            Ok(())
        }
        (expected, found) => Err(ValidationError::InvalidType {
            path: path.to_string(),
            expected: expected.type_name().to_string(),
            found: json_type_name(found).to_string(),
        }),
    }
}

fn matches_format(value: &str, format: Format) -> bool {
    match format {
        Format::Email => EMAIL_PATTERN.is_match(value),
        Format::Date => NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok(),
    }
}

/// Returns the JSON type name of a value.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
