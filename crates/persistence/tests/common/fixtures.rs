//! Test fixtures for persistence layer testing.

use serde_json::{Value, json};

use orgdocs_persistence::types::Document;

/// Converts a `json!` object literal into a [`Document`].
pub fn doc(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture must be a JSON object, got {other}"),
    }
}

/// A book with a handful of arbitrary fields.
pub fn book(title: &str) -> Document {
    doc(json!({
        "title": title,
        "author": "Frank Herbert",
        "year": 1965,
        "tags": ["scifi", "classic"]
    }))
}

/// A department document.
pub fn department(name: &str) -> Document {
    doc(json!({"name": name, "parent": ""}))
}

/// A complete user document referencing a department.
pub fn user(name: &str, department_id: &str, department_name: &str) -> Document {
    doc(json!({
        "name": name,
        "username": name.to_lowercase().replace(' ', "."),
        "employee_id": "E-0001",
        "phone": "555-0100",
        "email": "someone@example.com",
        "hire_date": "2021-11-05",
        "position": "Engineer",
        "department": {"id": department_id, "name": department_name},
        "permissions": []
    }))
}
