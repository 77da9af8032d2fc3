//! Request bodies for the HTTP tests.

use serde_json::{Value, json};

/// A book; books have no schema.
pub fn book(title: &str) -> Value {
    json!({
        "title": title,
        "author": "Frank Herbert",
        "year": 1965,
        "tags": ["scifi"]
    })
}

/// A department without a parent.
pub fn department(name: &str) -> Value {
    json!({ "name": name })
}

/// A permission group.
pub fn permission_group(name: &str) -> Value {
    json!({
        "name": name,
        "permissions": ["read", "write"]
    })
}

/// A complete user embedding the given department and permission group references.
pub fn user(dept_id: &str, dept_name: &str, permissions: Value) -> Value {
    json!({
        "name": "Ada Lovelace",
        "username": "ada",
        "employee_id": "E-0001",
        "phone": "555-0100",
        "email": "ada@example.com",
        "hire_date": "2020-01-15",
        "position": "Engineer",
        "department": {"id": dept_id, "name": dept_name},
        "permissions": permissions
    })
}

/// Names of the nine required user fields.
pub const USER_FIELDS: [&str; 9] = [
    "name",
    "username",
    "employee_id",
    "phone",
    "email",
    "hire_date",
    "position",
    "department",
    "permissions",
];
