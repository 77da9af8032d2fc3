//! Descriptors for the resource kinds served over HTTP.

use orgdocs_persistence::schema::{
    DEPARTMENT_SCHEMA, PERMISSION_GROUP_SCHEMA, SchemaDescriptor, USER_SCHEMA,
};

/// Where a resource kind lives and how it is validated.
#[derive(Debug)]
pub struct ResourceSpec {
    /// Store collection name.
    pub collection: &'static str,
    /// Label used in response messages ("Book created successfully").
    pub label: &'static str,
    /// Schema checked on create. `None` accepts any JSON object.
    pub schema: Option<&'static SchemaDescriptor>,
}

/// Books: schemaless.
pub static BOOKS: ResourceSpec = ResourceSpec {
    collection: "books",
    label: "Book",
    schema: None,
};

/// Permission groups.
pub static PERMISSIONS: ResourceSpec = ResourceSpec {
    collection: "permissions",
    label: "Permission group",
    schema: Some(&PERMISSION_GROUP_SCHEMA),
};

/// Departments.
pub static DEPARTMENTS: ResourceSpec = ResourceSpec {
    collection: "departments",
    label: "Department",
    schema: Some(&DEPARTMENT_SCHEMA),
};

/// Users.
pub static USERS: ResourceSpec = ResourceSpec {
    collection: "users",
    label: "User",
    schema: Some(&USER_SCHEMA),
};
