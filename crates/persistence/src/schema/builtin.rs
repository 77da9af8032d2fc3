//! Schemas for the directory resources.

use super::descriptor::{FieldKind, FieldRule, Format, SchemaDescriptor};

/// `{id, name}` reference embedded in a user document.
static REFERENCE_FIELDS: [FieldRule; 2] = [
    FieldRule::required("id", FieldKind::String),
    FieldRule::required("name", FieldKind::String),
];

static REFERENCE_ITEM: FieldKind = FieldKind::Object(&REFERENCE_FIELDS);

static STRING_ITEM: FieldKind = FieldKind::String;

static USER_FIELDS: [FieldRule; 9] = [
    FieldRule::required("name", FieldKind::String),
    FieldRule::required("username", FieldKind::String),
    FieldRule::required("employee_id", FieldKind::String),
    FieldRule::required("phone", FieldKind::String),
    FieldRule::required("email", FieldKind::String).with_format(Format::Email),
    FieldRule::required("hire_date", FieldKind::String).with_format(Format::Date),
    FieldRule::required("position", FieldKind::String),
    FieldRule::required("department", FieldKind::Object(&REFERENCE_FIELDS)),
    FieldRule::required("permissions", FieldKind::Array(&REFERENCE_ITEM)),
];

static PERMISSION_GROUP_FIELDS: [FieldRule; 2] = [
    FieldRule::required("name", FieldKind::String),
    FieldRule::required("permissions", FieldKind::Array(&STRING_ITEM)),
];

static DEPARTMENT_FIELDS: [FieldRule; 2] = [
    FieldRule::required("name", FieldKind::String),
    FieldRule::optional("parent", FieldKind::String).with_default(""),
];

/// An employee with their department and permission grants.
pub static USER_SCHEMA: SchemaDescriptor = SchemaDescriptor {
    name: "user",
    fields: &USER_FIELDS,
};

/// A named set of permission strings.
pub static PERMISSION_GROUP_SCHEMA: SchemaDescriptor = SchemaDescriptor {
    name: "permission_group",
    fields: &PERMISSION_GROUP_FIELDS,
};

/// A department, optionally nested under a parent.
pub static DEPARTMENT_SCHEMA: SchemaDescriptor = SchemaDescriptor {
    name: "department",
    fields: &DEPARTMENT_FIELDS,
};

/// Names of the fields a user document carries.
pub fn user_field_names() -> impl Iterator<Item = &'static str> {
    USER_SCHEMA.fields.iter().map(|rule| rule.name)
}
