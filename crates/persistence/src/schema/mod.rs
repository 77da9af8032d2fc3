//! Schema validation for directory documents.
//!
//! Each validated resource kind has a static [`SchemaDescriptor`]: an ordered list of
//! [`FieldRule`]s describing presence, JSON kind, string format and defaults. Validation
//! runs on create only; updates are merged without re-validation.

mod builtin;
mod descriptor;
mod validator;

pub use builtin::{DEPARTMENT_SCHEMA, PERMISSION_GROUP_SCHEMA, USER_SCHEMA, user_field_names};
pub use descriptor::{FieldKind, FieldRule, Format, SchemaDescriptor};
pub use validator::{apply_defaults, json_type_name, validate, validate_document};
