//! Static schema descriptors.

use std::fmt;

/// A named set of field rules for one resource kind.
#[derive(Debug, Clone, Copy)]
pub struct SchemaDescriptor {
    /// Resource kind, used in log messages.
    pub name: &'static str,
    /// Top-level field rules, checked in declaration order.
    pub fields: &'static [FieldRule],
}

/// Constraints on one field of an object.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Field name within its parent object.
    pub name: &'static str,
    /// Expected JSON kind.
    pub kind: FieldKind,
    /// Whether the field must be present.
    pub required: bool,
    /// Optional string format.
    pub format: Option<Format>,
    /// Value inserted by `apply_defaults` when the field is absent.
    pub default: Option<&'static str>,
}

impl FieldRule {
    /// A field that must be present.
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            format: None,
            default: None,
        }
    }

    /// A field that may be absent.
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            format: None,
            default: None,
        }
    }

    /// Adds a string format constraint.
    pub const fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Adds a string default for absent values.
    pub const fn with_default(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }
}

/// JSON kinds a field may be constrained to.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// A JSON string.
    String,
    /// A JSON object with its own field rules.
    Object(&'static [FieldRule]),
    /// A JSON array whose items all have the given kind.
    Array(&'static FieldKind),
}

impl FieldKind {
    /// The JSON type name reported in validation errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Object(_) => "object",
            FieldKind::Array(_) => "array",
        }
    }
}

/// String formats checked by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `local@domain.tld`
    Email,
    /// Calendar date, `YYYY-MM-DD`.
    Date,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Email => write!(f, "email"),
            Format::Date => write!(f, "date"),
        }
    }
}
