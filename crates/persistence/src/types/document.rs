//! Documents and the query shapes accepted by a [`DocumentStore`](crate::core::DocumentStore).

use serde_json::{Map, Value};

use crate::error::ValidationError;

use super::document_id::{DocumentId, ID_FIELD};

/// A schemaless JSON document.
pub type Document = Map<String, Value>;

/// Reads the identifier stored in a document's `_id` field.
pub fn document_id(document: &Document) -> Option<DocumentId> {
    document
        .get(ID_FIELD)
        .and_then(Value::as_str)
        .and_then(|raw| DocumentId::parse(raw).ok())
}

/// Selects the documents an operation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// Every document in the collection.
    All,
    /// The single document with this identifier.
    ById(DocumentId),
}

impl Filter {
    /// Returns a filter matching one identifier.
    pub fn by_id(id: DocumentId) -> Self {
        Filter::ById(id)
    }

    /// Returns `true` if a document with this identifier passes the filter.
    pub fn matches(&self, id: &DocumentId) -> bool {
        match self {
            Filter::All => true,
            Filter::ById(wanted) => wanted == id,
        }
    }

    /// Returns the identifier for [`Filter::ById`].
    pub fn id(&self) -> Option<&DocumentId> {
        match self {
            Filter::All => None,
            Filter::ById(id) => Some(id),
        }
    }
}

/// An inclusion projection over dotted field paths.
///
/// The `_id` field is always part of the projected document.
///
/// # Examples
///
/// ```
/// use orgdocs_persistence::types::{Document, Projection};
/// use serde_json::json;
///
/// let projection = Projection::include(["name", "department.name"]);
/// let doc: Document = serde_json::from_value(json!({
///     "_id": "65f0a1b2c3d4e5f601234567",
///     "name": "Ada",
///     "phone": "555-0100",
///     "department": {"id": "x", "name": "Engineering"}
/// })).unwrap();
///
/// let projected = projection.apply(&doc);
/// assert_eq!(serde_json::Value::Object(projected), json!({
///     "_id": "65f0a1b2c3d4e5f601234567",
///     "name": "Ada",
///     "department": {"name": "Engineering"}
/// }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    fields: Vec<String>,
}

impl Projection {
    /// Creates a projection that keeps the given paths.
    pub fn include<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the included paths (without the implicit `_id`).
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Builds the projected copy of a document.
    pub fn apply(&self, document: &Document) -> Document {
        let mut projected = Document::new();
        if let Some(id) = document.get(ID_FIELD) {
            projected.insert(ID_FIELD.to_string(), id.clone());
        }
        for field in &self.fields {
            let segments: Vec<&str> = field.split('.').collect();
            copy_path(document, &mut projected, &segments);
        }
        projected
    }
}

fn copy_path(source: &Document, target: &mut Document, segments: &[&str]) {
    let Some((head, rest)) = segments.split_first() else {
        return;
    };
    let Some(value) = source.get(*head) else {
        return;
    };

    if rest.is_empty() {
        target.insert(head.to_string(), value.clone());
        return;
    }

    if let Value::Object(inner) = value {
        let slot = target
            .entry(head.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(inner_target) = slot {
            copy_path(inner, inner_target, rest);
        }
    }
}

/// A merge patch: each top-level key replaces the stored value.
///
/// Construction rejects empty patches, patches that try to change `_id`, and keys that
/// start with `$` or contain `.`. Keys always name a top-level field literally.
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    fields: Document,
}

impl Patch {
    /// Validates and wraps a set of top-level field replacements.
    pub fn new(fields: Document) -> Result<Self, ValidationError> {
        if fields.contains_key(ID_FIELD) {
            return Err(ValidationError::ImmutableField {
                field: ID_FIELD.to_string(),
            });
        }
        if fields.is_empty() {
            return Err(ValidationError::EmptyPatch);
        }
        if let Some(field) = fields
            .keys()
            .find(|key| key.starts_with('$') || key.contains('.'))
        {
            return Err(ValidationError::InvalidFieldName {
                field: field.clone(),
            });
        }
        Ok(Self { fields })
    }

    /// A patch that sets exactly one field.
    pub fn set(field: impl Into<String>, value: Value) -> Result<Self, ValidationError> {
        let mut fields = Document::new();
        fields.insert(field.into(), value);
        Self::new(fields)
    }

    /// Returns the replacement fields.
    pub fn fields(&self) -> &Document {
        &self.fields
    }

    /// Returns the replacement value for a field, if the patch names it.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Applies the patch in place, returning `true` if any stored value changed.
    pub fn apply_to(&self, document: &mut Document) -> bool {
        let mut modified = false;
        for (key, value) in &self.fields {
            if document.get(key) != Some(value) {
                document.insert(key.clone(), value.clone());
                modified = true;
            }
        }
        modified
    }

    /// Consumes the patch, returning its fields.
    pub fn into_fields(self) -> Document {
        self.fields
    }
}
