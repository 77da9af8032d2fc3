//! Typed results of successful service operations.
//!
//! Each outcome serializes to the JSON body the handlers return.

use orgdocs_persistence::types::DocumentId;
use serde::Serialize;

/// A document was inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Created {
    /// `"<Label> created successfully"`.
    pub message: String,
    /// Identifier assigned by the store.
    pub id: DocumentId,
}

impl Created {
    /// Builds the outcome for a resource label.
    pub fn new(label: &str, id: DocumentId) -> Self {
        Self {
            message: format!("{} created successfully", label),
            id,
        }
    }
}

/// A document matched an update.
///
/// `modified` is `false` when the patch repeated the stored values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Updated {
    /// `"<Label> updated successfully"`.
    pub message: String,
    /// Whether any stored value changed.
    pub modified: bool,
}

impl Updated {
    /// Builds the outcome for a resource label.
    pub fn new(label: &str, modified: bool) -> Self {
        Self {
            message: format!("{} updated successfully", label),
            modified,
        }
    }
}

/// A document was removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deleted {
    /// `"<Label> deleted successfully"`.
    pub message: String,
}

impl Deleted {
    /// Builds the outcome for a resource label.
    pub fn new(label: &str) -> Self {
        Self {
            message: format!("{} deleted successfully", label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_created_body() {
        let id = DocumentId::new();
        let created = Created::new("Book", id);
        assert_eq!(
            serde_json::to_value(&created).unwrap(),
            json!({"message": "Book created successfully", "id": id.to_hex()})
        );
    }

    #[test]
    fn test_updated_and_deleted_messages() {
        assert_eq!(
            serde_json::to_value(Updated::new("Department", false)).unwrap(),
            json!({"message": "Department updated successfully", "modified": false})
        );
        assert_eq!(
            Deleted::new("Permission group").message,
            "Permission group deleted successfully"
        );
    }
}
