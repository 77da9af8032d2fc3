//! Write outcomes reported by the document store.

use serde::{Deserialize, Serialize};

/// Result of an update against at most one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOutcome {
    /// Number of documents the filter matched (0 or 1).
    pub matched: u64,
    /// Number of documents whose stored values changed (0 or 1).
    pub modified: u64,
}

impl UpdateOutcome {
    /// Outcome for a filter that matched nothing.
    pub const NO_MATCH: UpdateOutcome = UpdateOutcome {
        matched: 0,
        modified: 0,
    };

    /// Outcome for a matched document, changed or not.
    pub fn matched(modified: bool) -> Self {
        Self {
            matched: 1,
            modified: u64::from(modified),
        }
    }

    /// Returns `true` if a document matched the filter.
    pub fn is_match(&self) -> bool {
        self.matched > 0
    }

    /// Returns `true` if a stored value changed.
    pub fn is_modified(&self) -> bool {
        self.modified > 0
    }
}

/// Result of a delete against at most one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOutcome {
    /// Number of documents removed (0 or 1).
    pub deleted: u64,
}

impl DeleteOutcome {
    /// Returns `true` if a document was removed.
    pub fn is_deleted(&self) -> bool {
        self.deleted > 0
    }
}
