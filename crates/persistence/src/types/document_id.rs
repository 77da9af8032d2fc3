//! Document identifiers.
//!
//! Every stored document carries a [`DocumentId`] in its `_id` field. The identifier is
//! a 12-byte MongoDB ObjectId; outside the store it always travels as its canonical
//! 24-character lowercase hexadecimal form.

use std::fmt;
use std::str::FromStr;

use bson::oid::ObjectId;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ResourceError;

/// The field that holds a document's identifier.
pub const ID_FIELD: &str = "_id";

/// Opaque unique identifier of a stored document.
///
/// Identifiers are generated by [`DocumentId::new`] at insert time. Their ordering
/// follows the embedded creation timestamp, so iterating identifiers in order yields
/// documents in creation order.
///
/// # Examples
///
/// ```
/// use orgdocs_persistence::types::DocumentId;
///
/// let id = DocumentId::new();
/// let parsed: DocumentId = id.to_hex().parse().unwrap();
/// assert_eq!(id, parsed);
///
/// assert!(DocumentId::parse("not-an-id").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId(ObjectId);

impl DocumentId {
    /// Generates a fresh identifier.
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// Parses the canonical hexadecimal form.
    ///
    /// Anything other than exactly 24 hexadecimal characters fails with
    /// [`ResourceError::InvalidIdentifier`].
    pub fn parse(value: &str) -> Result<Self, ResourceError> {
        ObjectId::parse_str(value)
            .map(Self)
            .map_err(|_| ResourceError::InvalidIdentifier {
                value: value.to_string(),
            })
    }

    /// Returns the lowercase 24-character hexadecimal form.
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    /// Returns the underlying ObjectId.
    pub fn as_object_id(&self) -> &ObjectId {
        &self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ObjectId> for DocumentId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl FromStr for DocumentId {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for DocumentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}
