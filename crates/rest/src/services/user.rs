//! User profiles: projected reads and the multi-step profile update.
//!
//! A user embeds denormalized copies of its department (`{id, name}`) and of its
//! permission groups (`[{id, name}, ...]`). A profile update writes those embedded
//! copies first, then merges the full patch, then reports whether the embedded ids
//! still point at existing department and permission group documents. The link
//! checks are read-only; nothing cascades between collections.
//!
//! The steps are separate store writes. If a later step fails, the earlier ones
//! stay applied.

use std::sync::Arc;

use orgdocs_persistence::core::DocumentStore;
use orgdocs_persistence::error::{StorageResult, ValidationError};
use orgdocs_persistence::schema::{USER_SCHEMA, json_type_name, user_field_names, validate_document};
use orgdocs_persistence::types::{Document, DocumentId, Filter, Patch, Projection};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, warn};

use super::crud::not_found;
use super::outcome::{Created, Deleted, Updated};
use super::spec::{DEPARTMENTS, PERMISSIONS, USERS};

/// Fields returned by the user list.
const LIST_FIELDS: [&str; 4] = ["name", "employee_id", "position", "department.name"];

const DEPARTMENT_FIELD: &str = "department";
const PERMISSIONS_FIELD: &str = "permissions";

/// Whether an embedded reference resolves to a stored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStatus {
    /// Every referenced document exists.
    Linked,
    /// At least one referenced document is missing.
    NotFound,
    /// The embedded id is not a valid identifier.
    InvalidIdentifier,
}

/// Result of resolving `department.id` against the departments collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentLink {
    /// The embedded department id.
    pub id: String,
    /// Resolution result.
    pub status: LinkStatus,
}

/// Result of resolving every `permissions[*].id` against the permission groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionLinks {
    /// `Linked` when every id resolved.
    pub status: LinkStatus,
    /// Embedded ids that are malformed or point at nothing.
    pub missing: Vec<String>,
}

/// Per-field results of a profile update.
///
/// `department` and `permission` are `None` when the patch did not name the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileUpdateReport {
    /// Outcome of the merge update on the user document.
    pub user: Updated,
    /// Link check for the embedded department.
    pub department: Option<DepartmentLink>,
    /// Link check for the embedded permission groups.
    pub permission: Option<PermissionLinks>,
}

/// The `{id, name}` pair embedded in a user.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Reference {
    id: String,
    name: String,
}

impl Reference {
    fn from_value(path: &str, value: &Value) -> Result<Self, ValidationError> {
        let Value::Object(object) = value else {
            return Err(ValidationError::InvalidType {
                path: path.to_string(),
                expected: "object".to_string(),
                found: json_type_name(value).to_string(),
            });
        };

        let field = |name: &str| -> Result<String, ValidationError> {
            let child = format!("{}.{}", path, name);
            match object.get(name) {
                Some(Value::String(s)) => Ok(s.clone()),
                Some(other) => Err(ValidationError::InvalidType {
                    path: child,
                    expected: "string".to_string(),
                    found: json_type_name(other).to_string(),
                }),
                None => Err(ValidationError::MissingRequiredField { path: child }),
            }
        };

        Ok(Self {
            id: field("id")?,
            name: field("name")?,
        })
    }

    fn to_value(&self) -> Value {
        json!({"id": self.id, "name": self.name})
    }
}

/// User profile operations.
pub struct UserService<S> {
    store: Arc<S>,
}

impl<S: DocumentStore> UserService<S> {
    /// Creates a service over an injected store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Lists users with their name, employee id, position and department name.
    pub async fn list(&self) -> StorageResult<Vec<Document>> {
        let projection = Projection::include(LIST_FIELDS);
        self.store
            .find(USERS.collection, &Filter::All, Some(&projection))
            .await
    }

    /// Returns the profile fields of one user.
    pub async fn get(&self, id: DocumentId) -> StorageResult<Document> {
        let projection = Projection::include(user_field_names());
        self.store
            .find_one(USERS.collection, &Filter::by_id(id), Some(&projection))
            .await?
            .ok_or_else(|| not_found(&USERS, id).into())
    }

    /// Validates and inserts a user.
    pub async fn create(&self, document: Document) -> StorageResult<Created> {
        validate_document(&document, &USER_SCHEMA)?;
        let id = self.store.insert(USERS.collection, document).await?;
        debug!(id = %id, "User created");
        Ok(Created::new(USERS.label, id))
    }

    /// Removes a user.
    pub async fn delete(&self, id: DocumentId) -> StorageResult<Deleted> {
        let outcome = self
            .store
            .delete(USERS.collection, &Filter::by_id(id))
            .await?;
        if !outcome.is_deleted() {
            return Err(not_found(&USERS, id).into());
        }
        Ok(Deleted::new(USERS.label))
    }

    /// Applies a partial profile update.
    ///
    /// 1. `department` must be an `{id, name}` object; it is written on its own,
    ///    normalized to exactly those two keys.
    /// 2. `permissions` is written on its own, verbatim.
    /// 3. The full patch is merged. The user must exist.
    /// 4. Embedded ids are resolved against their collections for the report.
    pub async fn update_profile(
        &self,
        id: DocumentId,
        fields: Document,
    ) -> StorageResult<ProfileUpdateReport> {
        let mut fields = Patch::new(fields)?.into_fields();
        let filter = Filter::by_id(id);
        let mut modified = false;

        let department = match fields.get(DEPARTMENT_FIELD) {
            Some(value) => {
                if !self.store.exists(USERS.collection, id).await? {
                    return Err(not_found(&USERS, id).into());
                }
                let reference = Reference::from_value(DEPARTMENT_FIELD, value)?;
                let normalized = reference.to_value();
                let outcome = self
                    .store
                    .update(
                        USERS.collection,
                        &filter,
                        &Patch::set(DEPARTMENT_FIELD, normalized.clone())?,
                    )
                    .await?;
                modified |= outcome.is_modified();
                fields.insert(DEPARTMENT_FIELD.to_string(), normalized);
                Some(reference)
            }
            None => None,
        };

        let permissions = fields.get(PERMISSIONS_FIELD).cloned();
        if let Some(value) = &permissions {
            let outcome = self
                .store
                .update(
                    USERS.collection,
                    &filter,
                    &Patch::set(PERMISSIONS_FIELD, value.clone())?,
                )
                .await?;
            modified |= outcome.is_modified();
        }

        let outcome = self
            .store
            .update(USERS.collection, &filter, &Patch::new(fields)?)
            .await?;
        if !outcome.is_match() {
            return Err(not_found(&USERS, id).into());
        }
        modified |= outcome.is_modified();

        let department = match department {
            Some(reference) => Some(self.resolve_department(reference.id).await?),
            None => None,
        };
        let permission = match permissions {
            Some(value) => Some(self.resolve_permissions(&value).await?),
            None => None,
        };

        debug!(
            id = %id,
            modified,
            department = ?department.as_ref().map(|link| link.status),
            permission = ?permission.as_ref().map(|links| links.status),
            "User profile updated"
        );

        Ok(ProfileUpdateReport {
            user: Updated::new(USERS.label, modified),
            department,
            permission,
        })
    }

    async fn resolve_department(&self, raw: String) -> StorageResult<DepartmentLink> {
        let status = match DocumentId::parse(&raw) {
            Ok(id) => self.link_status(DEPARTMENTS.collection, id).await?,
            Err(_) => LinkStatus::InvalidIdentifier,
        };
        if status != LinkStatus::Linked {
            warn!(department = %raw, status = ?status, "User references an unknown department");
        }
        Ok(DepartmentLink { id: raw, status })
    }

    async fn link_status(&self, collection: &str, id: DocumentId) -> StorageResult<LinkStatus> {
        Ok(if self.store.exists(collection, id).await? {
            LinkStatus::Linked
        } else {
            LinkStatus::NotFound
        })
    }

    async fn resolve_permissions(&self, value: &Value) -> StorageResult<PermissionLinks> {
        let ids = value
            .as_array()
            .into_iter()
            .flatten()
            .filter_map(|item| item.get("id").and_then(Value::as_str));

        let mut missing = Vec::new();
        let mut malformed = false;
        for raw in ids {
            match DocumentId::parse(raw) {
                Ok(id) => {
                    if self.link_status(PERMISSIONS.collection, id).await? != LinkStatus::Linked {
                        missing.push(raw.to_string());
                    }
                }
                Err(_) => {
                    malformed = true;
                    missing.push(raw.to_string());
                }
            }
        }

        let status = if missing.is_empty() {
            LinkStatus::Linked
        } else if malformed {
            LinkStatus::InvalidIdentifier
        } else {
            LinkStatus::NotFound
        };
        if !missing.is_empty() {
            warn!(missing = ?missing, "User references unknown permission groups");
        }
        Ok(PermissionLinks { status, missing })
    }
}
