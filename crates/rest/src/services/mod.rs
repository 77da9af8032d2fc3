//! Resource services.
//!
//! Services sit between the HTTP handlers and the [`DocumentStore`]: they validate
//! input, shape queries, and turn store outcomes into typed results. Handlers only
//! map those results onto status codes.
//!
//! - [`CrudService`] - generic operations for books, permission groups and departments
//! - [`UserService`] - user profiles, including the multi-step profile update
//!
//! [`DocumentStore`]: orgdocs_persistence::core::DocumentStore

mod crud;
mod outcome;
mod spec;
mod user;

pub use crud::CrudService;
pub use outcome::{Created, Deleted, Updated};
pub use spec::{BOOKS, DEPARTMENTS, PERMISSIONS, ResourceSpec, USERS};
pub use user::{DepartmentLink, LinkStatus, PermissionLinks, ProfileUpdateReport, UserService};
