//! HTTP request handlers.
//!
//! - [`crud`] - list/read/create/update/delete for books, permission groups and departments
//! - [`user`] - user profiles
//! - [`health`] - health, liveness and readiness endpoints

pub mod crud;
pub mod health;
pub mod user;

// Re-export handlers for convenience
pub use crud::{
    Books, Departments, PermissionGroups, Resource, create_handler, delete_handler, list_handler,
    read_handler, update_handler,
};
pub use health::{health_handler, liveness_handler, readiness_handler};
pub use user::{
    create_user_handler, delete_user_handler, list_users_handler, read_user_handler,
    update_user_handler,
};
