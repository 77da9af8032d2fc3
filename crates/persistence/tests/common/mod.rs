//! Test infrastructure for the persistence layer.
//!
//! Shared fixtures and a backend-agnostic contract suite that every
//! [`DocumentStore`](orgdocs_persistence::core::DocumentStore) must pass.

#![allow(dead_code)]

pub mod contract;
pub mod fixtures;

pub use fixtures::*;
