//! Common test utilities for HTTP API testing.
//!
//! - [`harness`] - test server over a store
//! - [`fixtures`] - request bodies
//! - [`assertions`] - response assertions
//! - [`stores`] - misbehaving stores for fault tests

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;
pub mod harness;
pub mod stores;
