//! Networking modules for the categories REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the HTTP calls behind the `CategoryService` trait and `types`
//! defines the JSON schema shared with the server.

pub mod api;
pub mod types;
