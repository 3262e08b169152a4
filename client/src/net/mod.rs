//! Networking modules for the resource REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the wire records together
//! with the schema each admin table is generated from.

pub mod api;
pub mod types;
