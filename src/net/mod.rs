//! Networking modules for the activities REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls behind the `ActivityApi` seam and `types`
//! defines the wire schema.

pub mod api;
pub mod types;
