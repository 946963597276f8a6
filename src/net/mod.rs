//! Networking modules for the server's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `types` defines the shared wire schema.
//! Auth endpoints return the opaque session token the rest of the app
//! treats as its credential; nothing client-side inspects it.

pub mod api;
pub mod types;
