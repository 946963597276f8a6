//! Shared application state held in Leptos context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! State structs are plain data wrapped in `RwSignal` by `app::App`;
//! mutation goes through the action functions alongside each struct so
//! pages and effects never hand-roll divergent update logic.

pub mod auth;
