//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic. Each keeps its decision logic in plain functions so
//! the interesting behavior is testable without a WASM runner.

pub mod broadcast;
pub mod cookie;
pub mod reconcile;
