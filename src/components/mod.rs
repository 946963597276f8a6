//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from Leptos context providers; routing
//! policy (who may see a guest page, what happens on path change) lives
//! here rather than in the pages themselves.

pub mod guest_gate;
pub mod scroll_to_top;
