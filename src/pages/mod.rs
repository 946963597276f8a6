//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates policy to the
//! auth core: pages dispatch store actions but never write the session
//! cookie or navigate after login — the reconciler does both.

pub mod library;
pub mod login;
pub mod register;
