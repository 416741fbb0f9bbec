//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/server environment concerns from page and
//! component logic to improve reuse and testability.

pub mod auth;
pub mod session_expiry;
pub mod session_seed;
