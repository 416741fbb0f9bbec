//! Client application state.
//!
//! ARCHITECTURE
//! ============
//! Plain Rust state machines with no Leptos types, so they can be unit
//! tested directly. Components mirror them into signals.

pub mod nav;
pub mod session;
