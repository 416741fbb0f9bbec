//! Domain services used by HTTP routes and the route guard.
//!
//! ARCHITECTURE
//! ============
//! Service modules own provider integration and token handling so route
//! handlers can stay focused on protocol translation and cookie plumbing.

pub mod auth;
pub mod memory_auth;
pub mod session;
pub mod supabase;
