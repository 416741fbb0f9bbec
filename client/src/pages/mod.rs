//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (params, session gating,
//! response status) and delegates rendering details to `components`.

pub mod admin;
pub mod campaign;
pub mod client_dashboard;
pub mod client_journey;
pub mod concept;
pub mod home;
pub mod journeys;
pub mod login;
pub mod not_found;
