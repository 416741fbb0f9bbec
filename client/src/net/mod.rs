//! Network boundary: session DTOs and the HTTP auth client.

pub mod api;
pub mod types;
