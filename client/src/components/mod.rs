//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and content primitives while reading shared
//! session state from Leptos context providers.

pub mod carousel;
pub mod journey_card;
pub mod media_frame;
pub mod session_gate;
pub mod site_header;
