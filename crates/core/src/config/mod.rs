//! Validator settings loading and schema definitions
//!
//! Settings are optional; every field has a default that matches the
//! presets package layout.

mod loader;
mod schema;

pub use loader::Settings;
pub use schema::*;
