//! Configuration module for the cropcast application.

pub mod api;

mod debug; // Private; forces files to use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

// Re-export commonly used items
pub use api::{API, DEFAULT_BASE_URL};
