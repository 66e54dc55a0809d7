//! Configuration for the helpers that have tunable conventions
//!
//! This module contains the configuration system components:
//! - `types`: week start and sentence connector settings
//! - `loader`: configuration file loading and parsing

pub mod loader;
pub mod types;

// Re-export commonly used types for convenience
pub use loader::Config;
pub use types::{SentenceConnectors, WeekStart};
