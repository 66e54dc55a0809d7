//! Rails-style helper methods for Rust collections, maps, numbers, strings and dates.
//!
//! ```rust
//! use garnish::prelude::*;
//!
//! assert_eq!([1, 2, 3, 4].combination(2).len(), 6);
//! assert_eq!(23.ordinalize(), "23rd");
//! assert_eq!("employee_salary".humanize(), "Employee salary");
//! assert_eq!(3.days(), Duration::days(3));
//! ```

/// Configuration for helpers whose output follows a convention.
pub mod config;

/// Fixed tables and defaults.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for built-in types.
pub mod ext;

/// Every extension trait in one import.
pub mod prelude;

/// Durations, date ranges and the UTC clock.
pub mod temporal;

/// Common types shared between modules.
pub mod types;
