//! Extension traits for built-in Rust types.
//!
//! Each file extends one kind of value:
//! - `collection.rs` - slices, vectors, slices of options, rows and maps
//! - `mapping.rs` - insertion-ordered `IndexMap`s
//! - `numeric.rs` - signed integers and floats
//! - `text.rs` - `str`
//! - `datetime.rs` - `chrono::DateTime<Utc>`
//! - `dig.rs` - nested `serde_json` values, shared by the collection and mapping helpers
//!
//! Nothing is registered globally. A trait's methods are only available where the trait is
//! imported, either one at a time or all at once through [`crate::prelude`].
//!
//! # Example
//!
//! ```rust
//! use garnish::ext::{SliceExt, StrExt};
//!
//! assert_eq!([1, 2, 3].second(), Some(&2));
//! assert_eq!("person_id".humanize(), "Person");
//! ```
pub mod collection;
pub mod datetime;
pub mod dig;
pub mod mapping;
pub mod numeric;
pub mod text;

// Re-export all extension traits for convenience
pub use collection::{Compact, MatrixExt, PluckExt, SliceExt, VecExt};
pub use datetime::{Change, DateTimeExt};
pub use dig::{Dig, Segment};
pub use mapping::MapExt;
pub use numeric::{FloatExt, IntegerExt};
pub use text::StrExt;
