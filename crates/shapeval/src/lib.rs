//! # Shapeval
//!
//! Tagged, reference-counted runtime values for a small 2D shape
//! description language.
//!
//! Every runtime value is reached through a [`Value`] handle. Immediate
//! kinds (null, booleans, numbers) live inline; everything else sits behind
//! an atomically counted [`std::sync::Arc`], so handles are cheap to clone
//! and safe to share across threads. Values never change once built.
//!
//! ## Architecture
//!
//! - **Value model**: [`Value`], its [`Tag`], and the [`RefValue`] capability
//!   every heap kind implements (tag, print, checked downcast)
//! - **Shape2D**: a 2D shape represented as a shared, immutable [`Record`]
//! - **Printing**: every value prints as a re-readable literal
//! - **Reading**: [`read_value`] turns a printed literal back into a value
//! - **Shape protocol**: optional field checks layered above construction
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use shapeval::{Record, Shape2D, Value};
//!
//! let record = Arc::new(
//!     Record::new()
//!         .with_field("radius", Value::from(2.0))
//!         .with_field("center", Value::list(vec![Value::from(0), Value::from(0)])),
//! );
//! let shape = Value::from(Shape2D::new(record));
//!
//! assert_eq!(shape.to_string(), "{center: [0, 0], radius: 2}");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod protocol;
pub mod read;
pub mod value;

// Re-export main types
pub use context::{PrintContext, ReadContext};
pub use error::{Error, ReadError, Result};
pub use read::{read_value, read_value_with};
pub use value::{Function, NativeFnPtr, Printer, Record, RefValue, Shape2D, Tag, Value};

/// Shapeval version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
