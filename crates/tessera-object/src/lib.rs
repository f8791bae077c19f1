//! Value objects and typed JSON helpers for Tessera.
//!
//! # Scope
//!
//! This crate implements:
//! - **Rectangle** - width and height with an area computed on demand
//! - **Shape** - the behavior a deserialized record is rebuilt into
//! - **JSON helpers** - compact serialization, and deserialization that
//!   first parses a plain record and then rebuilds the requested type from it
//!
//! # Example
//!
//! ```
//! use tessera_object::{Rectangle, deserialize, serialize};
//!
//! let json = serialize(&Rectangle::new(10, 20))?;
//! assert_eq!(json, r#"{"width":10,"height":20}"#);
//!
//! let rect: Rectangle<u32> = deserialize(&json)?;
//! assert_eq!(rect.area(), 200);
//! # Ok::<(), tessera_object::ObjectError>(())
//! ```

/// Errors from the JSON helpers.
pub mod error;
/// JSON serialization and typed deserialization.
pub mod json;
/// The rectangle value object.
pub mod rectangle;
/// Shared shape behavior.
pub mod shape;

pub use error::ObjectError;
pub use json::{deserialize, parse, rebuild, serialize};
pub use rectangle::Rectangle;
pub use shape::Shape;
