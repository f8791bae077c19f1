//! CSS selector building for Tessera.
//!
//! # Scope
//!
//! This crate implements:
//! - **Selector Builder** - appends element, id, class, attribute,
//!   pseudo-class and pseudo-element fragments while enforcing
//!   [compound selector](https://www.w3.org/TR/selectors-4/#compound) order
//!   - `element`, `id` and `pseudo-element` at most once
//!   - `class`, `attribute` and `pseudo-class` repeatable
//! - **Factory** - one-call entry points that start a new builder
//! - **Combinators** - joining two built selectors with a combinator token
//!
//! # Not Implemented
//!
//! - Selector parsing or matching
//! - Validation of identifiers, attribute syntax or combinator tokens

/// Standard combinator tokens per [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators).
pub mod combinator;
/// Errors raised by the selector builder.
pub mod error;
/// Factory entry points that start a new selector.
pub mod factory;
/// Order-checked selector builder per [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound).
pub mod selector;

pub use combinator::Combinator;
pub use error::SelectorError;
pub use factory::SelectorFactory;
pub use selector::{Category, SelectorBuilder};
