//! Common utilities for the Tessera crates.
//!
//! This crate provides shared infrastructure used by the selector builder,
//! the object helpers, and the CLI:
//! - **Warning System** - colored, deduplicated stderr output for input that
//!   is accepted but probably not what the caller meant

pub mod warning;
