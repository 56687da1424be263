//! Prelude module for sorani_calendar crate.
//!
//! Re-exports the derive_more derive macros used across the crate.

#[allow(unused_imports)]
pub use derive_more::Display;
