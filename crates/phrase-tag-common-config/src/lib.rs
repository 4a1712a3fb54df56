//! Configuration types for phrase-tag.
//!
//! Settings live in `.phrase-tag/config.yaml`, may reference environment
//! variables, and can be overridden by `PHRASE_TAG_*` variables.

pub mod env;
pub mod loader;
pub mod types;

pub use env::*;
pub use loader::*;
pub use types::*;
