//! Core utilities and types for the ehrgen schema code generator.
//!
//! This crate provides the abstract field-type vocabulary, case conversion
//! helpers, and file-writing primitives used across the ehrgen workspace.

mod field_type;
mod file;
mod utils;

// Abstract type vocabulary
pub use field_type::{COLLECTION_MARKER, FieldType, ScalarType};
// File operations
pub use file::File;
// String utilities
pub use utils::{to_camel_case, to_kebab_case, to_pascal_case, to_snake_case};
