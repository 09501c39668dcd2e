//! Schema loading and protected-data override resolution for ehrgen.
//!
//! A schema root is a directory tree whose immediate subdirectories are
//! namespaces (healthcare standards or vendor systems). This crate discovers
//! and deserializes the schema, mapping, and override documents in that tree
//! and hands ordered, namespace-stamped collections to the code generators.

mod error;
mod field;
mod loader;
mod mapping;
mod overrides;
mod pii;
mod schema;

pub use error::{Error, Result};
pub use field::Field;
pub use loader::{BASE_NAMESPACE, LoadWarning, Loaded, LoadedMappings, Loader, MAPPING_SUFFIX};
pub use mapping::{FieldMapping, SchemaMapping};
pub use overrides::{
    FieldOverride, OVERRIDE_DIR, OverrideResolver, OverrideWarning, SchemaOverride, merge,
};
pub use pii::{HipaaIdentifier, MaskingStrategy, PiiCategory, PiiLevel};
pub use schema::Schema;
