use std::path::PathBuf;

use serde::Deserialize;

/// A single source-to-target field correspondence.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldMapping {
    /// Source field path in the vendor system.
    #[serde(default)]
    pub source: String,
    /// Target field path on the resolved resource.
    pub target: String,
    /// Named transform applied in the target runtime (e.g. `to_iso8601`).
    /// Opaque to ehrgen; generators emit it as a call, never validate it.
    #[serde(default)]
    pub transform: Option<String>,
}

/// A cross-system ETL mapping document, correlated with a `Schema` only by
/// `target_resource` at generation time.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaMapping {
    pub source_system: String,
    pub source_table: String,
    pub target_resource: String,
    #[serde(default)]
    pub field_mappings: Vec<FieldMapping>,
    /// Provenance, stamped by the loader.
    #[serde(skip)]
    pub source_file: PathBuf,
}
