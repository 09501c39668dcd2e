//! Organization-specific overrides for protected-data metadata.
//!
//! Override documents live under `schema_overrides/` mirroring the base
//! schema tree (e.g. `schema_overrides/fhir_r4/patient.yaml`) and may change
//! only the five protected-data attributes of existing fields. They never
//! carry structural keys; the base schema's shape is authoritative.
//!
//! Example override file:
//!
//! ```yaml
//! description: Custom overrides for our organization
//! field_overrides:
//!   birthDate:
//!     pii_level: critical
//!     masking_strategy: generalize
//!   address:
//!     pii_level: high
//!     masking_strategy: partial
//!     masking_params:
//!       show_last: 5
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::error::{Error, Result};
use crate::field::Field;
use crate::pii::{HipaaIdentifier, MaskingStrategy, PiiCategory, PiiLevel};
use crate::schema::Schema;

/// Reserved subdirectory holding override documents. Never scanned as a
/// namespace and never walked for mapping files.
pub const OVERRIDE_DIR: &str = "schema_overrides";

/// Partial metadata patch for a single field. Structural keys (`type`,
/// `required`, `children`) are rejected at deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldOverride {
    #[serde(default)]
    pub pii_level: Option<PiiLevel>,
    #[serde(default)]
    pub pii_category: Option<PiiCategory>,
    #[serde(default)]
    pub hipaa_identifier: Option<HipaaIdentifier>,
    #[serde(default)]
    pub masking_strategy: Option<MaskingStrategy>,
    #[serde(default)]
    pub masking_params: Option<IndexMap<String, serde_yaml::Value>>,
}

/// An override document for one schema.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaOverride {
    /// Documentary only; the override is matched to its schema by file path.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub field_overrides: IndexMap<String, FieldOverride>,
}

/// Warning surfaced while resolving overrides. Never fatal.
#[derive(Debug, Error)]
pub enum OverrideWarning {
    /// Drift between an override file and its evolving base schema.
    #[error("override for '{schema}' names unknown field '{field}'")]
    UnknownField { schema: String, field: String },

    #[error("ignoring invalid override file '{}': {error}", path.display())]
    Invalid { path: PathBuf, error: Box<Error> },
}

/// Merge an override document into a base schema.
///
/// Pure with respect to `base`: the result is a derived copy, so repeated
/// generation runs against the loader's cached originals stay idempotent.
/// Only the five protected-data attributes are replaced; `type`, `required`,
/// `description`, and `children` pass through untouched. Entries matching no
/// field anywhere in the tree are reported as drift warnings.
pub fn merge(base: &Schema, overrides: &SchemaOverride) -> (Schema, Vec<OverrideWarning>) {
    let mut merged = base.clone();
    let mut applied = HashSet::new();
    apply_to_fields(&mut merged.fields, &overrides.field_overrides, &mut applied);

    let schema_name = base.resolved_name().unwrap_or_default().to_string();
    let warnings = overrides
        .field_overrides
        .keys()
        .filter(|name| !applied.contains(name.as_str()))
        .map(|name| OverrideWarning::UnknownField {
            schema: schema_name.clone(),
            field: name.clone(),
        })
        .collect();

    (merged, warnings)
}

fn apply_to_fields(
    fields: &mut [Field],
    overrides: &IndexMap<String, FieldOverride>,
    applied: &mut HashSet<String>,
) {
    for field in fields {
        if let Some(patch) = overrides.get(&field.name) {
            applied.insert(field.name.clone());
            if let Some(level) = patch.pii_level {
                field.pii_level = Some(level);
            }
            if let Some(category) = patch.pii_category {
                field.pii_category = Some(category);
            }
            if let Some(identifier) = patch.hipaa_identifier {
                field.hipaa_identifier = Some(identifier);
            }
            if let Some(strategy) = patch.masking_strategy {
                field.masking_strategy = Some(strategy);
            }
            if let Some(params) = &patch.masking_params {
                field.masking_params = params.clone();
            }
        }
        apply_to_fields(&mut field.children, overrides, applied);
    }
}

/// Locates and applies override documents for loaded schemas.
pub struct OverrideResolver {
    dir: PathBuf,
}

impl OverrideResolver {
    /// Create a resolver rooted at `<schema root>/schema_overrides`.
    pub fn new(root: &Path) -> Self {
        Self {
            dir: root.join(OVERRIDE_DIR),
        }
    }

    /// Apply overrides to every schema, preserving order. Schemas without an
    /// override file pass through as copies.
    pub fn resolve_all(&self, schemas: &[Schema]) -> (Vec<Schema>, Vec<OverrideWarning>) {
        let mut resolved = Vec::with_capacity(schemas.len());
        let mut warnings = Vec::new();
        for schema in schemas {
            let (merged, mut schema_warnings) = self.resolve(schema);
            resolved.push(merged);
            warnings.append(&mut schema_warnings);
        }
        (resolved, warnings)
    }

    /// Apply the override document for one schema, if present.
    pub fn resolve(&self, schema: &Schema) -> (Schema, Vec<OverrideWarning>) {
        let Some(path) = self.override_path(schema) else {
            return (schema.clone(), Vec::new());
        };
        if !path.exists() {
            return (schema.clone(), Vec::new());
        }
        match load_override(&path) {
            Ok(overrides) => merge(schema, &overrides),
            Err(error) => (
                schema.clone(),
                vec![OverrideWarning::Invalid { path, error }],
            ),
        }
    }

    /// Override files mirror the base tree: same namespace, same file stem.
    fn override_path(&self, schema: &Schema) -> Option<PathBuf> {
        let stem = schema.source_file.file_stem()?;
        let mut path = self.dir.join(&schema.namespace).join(stem);
        path.set_extension("yaml");
        Some(path)
    }
}

fn load_override(path: &Path) -> Result<SchemaOverride> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_yaml::from_str(&content)
        .map_err(|e| Error::parse(e, &content, &path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient_schema() -> Schema {
        let mut schema: Schema = serde_yaml::from_str(
            r#"
resource: Patient
fields:
  - name: birthDate
    type: date
    pii_level: high
  - name: address
    children:
      - name: postalCode
        type: string
        pii_level: medium
"#,
        )
        .unwrap();
        schema.source_file = PathBuf::from("schemas/fhir_r4/patient.yaml");
        schema.namespace = "fhir_r4".to_string();
        schema
    }

    fn overrides(yaml: &str) -> SchemaOverride {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_merge_replaces_protection_metadata_only() {
        let base = patient_schema();
        let ov = overrides(
            r#"
field_overrides:
  birthDate:
    pii_level: critical
    masking_strategy: generalize
"#,
        );

        let (merged, warnings) = merge(&base, &ov);

        assert!(warnings.is_empty());
        let field = &merged.fields[0];
        assert_eq!(field.pii_level, Some(PiiLevel::Critical));
        assert_eq!(field.masking_strategy, Some(MaskingStrategy::Generalize));
        // Structural attributes are untouched.
        assert_eq!(field.ty, "date");
        assert!(!field.required);
        // The base schema itself is never mutated.
        assert_eq!(base.fields[0].pii_level, Some(PiiLevel::High));
        assert_eq!(base.fields[0].masking_strategy, None);
    }

    #[test]
    fn test_merge_recurses_into_children() {
        let base = patient_schema();
        let ov = overrides(
            r#"
field_overrides:
  postalCode:
    pii_level: high
    hipaa_identifier: geographic
"#,
        );

        let (merged, warnings) = merge(&base, &ov);

        assert!(warnings.is_empty());
        let child = &merged.fields[1].children[0];
        assert_eq!(child.pii_level, Some(PiiLevel::High));
        assert_eq!(child.hipaa_identifier, Some(HipaaIdentifier::Geographic));
    }

    #[test]
    fn test_merge_is_idempotent() {
        let base = patient_schema();
        let ov = overrides(
            r#"
field_overrides:
  birthDate:
    pii_level: critical
    masking_params:
      bucket: decade
"#,
        );

        let (once, _) = merge(&base, &ov);
        let (twice, _) = merge(&once, &ov);

        assert_eq!(once.fields[0].pii_level, twice.fields[0].pii_level);
        assert_eq!(once.fields[0].masking_params, twice.fields[0].masking_params);
    }

    #[test]
    fn test_merge_reports_drift() {
        let base = patient_schema();
        let ov = overrides(
            r#"
field_overrides:
  maidenName:
    pii_level: high
"#,
        );

        let (_, warnings) = merge(&base, &ov);

        assert_eq!(warnings.len(), 1);
        assert!(
            warnings[0]
                .to_string()
                .contains("unknown field 'maidenName'")
        );
    }

    #[test]
    fn test_structural_keys_are_rejected() {
        let result: std::result::Result<SchemaOverride, _> = serde_yaml::from_str(
            r#"
field_overrides:
  birthDate:
    type: string
"#,
        );
        assert!(result.is_err());
    }
}
