use std::path::PathBuf;

use serde::Deserialize;

use crate::field::Field;

/// One generatable schema unit, deserialized from a single YAML file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub name: Option<String>,
    /// FHIR schemas use 'resource' instead of 'name'.
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Provenance, stamped by the loader. Not semantic.
    #[serde(skip)]
    pub source_file: PathBuf,
    /// Containing directory name, stamped by the loader.
    #[serde(skip)]
    pub namespace: String,
}

impl Schema {
    /// Resolve the schema name; an explicit non-empty `name` wins over
    /// `resource`. `None` marks the schema invalid (excluded from loads).
    pub fn resolved_name(&self) -> Option<&str> {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => Some(name),
            _ => match self.resource.as_deref() {
                Some(resource) if !resource.is_empty() => Some(resource),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_wins_over_resource() {
        let schema: Schema =
            serde_yaml::from_str("name: CustomPatient\nresource: Patient").unwrap();
        assert_eq!(schema.resolved_name(), Some("CustomPatient"));
    }

    #[test]
    fn test_resource_fallback() {
        let schema: Schema = serde_yaml::from_str("resource: Patient").unwrap();
        assert_eq!(schema.resolved_name(), Some("Patient"));
    }

    #[test]
    fn test_empty_name_falls_through() {
        let schema: Schema = serde_yaml::from_str("name: \"\"\nresource: Patient").unwrap();
        assert_eq!(schema.resolved_name(), Some("Patient"));
    }

    #[test]
    fn test_unnamed_schema_is_invalid() {
        let schema: Schema = serde_yaml::from_str("description: nothing here").unwrap();
        assert_eq!(schema.resolved_name(), None);
    }

    #[test]
    fn test_unknown_keys_are_tolerated() {
        // Real FHIR schema files carry extra keys (version, fhir_url).
        let schema: Schema = serde_yaml::from_str(
            "resource: Patient\nversion: R4\nfhir_url: http://hl7.org/fhir/patient\nfields: []",
        )
        .unwrap();
        assert_eq!(schema.resolved_name(), Some("Patient"));
    }
}
