//! Namespace partitioning for generator output.

use ehrgen_schema::Schema;
use indexmap::IndexMap;

/// Partition schemas by namespace, preserving the loader's ordering.
///
/// Namespaces appear in first-seen order and schemas keep their relative
/// order within each namespace, so generation walks the tree exactly the
/// way it was loaded.
pub fn group_by_namespace(schemas: &[Schema]) -> IndexMap<&str, Vec<&Schema>> {
    let mut groups: IndexMap<&str, Vec<&Schema>> = IndexMap::new();
    for schema in schemas {
        groups
            .entry(schema.namespace.as_str())
            .or_default()
            .push(schema);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(namespace: &str, resource: &str) -> Schema {
        Schema {
            resource: Some(resource.to_string()),
            namespace: namespace.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_groups_preserve_input_order() {
        let schemas = vec![
            schema("fhir_r4", "Patient"),
            schema("fhir_r4", "Observation"),
            schema("epic_clarity", "Visit"),
            schema("fhir_r4", "Encounter"),
        ];

        let groups = group_by_namespace(&schemas);

        let namespaces: Vec<&str> = groups.keys().copied().collect();
        assert_eq!(namespaces, vec!["fhir_r4", "epic_clarity"]);

        let fhir: Vec<&str> = groups["fhir_r4"]
            .iter()
            .filter_map(|s| s.resolved_name())
            .collect();
        assert_eq!(fhir, vec!["Patient", "Observation", "Encounter"]);
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        let groups = group_by_namespace(&[]);
        assert!(groups.is_empty());
    }
}
