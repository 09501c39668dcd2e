//! Snapshot tests for TypeScript code generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use ehrgen_codegen_typescript::{Generator, LanguageCodegen};
use ehrgen_schema::Schema;

fn generate_files(yaml: &str, namespace: &str) -> Vec<(String, String)> {
    let mut schema: Schema = serde_yaml::from_str(yaml).expect("Failed to parse schema");
    schema.namespace = namespace.to_string();

    Generator
        .render(&[schema])
        .into_iter()
        .map(|f| (f.path, f.content))
        .collect()
}

fn get_file<'a>(files: &'a [(String, String)], path: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
}

#[test]
fn test_generate_writes_namespace_tree() {
    let temp = tempfile::TempDir::new().unwrap();
    let mut schema: Schema =
        serde_yaml::from_str("resource: Patient\nfields: []").unwrap();
    schema.namespace = "fhir_r4".to_string();

    let result = Generator.generate(&[schema], temp.path()).unwrap();

    assert_eq!(result.written.len(), 2);
    assert!(temp.path().join("fhir_r4/index.ts").exists());
    assert!(temp.path().join("fhir_r4/patient.ts").exists());
}

#[test]
fn test_patient_interface() {
    let files = generate_files(
        r#"
resource: Patient
description: Patient demographics.
fields:
  - name: id
    type: id
    required: true
  - name: birthDate
    type: date
    pii_level: high
"#,
        "fhir_r4",
    );

    let module = get_file(&files, "fhir_r4/patient.ts").expect("patient.ts not found");
    insta::assert_snapshot!("patient_interface", module);
}
